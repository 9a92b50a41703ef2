use crate::core::error::{DnagenError, Result};
use std::io::{self, BufRead, Write};

pub fn length() -> Result<usize> {
    let raw = line("Provide sequence length")?;
    parse_length(&raw)
}

pub fn line(label: &str) -> Result<String> {
    let mut out = io::stdout();
    write!(out, "{}: ", label)?;
    out.flush()?;
    let mut buf = String::new();
    io::stdin().lock().read_line(&mut buf)?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

pub fn parse_length(raw: &str) -> Result<usize> {
    raw.trim().parse().map_err(|_| DnagenError::InvalidLength {
        input: raw.to_string(),
    })
}
