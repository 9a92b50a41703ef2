use crate::core::error::{DnagenError, Result};
use crate::core::model::FastaRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

// Creates or overwrites <id>.fasta inside dir. The id is not sanitized.
pub fn write(dir: &Path, record: &FastaRecord) -> Result<PathBuf> {
    let path = dir.join(record.file_name());
    write_record(&path, record).map_err(|source| DnagenError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn write_record(path: &Path, record: &FastaRecord) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{}", record.header())?;
    writeln!(w, "{}", record.sequence)?;
    w.flush()
}
