use crate::cli::args::{Cli, Commands, GenerateArgs};
use crate::cli::prompt;
use crate::core::engine::{self, RunConfig};
use crate::report;
use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::io;
use std::time::{Duration, Instant};

pub fn entry() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => generate(args),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let stats = stats_enabled();
    let t0 = Instant::now();

    let t_input = Instant::now();
    let length = match args.length {
        Some(v) => v,
        None => prompt::length()?,
    };
    let seq_id = match args.seq_id {
        Some(v) => v,
        None => prompt::line("Provide sequence ID")?,
    };
    let description = match args.description {
        Some(v) => v,
        None => prompt::line("Provide sequence description")?,
    };
    let name = match args.name {
        Some(v) => v,
        None => prompt::line("Provide name")?,
    };
    stage_done(stats, "input", t_input);

    let config = RunConfig {
        length,
        seq_id,
        description,
        name,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let t_engine = Instant::now();
    let output = engine::run(&config, &mut rng);
    stage_done(stats, "engine", t_engine);

    let t_fasta = Instant::now();
    let path = report::fasta::write(&args.out, &output.record)
        .with_context(|| "failed to write FASTA output")?;
    stage_done(stats, "fasta", t_fasta);
    println!("Saved FASTA record to {}", path.display());

    let t_summary = Instant::now();
    let stdout = io::stdout();
    report::summary::write(&mut stdout.lock(), &output.record)
        .with_context(|| "failed to report sequence statistics")?;
    stage_done(stats, "summary", t_summary);

    if stats {
        eprintln!(
            "DNAGEN_STATS output={} length={}",
            path.display(),
            output.record.sequence.len()
        );
        eprintln!("DNAGEN_STATS total={}", fmt_dur(t0.elapsed()));
    }

    Ok(())
}

fn stats_enabled() -> bool {
    matches!(env::var("DNAGEN_STATS").as_deref(), Ok("1"))
}

fn stage_done(stats: bool, name: &str, t: Instant) {
    if stats {
        eprintln!("DNAGEN_STATS stage={} time={}", name, fmt_dur(t.elapsed()));
    }
}

fn fmt_dur(d: Duration) -> String {
    if d.as_secs_f64() < 1.0 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}
