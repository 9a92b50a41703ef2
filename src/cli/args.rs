use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dnagen", version, about = "Random DNA FASTA generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Generate(GenerateArgs),
}

// Inputs not given as flags are prompted for on the console.
#[derive(Parser)]
pub struct GenerateArgs {
    #[arg(long)]
    pub length: Option<usize>,

    #[arg(long)]
    pub seq_id: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}
