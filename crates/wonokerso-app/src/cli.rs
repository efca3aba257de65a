use std::path::PathBuf;

use clap::Parser;

/// Wonokerso: ask the village assistant about Desa Wonokerso.
#[derive(Parser, Debug)]
#[command(name = "wonokerso", version, about)]
pub struct Args {
    /// Ask a single question, print the answer, and exit.
    #[arg(short = 'a', long)]
    pub ask: Option<String>,

    /// Knowledge JSON file or URL, overriding the config.
    #[arg(short = 'k', long)]
    pub knowledge: Option<String>,

    /// Print answers at once instead of typing them out.
    #[arg(long)]
    pub no_reveal: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. debug, wonokerso=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
