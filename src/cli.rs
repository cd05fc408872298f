use clap::Parser;
use std::path::PathBuf;

/// Turn a sticker pack README plus entered sticker names into a JSON record.
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Year directory holding the pack folder (default: 2021)
    #[arg(long)]
    pub year: Option<i32>,

    /// Catalog root containing the year directories (default: .)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output file (default: temp_data.json)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// JSON config file; flags given here take precedence
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
