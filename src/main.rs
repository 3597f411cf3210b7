//! CLI entry point for the random Mondrian picture generator

use clap::Parser;
use mondrigen::io::cli::{Cli, OutputProcessor};

fn main() -> mondrigen::Result<()> {
    let cli = Cli::parse();
    let mut processor = OutputProcessor::new(cli);
    processor.process()
}
