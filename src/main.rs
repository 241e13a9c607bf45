//! CLI entry point for the halftone bar-mosaic generator

use barmosaic::io::cli::{Cli, SourceProcessor};
use clap::Parser;

fn main() -> barmosaic::Result<()> {
    let cli = Cli::parse();
    let mut processor = SourceProcessor::new(cli);
    processor.process()
}
