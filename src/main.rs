use anyhow::Result;
use clap::Parser;

use fontsrt_utils::cli::{self, Cli};
use fontsrt_utils::utils::init_logging;

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(&args.config());
    cli::run(args)
}
