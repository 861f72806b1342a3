use clap::Parser;
use guillochage::cli::{self, Cli};
use guillochage::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    cli::run(cli)
}
