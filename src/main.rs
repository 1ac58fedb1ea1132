use clap::Parser;

use shapekit::cli::{self, Cli};
use shapekit::init_logging_with;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cli::load_config(cli.config.as_deref())?;
    init_logging_with(&config.logging)?;
    tracing::debug!("shapekit {} (built {})", shapekit::VERSION, shapekit::BUILD_DATE);

    let output = cli::run(&cli.command, &config)?;
    println!("{}", output);

    Ok(())
}
