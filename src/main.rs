use anyhow::Result;
use clap::Parser;

use snapdock::cli::CliArgs;
use snapdock::inspect;

fn main() -> Result<()> {
    snapdock::tracing::init();

    let config = CliArgs::parse().into_config().map_err(anyhow::Error::msg)?;
    let report = inspect::run(&config)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}
