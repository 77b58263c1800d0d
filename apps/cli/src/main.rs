mod args;
mod commands;

use args::Cli;
use clap::Parser;
use smenum_kernel::config::{LogConfig, load_app_config};
use smenum_logger::{LevelFilter, Logger};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_app_config(cli.config.as_deref())?;
    let _logger = init_logger(&config.log, cli.verbose)?;

    let mut out = std::io::stdout().lock();
    commands::run(cli.command, &mut out)
}

fn init_logger(log: &LogConfig, verbose: bool) -> anyhow::Result<Logger> {
    let mut builder = Logger::builder().name(env!("CARGO_BIN_NAME")).json(log.json);

    builder =
        if verbose { builder.level(LevelFilter::DEBUG) } else { builder.level_str(&log.level)? };
    if let Some(filter) = &log.filter {
        builder = builder.env_filter(filter.as_str());
    }
    if let Some(directory) = &log.directory {
        builder = builder.directory(directory);
    }

    Ok(builder.init()?)
}
