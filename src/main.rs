mod cli;
mod commands;
mod document;
mod domain;
mod services;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = services::config::load_config()?;

    if commands::handle_remote_commands(&cli, &config)? {
        return Ok(());
    }
    if commands::handle_update_commands(&cli)? {
        return Ok(());
    }
    commands::handle_report_commands(&cli)?;
    Ok(())
}
