mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spotcheck::cli::{Cli, Commands, ConfigCommands};

/// Logs go to stderr so stdout carries only report output.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("spotcheck={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Report(args) => commands::report::handle_report(config, &args),
        Commands::Classify(args) => commands::classify::handle_classify(config, &args),
        Commands::Normalize(args) => commands::normalize::handle_normalize(config, &args),
        Commands::Windows => commands::report::handle_windows(config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config),
            ConfigCommands::Path => commands::config::handle_path(config),
            ConfigCommands::Init { force } => commands::config::handle_init(config, force),
        },
    }
}
