use anyhow::Context;
use clap::Parser;
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use todo_goals::config::ConfigSource;
use todo_goals::{create_store, demo, logger, AppConfig};

#[derive(Parser)]
#[command(
    name = "todo-goals",
    about = "Replay todo/goal actions through a store and print every new state",
    version
)]
struct Cli {
    /// JSON array of action records to replay instead of the built-in demo
    #[arg(long)]
    script: Option<PathBuf>,

    /// Config file (default: ./.todo-goals.toml, then ~/.todo-goals.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the state JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, config_source) = match &cli.config {
        Some(path) => {
            let config = AppConfig::from_path(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            (config, ConfigSource::File(path.clone()))
        }
        None => AppConfig::load(),
    };

    let log_file = logger::init(&config).context("Failed to initialize logging")?;
    log::info!("Starting todo-goals");
    config_source.log();
    if let Some(log_file) = log_file {
        log::debug!("Logging to {}", log_file.display());
    }

    let actions = match &cli.script {
        Some(path) => demo::load_script(path)
            .with_context(|| format!("Failed to load script {}", path.display()))?,
        None => demo::builtin_actions(),
    };

    let store = create_store();
    if config.print_state {
        let pretty = cli.pretty || config.pretty;
        demo::subscribe_printer(&store, pretty, Rc::new(RefCell::new(io::stdout())));
    }

    demo::run(&store, actions).context("Failed to replay actions")?;

    log::info!("Exiting todo-goals");
    Ok(())
}
