use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use snipvault_cli::cli::{Cli, Command};
use snipvault_cli::{commands, config};
use snipvault_library::library::Library;
use snipvault_storage::dir_store::DirStore;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let mut config = config::load_config(&config_path)?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Config(args) => commands::config_command(&config_path, &config, args, &mut out),
        command => {
            let store = DirStore::open(&config.data_dir)?;
            tracing::debug!(data_dir = %config.data_dir.display(), "store opened");
            let mut library = Library::open_with_keys(store, config.collection_keys());
            commands::run(&mut library, command, &mut out)
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
