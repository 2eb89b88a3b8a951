use std::fs::File;

use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{CombinedLogger, SharedLogger, TermLogger, WriteLogger};
use tokio::net::TcpListener;

use cli::Cli;
use fyyur::web::{self, AppState};
use fyyur::{Catalog, Config};

mod cli;

macro_rules! exit_on_error {
    ($expr:expr) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                error!("Exiting because of {}", err);
                std::process::exit(1);
            }
        }
    };
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = match cli.loglevel {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let log_config = simplelog::ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        log_config.clone(),
        simplelog::TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    ));
    if let Some(path) = &cli.log_file {
        loggers.push(WriteLogger::new(level, log_config, File::options().create(true).append(true).open(path)?));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&cli) {
        eprintln!("Could not set up logging: {err}");
        std::process::exit(1);
    }

    let config = exit_on_error!(Config::new(cli.database_url.clone(), cli.bind));
    let catalog = exit_on_error!(Catalog::try_new(&config).await);
    if cli.seed && exit_on_error!(catalog.seed_if_empty().await) {
        info!("Seeded an empty database with sample data");
    }

    let listener = exit_on_error!(TcpListener::bind(config.bind).await);
    info!("Listening on http://{}", config.bind);
    exit_on_error!(axum::serve(listener, web::router(AppState::new(catalog))).await);
}
