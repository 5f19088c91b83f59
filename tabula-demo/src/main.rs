mod data;
mod error;
mod pages;
mod paths;
mod render;

use std::io;
use std::path::Path;

use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::DemoError;
use crate::paths::LogFile;

fn init_logging() -> Result<(), DemoError> {
    let log = LogFile::locate();
    log.rotate(paths::KEEP_LOGS);
    WriteLogger::init(LevelFilter::Debug, Config::default(), log.create()?)?;
    info!("Logging to {}", log.path().display());
    Ok(())
}

fn run() -> Result<(), DemoError> {
    init_logging()?;

    let dataset = match std::env::args().nth(1) {
        Some(path) => data::load(Path::new(&path))?,
        None => data::people(),
    };
    info!("Dataset '{}': {} rows", dataset.name, dataset.rows.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for page in pages::pages(&dataset) {
        page.run(&mut out)?;
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
