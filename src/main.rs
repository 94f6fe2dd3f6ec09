mod budget;
mod config;
mod db;
mod logging;
mod models;
mod run;
mod ui;
mod web;

use anyhow::Result;
use chrono::Datelike;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env()?;
    logging::init_tracing(config.log_format);

    let mut db = db::Database::open(&config.db_path)?;
    db.ensure_year_populated(chrono::Local::now().year())?;

    match args.get(1).map(String::as_str) {
        None | Some("serve") => run::as_server(db, &config),
        Some(_) => run::as_cli(&args, &mut db),
    }
}
