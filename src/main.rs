mod app;
mod config;
mod form;
mod logging;
mod models;
mod screen;
mod store;
mod ui;

use clap::Parser;

use crate::{app::App, config::Config, store::NoteStore};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::parse();
    logging::init(&config)?;

    let mut app = App::new(NoteStore::new());
    tracing::info!("starting");
    ratatui::run(|t| app.run(t))?;

    let store = app.into_store();
    tracing::info!(count = store.len(), "exiting, notes discarded");

    Ok(())
}
