//! Quill GUI
//!
//! # What this program is
//! A small desktop app (built with the `iced` GUI library) for editing the
//! Vorbis comments ("tags") of ONE `.flac` file at a time.
//!
//! Quill never parses FLAC itself. Every read and write is a `metaflac`
//! subprocess; Quill only turns its `KEY=VALUE` text into a form and back.
//!
//! # How Iced works (super simple mental model)
//! - `Quill` = the entire memory of the app
//! - `Message` = "something happened" (button clicked, text typed, metaflac finished)
//! - `update(state, message)` = handles it and updates state
//! - `view(state)` = draws UI based on the current state
//!
//! # Behavior
//! - Browse (or pass a path on the command line) to pick a file; its tags load.
//! - 19 well-known fields get their own input; everything else lives in the
//!   free-form custom area, one `KEY=VALUE` per line.
//! - Save = `--remove-all-tags`, then one `--set-tag` per non-empty value.
//! - Remove All Tags, Show Raw Output (`--list --block-type=VORBIS_COMMENT`),
//!   Clear Form, Save Tags and Exit.
//!
//! # Architecture constraints (on purpose)
//! - UI layer calls `core::store` for everything that touches the file.
//! - The current file lives in an explicit `core::session::Session`.
//!
//! # Concurrency model
//! - metaflac calls run on a worker thread so the window keeps drawing.
//! - While one runs, `busy` disables every action that would start another,
//!   so calls happen one at a time, in order.

mod cli;
mod core;
mod gui;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::core::bridge::{Metaflac, check_available};
use crate::gui::Quill;

fn main() -> iced::Result {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    // Validate before any window exists; a bad path is a hard exit.
    let config = match Cli::parse().into_launch_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "rejected startup arguments");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        file = ?config.file,
        scale = config.scale,
        "starting Quill"
    );

    // Only a hint; every operation probes again before touching the file.
    if !check_available(&Metaflac::new(&config.program)) {
        warn!(program = %config.program.display(), "metaflac not available at startup");
    }

    iced::application(move || gui::boot(Quill::new(config.clone())), gui::update, gui::view)
        .title(Quill::title)
        .scale_factor(Quill::scale_factor)
        .window_size((1100.0, 780.0))
        .run()
}
