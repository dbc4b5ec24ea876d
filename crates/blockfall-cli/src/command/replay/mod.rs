use std::path::PathBuf;

use crate::{command::replay::app::ReplayApp, schema::record::RecordedGame, tui::Tui, util};

mod app;
mod screen;

#[derive(Debug, Clone, clap::Args)]
pub struct ReplayArg {
    /// Path to the recording file (JSON format)
    recording_file: PathBuf,
}

pub fn run(arg: &ReplayArg) -> anyhow::Result<()> {
    let ReplayArg { recording_file } = arg;

    eprintln!("Loading recording from {}", recording_file.display());
    let game: RecordedGame = util::read_json_file("recording", recording_file)?;

    eprintln!("Loaded {} turns", game.turns.len());

    let mut app = ReplayApp::new(recording_file.clone(), game);
    Tui::new().run(&mut app)?;

    Ok(())
}
