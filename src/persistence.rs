//! Save and load the player's trainer.
//!
//! The save file is a single postcard-encoded `Trainer`. The format is
//! internal to this build; there is no cross-version guarantee.

use crate::errors::GameResult;
use crate::trainer::Trainer;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const DEFAULT_SAVE_FILE: &str = "savegame.bin";

/// Write the full trainer graph to `path`, replacing any previous save.
pub fn save_game(trainer: &Trainer, path: &Path) -> GameResult<()> {
    let bytes = postcard::to_allocvec(trainer)?;
    fs::write(path, &bytes)?;
    log::info!(
        "Saved {} ({} creatures, {} items, {} badges) to {} [{} bytes]",
        trainer.name,
        trainer.team.len(),
        trainer.inventory.len(),
        trainer.badges.len(),
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Read a trainer back from `path`. A missing file is not an error: it
/// yields `Ok(None)` and the caller keeps whatever state it already has.
pub fn load_game(path: &Path) -> GameResult<Option<Trainer>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("No saved game at {}", path.display());
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let trainer: Trainer = postcard::from_bytes(&bytes)?;
    log::info!("Loaded {} from {}", trainer.name, path.display());
    Ok(Some(trainer))
}
