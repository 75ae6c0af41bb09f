//! `fitcrm config [KEY] [VALUE]`.
//!
//! A malformed `config.json` reads as the defaults here too, so `Set` can
//! overwrite it with a valid file.

use crate::commands::{CmdMessage, CmdResult, FitcrmPaths};
use crate::config::FitcrmConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &FitcrmPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    let mut config = FitcrmConfig::load_or_default(dir);

    let outcome = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => CmdMessage::info(value),
            None => CmdMessage::error(format!("Unknown config key: {}", key)),
        },
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(saved) => {
                config.save(dir)?;
                CmdMessage::success(format!("Saved {} = {}", key, saved))
            }
            Err(reason) => CmdMessage::error(reason),
        },
    };

    let mut result = CmdResult::default();
    result.add_message(outcome);
    Ok(result)
}
