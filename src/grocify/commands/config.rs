use crate::commands::{CmdMessage, CmdResult, GrocifyPaths};
use crate::config::{GrocifyConfig, KEYS};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &GrocifyPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = GrocifyConfig::load(&paths.config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in KEYS {
                result
                    .config_values
                    .push((key.to_string(), config.get(key)?));
            }
        }
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.config_values.push((key, value));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&paths.config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} = {}",
                key,
                config.get(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}
