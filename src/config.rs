use crate::error::{QuizError, Result};
use crate::types::config::QuizConfig;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "elementos.toml";

/// Loads the optional quiz config. An explicitly-passed path must exist;
/// otherwise `elementos.toml` in the working directory is used when present,
/// and `None` means variant defaults all the way down.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<QuizConfig>> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(QuizError::PathNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(None);
            }
            default.to_path_buf()
        }
    };

    let content = std::fs::read_to_string(&path)?;
    let config: QuizConfig = toml::from_str(&content)
        .map_err(|e| QuizError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "loaded quiz config");
    Ok(Some(config))
}
