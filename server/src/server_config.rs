use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub static_files_path: PathBuf,
    /// Pause before the computer's mark is placed, so the browser has time to
    /// render the human's move first. Purely cosmetic.
    pub bot_move_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            static_files_path: PathBuf::from("web"),
            bot_move_delay_ms: 250,
        }
    }
}

impl ServerConfig {
    pub fn load(path: &str) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path, e))?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, String> {
        serde_yaml_ng::from_str(contents).map_err(|e| format!("Failed to parse config: {}", e))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.is_empty() {
            return Err("listen_addr must not be empty".to_string());
        }
        if self.bot_move_delay_ms > 10_000 {
            return Err("bot_move_delay_ms must be at most 10000".to_string());
        }
        Ok(())
    }
}
