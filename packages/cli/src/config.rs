use curriculum_editor::EditorOptions;
use curriculum_model::DEFAULT_LESSON_NAME_TEMPLATE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "curriculum.config.json";

/// Curriculum tool configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Name for lessons added by the editor (`{n}` is the lesson number)
    #[serde(default = "default_lesson_name_template")]
    pub lesson_name_template: String,

    /// Default log filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory the local gateway writes submitted documents to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_lesson_name_template() -> String {
    DEFAULT_LESSON_NAME_TEMPLATE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_out_dir() -> String {
    "submitted".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            lesson_name_template: self.lesson_name_template.clone(),
        }
    }

    /// Get absolute path to the submit output directory
    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lesson_name_template: default_lesson_name_template(),
            log_level: default_log_level(),
            out_dir: default_out_dir(),
        }
    }
}
