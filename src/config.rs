use crate::case::Target;
use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".chc.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Case option used when none is given on the command line
    #[serde(default = "default_case")]
    pub case: String,

    #[serde(default)]
    pub format: OutputFormat,
}

/// Config file contents; unset keys leave lower-priority values alone
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    case: Option<String>,
    format: Option<OutputFormat>,
}

fn default_case() -> String {
    "snake".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case: default_case(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(case: Option<String>, format: Option<OutputFormat>) -> Result<Self> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            case,
            format,
        )
    }

    pub fn load_from(
        global_path: Option<&Path>,
        local_path: &Path,
        case: Option<String>,
        format: Option<OutputFormat>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "loading local config");
            config = config.merge(Self::from_file(local_path)?);
        }

        if let Some(case) = case {
            config.case = case;
        }
        if let Some(format) = format {
            config.format = format;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<FileConfig> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: FileConfig) -> Self {
        if let Some(case) = other.case {
            self.case = case;
        }
        if let Some(format) = other.format {
            self.format = format;
        }
        self
    }

    /// The conversion target named by `case`, falling back to snake
    pub fn target(&self) -> Target {
        Target::from_option(&self.case)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "chc").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
