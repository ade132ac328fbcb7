use crate::error::{FragexError, Result};
use crate::extractor::StylePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub io: IoConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IoConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub style_policy: StylePolicy,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("simulador.html"),
            output: PathBuf::from("simulador_perfil_extracto.html"),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(FragexError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| FragexError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| FragexError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["fragex.toml", ".fragex.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref input) = cli_args.input {
            self.io.input = input.clone();
        }

        if let Some(ref output) = cli_args.output {
            self.io.output = output.clone();
        }

        if let Some(style_policy) = cli_args.style_policy {
            self.extraction.style_policy = style_policy;
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| FragexError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| FragexError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.io.input.as_os_str().is_empty() {
            return Err(FragexError::Config {
                message: "Input path must not be empty".to_string(),
            });
        }

        if self.io.output.as_os_str().is_empty() {
            return Err(FragexError::Config {
                message: "Output path must not be empty".to_string(),
            });
        }

        if self.io.input == self.io.output {
            return Err(FragexError::Config {
                message: "Input and output must be different files".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub style_policy: Option<StylePolicy>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = input;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_style_policy(mut self, style_policy: Option<StylePolicy>) -> Self {
        self.style_policy = style_policy;
        self
    }
}
