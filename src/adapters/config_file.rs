//! JSON calibration file adapter.
//!
//! Implements [`ConfigPort`] over a single JSON file.  Missing keys take
//! their defaults, so a file only needs the values being tuned:
//!
//! ```json
//! { "obstacle_threshold_cm": 6.5, "nudge_ms": 400 }
//! ```
//!
//! The file is only ever read.  A missing file is not an error; it means
//! "run with defaults".

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::ControllerConfig;

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<ControllerConfig, ConfigError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No config at {}, using defaults", self.path.display());
                return Ok(ControllerConfig::default());
            }
            Err(e) => {
                warn!("Reading {} failed: {}", self.path.display(), e);
                return Err(ConfigError::IoError);
            }
        };

        let cfg: ControllerConfig = serde_json::from_str(&text).map_err(|e| {
            warn!("Parsing {} failed: {}", self.path.display(), e);
            ConfigError::Corrupted
        })?;
        cfg.validate()?;
        info!("Loaded config from {}", self.path.display());
        Ok(cfg)
    }
}
