use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};

use crate::configurationerror::ConfigurationError;

const MIN_MAXPOW2: u32 = 4;

/// Largest `maxpow2` accepted; adaptive construction clamps to it as well.
pub const MAX_MAXPOW2: u32 = 12;

/// Tolerances shared by the constructors.
///
/// `eps` is the relative accuracy adaptive construction aims for and
/// `maxpow2` caps its sample size at `2^maxpow2 + 1` points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub eps: f64,
    pub maxpow2: u32
}

impl Default for Preferences {
    fn default() -> Preferences {
        Preferences {
            eps: f64::EPSILON,
            maxpow2: 10
        }
    }
}

impl Preferences {
    pub fn new() -> Preferences {
        Preferences::default()
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Preferences, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let prefs: Preferences = serde_json::from_reader(reader)?;
        prefs.validate()?;
        Ok(prefs)
    }

    pub fn from_json_str(json: &str) -> Result<Preferences, ConfigurationError> {
        let prefs: Preferences = serde_json::from_str(json)?;
        prefs.validate()?;
        Ok(prefs)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.eps.is_finite() && self.eps > 0.0) {
            return Err(ConfigurationError::InvalidValue(
                format!("eps must be positive and finite, got {}", self.eps)
            ));
        }
        if !(MIN_MAXPOW2..=MAX_MAXPOW2).contains(&self.maxpow2) {
            return Err(ConfigurationError::InvalidValue(
                format!("maxpow2 must lie in {}..={}, got {}", MIN_MAXPOW2, MAX_MAXPOW2, self.maxpow2)
            ));
        }
        Ok(())
    }
}
