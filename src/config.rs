//! Wall configuration parsed from environment variables.

use wall::consts::{CULL_BUFFER, DEFAULT_BOARD_WIDTH, DEFAULT_SEED, DEFAULT_VIEWPORT_DIM};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    /// A variable is set but does not parse as the expected type.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// A variable parsed but is outside its allowed range.
    #[error("{var} must be positive, got {value}")]
    NotPositive { var: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallConfig {
    pub seed: u64,
    pub board_width: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub cull_buffer: f64,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            board_width: DEFAULT_BOARD_WIDTH,
            viewport_width: DEFAULT_VIEWPORT_DIM,
            viewport_height: DEFAULT_VIEWPORT_DIM,
            cull_buffer: CULL_BUFFER,
        }
    }
}

impl WallConfig {
    /// Build typed wall config from environment variables.
    ///
    /// All optional:
    /// - `WALL_SEED`: layout seed, default 12345
    /// - `WALL_BOARD_WIDTH`: default 800
    /// - `WALL_VIEWPORT_WIDTH` / `WALL_VIEWPORT_HEIGHT`: default 800
    /// - `WALL_CULL_BUFFER`: default 200, zero allowed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`WallConfig::from_env`] but reading from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let seed = match lookup("WALL_SEED") {
            Some(raw) => parse_seed(&raw)?,
            None => defaults.seed,
        };
        let board_width = positive(&lookup, "WALL_BOARD_WIDTH", defaults.board_width)?;
        let viewport_width = positive(&lookup, "WALL_VIEWPORT_WIDTH", defaults.viewport_width)?;
        let viewport_height = positive(&lookup, "WALL_VIEWPORT_HEIGHT", defaults.viewport_height)?;
        let cull_buffer = match lookup("WALL_CULL_BUFFER") {
            Some(raw) => {
                let value = parse_f64("WALL_CULL_BUFFER", &raw)?;
                if value < 0.0 {
                    return Err(ConfigError::Invalid { var: "WALL_CULL_BUFFER", value: raw });
                }
                value
            }
            None => defaults.cull_buffer,
        };

        Ok(Self { seed, board_width, viewport_width, viewport_height, cull_buffer })
    }
}

fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid { var: "WALL_SEED", value: raw.to_string() })
}

fn parse_f64(var: &'static str, raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::Invalid { var, value: raw.to_string() }),
    }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let value = parse_f64(var, &raw)?;
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { var, value });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
