//! Display and pacing configuration.
//!
//! Values come from environment variables, each optional:
//! - `LIFE_WINDOW_WIDTH` -- window width in pixels (default 640)
//! - `LIFE_WINDOW_HEIGHT` -- window height in pixels (default 640)
//! - `LIFE_CELL_SIZE` -- side of one cell in pixels (default 10)
//! - `LIFE_FPS` -- generations per second (default 15)
//!
//! The grid dimensions are derived from the window size divided by the cell
//! size, so both window dimensions must be exact multiples of it.

use std::time::Duration;

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    pub fps: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 640,
            cell_size: 10,
            fps: 15,
        }
    }
}

impl LifeConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, falling back to the default
    /// for every key it returns `None` for.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &'static str, default: u32| -> Result<u32, ConfigError> {
            match lookup(key) {
                Some(value) => value.trim().parse().map_err(|source| ConfigError::Invalid {
                    key,
                    value,
                    source,
                }),
                None => Ok(default),
            }
        };

        let config = Self {
            window_width: read("LIFE_WINDOW_WIDTH", defaults.window_width)?,
            window_height: read("LIFE_WINDOW_HEIGHT", defaults.window_height)?,
            cell_size: read("LIFE_CELL_SIZE", defaults.cell_size)?,
            fps: read("LIFE_FPS", defaults.fps)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("window width", self.window_width),
            ("window height", self.window_height),
            ("cell size", self.cell_size),
            ("fps", self.fps),
        ] {
            if value == 0 {
                return Err(ConfigError::NotPositive { name });
            }
        }

        for (name, size) in [("width", self.window_width), ("height", self.window_height)] {
            if size % self.cell_size != 0 {
                return Err(ConfigError::NotMultiple {
                    name,
                    size,
                    cell_size: self.cell_size,
                });
            }
        }
        Ok(())
    }

    /// Number of cells across.
    pub fn grid_width(&self) -> usize {
        (self.window_width / self.cell_size) as usize
    }

    /// Number of cells down.
    pub fn grid_height(&self) -> usize {
        (self.window_height / self.cell_size) as usize
    }

    /// Minimum time between two generations.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|&(k, v)| (k, v.to_owned())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_give_a_64_by_64_grid() {
        let config = LifeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_width(), 64);
        assert_eq!(config.grid_height(), 64);
        assert_eq!(config.frame_interval(), Duration::from_secs(1) / 15);
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = LifeConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, LifeConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = LifeConfig::from_lookup(lookup_from(&[
            ("LIFE_WINDOW_WIDTH", "800"),
            ("LIFE_WINDOW_HEIGHT", " 400 "),
            ("LIFE_CELL_SIZE", "20"),
            ("LIFE_FPS", "30"),
        ]))
        .unwrap();
        assert_eq!(config.grid_width(), 40);
        assert_eq!(config.grid_height(), 20);
        assert_eq!(config.fps, 30);
    }

    #[test]
    fn window_must_divide_into_cells() {
        let err = LifeConfig::from_lookup(lookup_from(&[("LIFE_WINDOW_HEIGHT", "645")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotMultiple {
                name: "height",
                size: 645,
                cell_size: 10,
            }
        );
        assert_eq!(
            err.to_string(),
            "window height (645px) must be a multiple of the cell size (10px)"
        );
    }

    #[test]
    fn zero_values_are_rejected() {
        let err = LifeConfig::from_lookup(lookup_from(&[("LIFE_CELL_SIZE", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::NotPositive { name: "cell size" });

        let err = LifeConfig::from_lookup(lookup_from(&[("LIFE_FPS", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::NotPositive { name: "fps" });
    }

    #[test]
    fn unparsable_value_names_the_key() {
        let err = LifeConfig::from_lookup(lookup_from(&[("LIFE_FPS", "fast")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "LIFE_FPS", .. }));
        assert!(err.to_string().starts_with("invalid LIFE_FPS=\"fast\""));
    }
}
