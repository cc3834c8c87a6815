use std::{env, str::FromStr};

use bevy::{color::Color, log::warn, prelude::Resource};

use crate::{error::ConfigError, error::GridError, prelude::*};

/// Parameters of one simulation, handed to [`LifePlugin`](crate::life::LifePlugin).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LifeConfig {
    /// window width in pixels
    pub window_width: u32,
    /// window height in pixels
    pub window_height: u32,
    /// side of a single cell in pixels
    pub pixel_size: u32,
    /// generations per second
    pub fps: u32,
    /// chance of each cell being alive in the first generation
    pub alive_probability: f64,
    /// fixed seed for the first generation, random when `None`
    pub seed: Option<u64>,
    pub alive_color: Color,
    pub dead_color: Color,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH_PX,
            window_height: WINDOW_HEIGHT_PX,
            pixel_size: PIXEL_SIZE,
            fps: FPS,
            alive_probability: SEED_ALIVE_PROBABILITY,
            seed: None,
            alive_color: ALIVE_COLOR,
            dead_color: DEAD_COLOR,
        }
    }
}

impl LifeConfig {
    /// Default config with overrides read from the `LIFE_*` environment variables.
    ///
    /// Values that fail to parse are reported and ignored.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        override_from(&lookup, "LIFE_FPS", &mut self.fps);
        override_from(&lookup, "LIFE_PIXEL_SIZE", &mut self.pixel_size);
        override_from(&lookup, "LIFE_ALIVE_PROBABILITY", &mut self.alive_probability);
        let mut seed = 0;
        if override_from(&lookup, "LIFE_SEED", &mut seed) {
            self.seed = Some(seed);
        }
        self
    }

    /// amount of cells on the x axis
    #[inline]
    pub fn grid_width(&self) -> u32 {
        self.window_width.checked_div(self.pixel_size).unwrap_or(0)
    }

    /// amount of cells on the y axis
    #[inline]
    pub fn grid_height(&self) -> u32 {
        self.window_height.checked_div(self.pixel_size).unwrap_or(0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pixel_size == 0 {
            return Err(ConfigError::ZeroPixelSize);
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.grid_width() == 0 || self.grid_height() == 0 {
            return Err(ConfigError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
                pixel_size: self.pixel_size,
            });
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(GridError::InvalidProbability(self.alive_probability).into());
        }
        Ok(())
    }
}

/// returns true when `target` was overridden
fn override_from<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    target: &mut T,
) -> bool {
    let Some(raw) = lookup(key) else {
        return false;
    };
    match raw.trim().parse() {
        Ok(value) => {
            *target = value;
            true
        }
        Err(_) => {
            warn!("ignoring {key}={raw:?}: not a valid value");
            false
        }
    }
}
