use serde::Serialize;

use crate::{
    misc::log::targets::{self},
    types::err::ConfigError,
};

/// A configurable value, bounded by a minimum and maximum (inclusive).
#[derive(Clone, Debug, Serialize)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd + std::fmt::Debug> ConfigOption<T> {
    /// Sets the value of the option, so long as the value is within bounds.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        let (min, max) = self.min_max();
        if min <= value && value <= max {
            log::info!(target: targets::CONFIG, "{} set to {value:?}", self.name);
            self.value = value;
            Ok(())
        } else {
            Err(ConfigError::OutOfBounds(self.name))
        }
    }
}
