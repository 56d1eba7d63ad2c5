/*!
Configuration of the structures in the library.

All configuration is contained within a [Config], and each option is a [ConfigOption] which records the name of the option along with bounds on its value.

Options may be set directly, or by name from a string (e.g. when read from the arguments to a solver):

```rust
# use otter_clauses::config::Config;
# use otter_clauses::types::err::{ConfigError, ErrorKind};
let mut config = Config::default();

assert!(config.set_by_name("registry_capacity", "4096").is_ok());
assert_eq!(config.registry_capacity.value, 4096);

assert_eq!(
    config.set_by_name("luby", "2"),
    Err(ErrorKind::Config(ConfigError::UnknownOption))
);
```
*/

mod config_option;
pub use config_option::ConfigOption;

use serde::Serialize;

use crate::types::err::{ConfigError, ErrorKind};

/// The primary configuration structure.
#[derive(Clone, Debug, Serialize)]
pub struct Config {
    /// The number of atoms an [AtomRegistry](crate::db::atom::AtomRegistry) has room for before reallocation.
    ///
    /// The registry grows past this as needed, so the bound only limits the up-front reservation.
    pub registry_capacity: ConfigOption<usize>,
}

/// The largest up-front reservation a registry may be configured with.
pub const REGISTRY_CAPACITY_MAX: usize = 1 << 20;

impl Default for Config {
    fn default() -> Self {
        Config {
            registry_capacity: ConfigOption {
                name: "registry_capacity",
                min: 0,
                max: REGISTRY_CAPACITY_MAX,
                value: 1024,
            },
        }
    }
}

impl Config {
    /// Sets the option with the given name to the given value, parsed as appropriate.
    pub fn set_by_name(&mut self, name: &str, value: &str) -> Result<(), ErrorKind> {
        match name {
            "registry_capacity" => {
                let Ok(value) = value.parse::<usize>() else {
                    return Err(ConfigError::InvalidValue(self.registry_capacity.name).into());
                };
                Ok(self.registry_capacity.set(value)?)
            }

            _ => Err(ConfigError::UnknownOption.into()),
        }
    }
}
