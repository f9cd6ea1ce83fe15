/*!
Configuration of an engine.

All configuration for an [engine](crate::engine::InferenceEngine) is contained within [Config].
Each option is a [ConfigOption], which pairs a value with the bounds it must respect.

```rust
# use entailment::config::Config;
let mut config = Config::default();
assert!(config.universe_limit.set(12));
assert!(!config.universe_limit.set(128));
assert_eq!(config.universe_limit.value, 12);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// The largest universe an engine may be configured to enumerate.
///
/// Assignments are packed into a u64, with one bit per symbol.
pub const UNIVERSE_LIMIT_MAX: usize = 63;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum count of symbols over which models are enumerated.
    pub universe_limit: ConfigOption<usize>,

    /// Stop evaluation of a connective as soon as the value of the connective is known.
    pub short_circuit: ConfigOption<bool>,
}

impl Default for Config {
    /// The default configuration keeps enumeration to (roughly) sixteen million models.
    fn default() -> Self {
        Config {
            universe_limit: ConfigOption {
                name: "universe_limit",
                min: 1,
                max: UNIVERSE_LIMIT_MAX,
                value: 24,
            },

            short_circuit: ConfigOption {
                name: "short_circuit",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
