use std::path::PathBuf;

use clap::ArgMatches;

use entailment::config::Config;

/// A collection of configuration options relevant only to the CLI.
#[derive(Default)]
pub struct CliConfig {
    /// The knowledge file to read.
    pub path: PathBuf,

    /// Whether to report a counter-model, if a query is not entailed.
    pub counter_model: bool,

    /// Whether to report every model of the knowledge base.
    pub models: bool,
}

pub enum ConfigError {
    OutOfBounds {
        name: &'static str,
        min: usize,
        max: usize,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::OutOfBounds { name, min, max } => {
                write!(f, "{name} requires a value between {min} and {max}")
            }
        }
    }
}

/// An engine configuration and CLI configuration from the matches of [cli](super::cli::cli).
pub fn config_from_args(args: &ArgMatches) -> Result<(Config, CliConfig), ConfigError> {
    let mut config = Config::default();
    let mut cli_options = CliConfig::default();

    if let Some(path) = args.get_one::<PathBuf>("path") {
        cli_options.path = path.clone();
    }

    if let Some(limit) = args.get_one::<usize>("universe_limit") {
        if !config.universe_limit.set(*limit) {
            let (min, max) = config.universe_limit.min_max();
            return Err(ConfigError::OutOfBounds {
                name: config.universe_limit.name,
                min,
                max,
            });
        }
        println!("c {} set to: {limit}", config.universe_limit.name);
    }

    if args.get_flag("no_short_circuit") {
        config.short_circuit.value = false;
        println!("c Short-circuit evaluation disabled.");
    }

    if args.get_flag("counter_model") {
        println!("c A counter-model will be written for each query which is not entailed.");
        cli_options.counter_model = true;
    }

    if args.get_flag("models") {
        println!("c Every model of the knowledge base will be written.");
        cli_options.models = true;
    }

    Ok((config, cli_options))
}
