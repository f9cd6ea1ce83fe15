use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use entailment::config::{Config, UNIVERSE_LIMIT_MAX};

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("entailment_cli")
        .about("Determines whether a knowledge base entails each of some queries")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The knowledge file to read.")
            .long_help("The knowledge file to read.

Each line of the file is either empty, a comment beginning with '#', a query beginning with '?', or otherwise a proposition to add to the knowledge base.
For example:

  # The weather
  rain -> wet
  rain
  ? wet"))

        .arg(Arg::new("universe_limit")
            .long("universe-limit")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The largest count of symbols to enumerate models over.
Default: {}
Maximum: {UNIVERSE_LIMIT_MAX}

A universe of n symbols has 2^n models, and queries over a larger universe are refused.", defaults.universe_limit.value)))

        .arg(Arg::new("no_short_circuit")
            .long("no-short-circuit")
            .action(ArgAction::SetTrue)
            .help("Evaluate every operand of a connective, even when the value of the connective is known."))

        .arg(Arg::new("counter_model")
            .short('c')
            .long("counter-model")
            .action(ArgAction::SetTrue)
            .help("Display a counter-model for each query which is not entailed."))

        .arg(Arg::new("models")
            .short('m')
            .long("models")
            .action(ArgAction::SetTrue)
            .help("Display every model of the knowledge base."))
}
