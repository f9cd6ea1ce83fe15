//! A library for representing propositional formulas and deciding whether a knowledge base entails some query.
//!
//! Propositions are trees of [symbols](structures::symbol) and connectives, [evaluated](structures::proposition::Proposition::evaluate) on some [valuation](structures::valuation).
//! An [engine](engine::InferenceEngine) holds a knowledge base --- a conjunction of propositions --- and answers [entailment](procedures::entails) queries by examining every valuation of the symbols of the knowledge base and query.
//!
//! # Orientation
//!
//! - The [structures] to familiarise yourself with propositions, symbols, and valuations.
//! - The [engine] to see how a knowledge base is built and extended.
//! - The [entailment procedure](procedures::entails) and [enumeration of models](procedures::models) to inspect how queries are answered.
//! - The [configuration](config) to see what may be adjusted.
//! - The [builder] to read propositions from text, as used by the command line interface.
//!
//! # Examples
//!
//! + Build a knowledge base and ask questions of it.
//!
//! ```rust
//! # use entailment::engine::InferenceEngine;
//! # use entailment::structures::proposition::Proposition;
//! let rain = Proposition::symbol("rain").unwrap();
//! let wet = Proposition::symbol("wet").unwrap();
//! let cold = Proposition::symbol("cold").unwrap();
//!
//! let knowledge = Proposition::and([Proposition::implies(rain.clone(), wet.clone()), rain]).unwrap();
//! let engine = InferenceEngine::new(knowledge).unwrap();
//!
//! assert_eq!(engine.entails(&wet), Ok(true));
//! assert_eq!(engine.entails(&cold), Ok(false));
//! ```
//!
//! + Read a knowledge base from text, and find a counter-model.
//!
//! ```rust
//! # use entailment::builder::parse_proposition;
//! # use entailment::engine::InferenceEngine;
//! let knowledge = parse_proposition("(p | q) & ~p").unwrap();
//! let engine = InferenceEngine::new(knowledge).unwrap();
//!
//! assert_eq!(engine.entails(&parse_proposition("q").unwrap()), Ok(true));
//!
//! let query = parse_proposition("q & r").unwrap();
//! let counter = engine.counter_model(&query).unwrap().unwrap();
//! assert_eq!(counter.get("r"), Some(&false));
//! ```
//!
//! # Cost
//!
//! A universe of *n* symbols has 2<sup>*n*</sup> valuations, each of which may be examined.
//! So, an engine refuses to enumerate a universe larger than the [configured limit](config::Config::universe_limit).
//!
//! # Logs
//!
//! Calls to [log!](log) are made with a variety of targets, listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the knowledge base can be filtered with `RUST_LOG=knowledge …` or,
//! - Counts of examined models can be found with `RUST_LOG=enumeration=debug …`

pub mod builder;
pub mod config;
pub mod engine;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
