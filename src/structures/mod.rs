//! Key structures, such as symbols, propositions, and valuations.
//!
//! # Other structures without an implementation
//!
//! ## Languages
//! A *language* 𝓛 is some set of [symbols](symbol), closed under negation, conjunction, disjunction, implication, and the biconditional. \
//! Every proposition is expressed in some language, and every entailment check is relative to the language of the knowledge base and query, its [universe](crate::procedures::models::Universe).
//!
//! ## (Boolean) values
//!
//! A (boolean) value is one of two things.
//! Typically the first of the pair is identified as [true] and the second as [false].

pub mod proposition;
pub mod symbol;
pub mod valuation;
