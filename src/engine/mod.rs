/*!
The engine --- which owns a knowledge base and answers queries against it.

An engine is built from a conjunction, whose conjuncts become the knowledge base.
Further conjuncts may be added to the knowledge base, and queries are answered by the [entailment procedures](crate::procedures::entails).

# Example
```rust
# use entailment::engine::InferenceEngine;
# use entailment::structures::proposition::Proposition;
let rain = Proposition::symbol("rain").unwrap();
let wet = Proposition::symbol("wet").unwrap();

let knowledge = Proposition::and([Proposition::implies(rain.clone(), wet.clone()), rain]).unwrap();
let mut engine = InferenceEngine::new(knowledge).unwrap();

assert_eq!(engine.entails(&wet), Ok(true));

let cold = Proposition::symbol("cold").unwrap();
assert_eq!(engine.entails(&cold), Ok(false));

assert!(engine.add_knowledge(cold.clone()).is_ok());
assert_eq!(engine.entails(&cold), Ok(true));
```

# Sharing

Queries are answered through a shared reference, while the knowledge base is extended through an exclusive reference.
So, readers never observe a knowledge base part way through an addition, and an engine shared between threads requires some lock, e.g. a [RwLock](std::sync::RwLock), for additions.
*/

mod counters;
pub use counters::Counters;

mod knowledge;
pub use knowledge::KnowledgeBase;

use std::sync::Arc;

use crate::{
    config::Config,
    misc::log::targets::{self},
    procedures::models::Universe,
    structures::proposition::Proposition,
    types::err::{self},
};

/// An engine, holding a knowledge base.
#[derive(Debug)]
pub struct InferenceEngine {
    /// The knowledge base, which is only extended by [add_knowledge](InferenceEngine::add_knowledge).
    knowledge_base: KnowledgeBase,

    /// The configuration of the engine.
    pub config: Config,

    /// Counts of queries answered, etc.
    pub counters: Counters,
}

impl InferenceEngine {
    /// An engine with the default configuration whose knowledge base is the given conjunction.
    ///
    /// Fails if the proposition is not a conjunction.
    /// Fails also if the conjunction has more symbols than the default [universe limit](crate::config::Config::universe_limit), as no query could then be answered.
    ///
    /// ```rust
    /// # use entailment::engine::InferenceEngine;
    /// # use entailment::structures::proposition::Proposition;
    /// # use entailment::types::err::{self};
    /// let wide = (0..25)
    ///     .map(|index| Proposition::symbol(format!("s{index}")).unwrap())
    ///     .collect::<Vec<_>>();
    ///
    /// assert_eq!(
    ///     InferenceEngine::new(Proposition::and(wide).unwrap()).err(),
    ///     Some(err::ErrorKind::Engine(err::EngineError::UniverseTooLarge {
    ///         size: 25,
    ///         limit: 24
    ///     }))
    /// );
    /// ```
    pub fn new(knowledge: Proposition) -> Result<Self, err::ErrorKind> {
        Self::from_config(knowledge, Config::default())
    }

    /// An engine with the given configuration whose knowledge base is the given conjunction.
    ///
    /// Fails if the proposition is not a conjunction, or has more symbols than the configured universe limit.
    pub fn from_config(knowledge: Proposition, config: Config) -> Result<Self, err::ErrorKind> {
        let knowledge_base = KnowledgeBase::from_conjunction(knowledge)?;
        Self::from_knowledge_base(knowledge_base, config)
    }

    /// An engine with the given configuration and knowledge base.
    ///
    /// The knowledge base may be empty, and is bounded by the configured universe limit.
    pub fn from_knowledge_base(
        knowledge_base: KnowledgeBase,
        config: Config,
    ) -> Result<Self, err::ErrorKind> {
        let engine = InferenceEngine {
            knowledge_base,
            config,
            counters: Counters::default(),
        };

        engine.check_universe(&Universe::from(engine.knowledge_base.objects()))?;

        log::info!(target: targets::KNOWLEDGE, "Knowledge base: {}", engine.knowledge_base);
        Ok(engine)
    }

    /// The knowledge base of the engine.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Adds `proposition` as a conjunct of the knowledge base.
    ///
    /// The symbols of the knowledge base are bounded by the configured [universe limit](crate::config::Config::universe_limit).
    /// If the addition would take the knowledge base beyond the configured universe limit the knowledge base is left unchanged and an error is returned.
    pub fn add_knowledge(
        &mut self,
        proposition: impl Into<Arc<Proposition>>,
    ) -> Result<(), err::ErrorKind> {
        let proposition = proposition.into();

        let mut symbols = self.knowledge_base.objects();
        proposition.collect_objects(&mut symbols);
        self.check_universe(&Universe::from(symbols))?;

        log::info!(target: targets::KNOWLEDGE, "Added {}: {proposition}", proposition.connective());
        self.knowledge_base.push(proposition);
        Ok(())
    }

    /// Ensures enumeration of the universe is within the configured limit.
    pub(crate) fn check_universe(&self, universe: &Universe) -> Result<(), err::EngineError> {
        let limit = self.config.universe_limit.value;
        match universe.len() <= limit {
            true => Ok(()),
            false => {
                log::warn!(target: targets::ENUMERATION, "Universe of {} symbols exceeds limit {limit}", universe.len());
                Err(err::EngineError::UniverseTooLarge {
                    size: universe.len(),
                    limit,
                })
            }
        }
    }
}
