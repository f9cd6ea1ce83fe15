//! Decides whether the knowledge base of an engine entails some query.
//!
//! # Overview
//!
//! A knowledge base 𝐊 entails a query 𝐐 *if and only if* every valuation on which 𝐊 is true is a valuation on which 𝐐 is true.
//!
//! The value of 𝐊 and 𝐐 on a valuation depends only on the symbols of 𝐊 and 𝐐, and so it is sufficient to examine each valuation of the [universe](crate::procedures::models::Universe) of 𝐊 and 𝐐.
//! That is, each of the 2<sup>*n*</sup> valuations of the *n* symbols which occur in either.
//!
//! Roughly, then:
//!
//! ```rust,ignore
//! for assignment in universe.models()? {
//!     if knowledge_base.evaluate(&assignment)? && !query.evaluate(&assignment)? {
//!         return Ok(false);
//!     }
//! }
//! Ok(true)
//! ```
//!
//! Valuations are examined until the first counter-model, so a query which is not entailed may be answered without examining every valuation.
//!
//! # Vacuous entailment
//!
//! If 𝐊 is true on no valuation then there is no counter-model, and so 𝐊 entails every query.
//! [entails](InferenceEngine::entails) answers true in this case, as with any entailment.
//! [consult](InferenceEngine::consult) distinguishes the case with [Report::Vacuous], and [is_satisfiable](InferenceEngine::is_satisfiable) checks the case directly.
//!
//! # Example
//!
//! ```rust
//! # use entailment::engine::InferenceEngine;
//! # use entailment::reports::Report;
//! # use entailment::structures::proposition::Proposition;
//! let p = Proposition::symbol("P").unwrap();
//! let q = Proposition::symbol("Q").unwrap();
//!
//! let contradiction = Proposition::and([p.clone(), Proposition::not(p)]).unwrap();
//! let engine = InferenceEngine::new(contradiction).unwrap();
//!
//! assert_eq!(engine.entails(&q), Ok(true));
//! assert_eq!(engine.consult(&q), Ok(Report::Vacuous));
//! assert_eq!(engine.is_satisfiable(), Ok(false));
//! ```

use std::iter::once;

use crate::{
    engine::InferenceEngine,
    misc::log::targets::{self},
    procedures::models::Universe,
    reports::{Answer, Report},
    structures::{proposition::Proposition, valuation::CValuation},
    types::err::{self},
};

/// The outcome of examining the models of a universe.
struct Examination {
    /// Whether the knowledge base is true on some examined valuation.
    knowledge_held: bool,

    /// A valuation on which the knowledge base is true and the query false, if one was found.
    counter_model: Option<CValuation>,
}

/// A missing symbol during enumeration is a mismatch between the universe and the propositions evaluated.
fn mismatch(error: err::EvaluationError) -> err::ErrorKind {
    let err::EvaluationError::MissingSymbol(symbol) = error;
    log::error!(target: targets::ENUMERATION, "Symbol {symbol} missing from an enumerated model");
    err::ErrorKind::from(err::EngineError::UniverseMismatch(symbol))
}

impl InferenceEngine {
    /// Whether the knowledge base entails `query`.
    pub fn entails(&self, query: &Proposition) -> Result<bool, err::ErrorKind> {
        Ok(self.consult(query)?.is_entailed())
    }

    /// Whether the knowledge base entails `query`, distinguishing vacuous entailment.
    pub fn consult(&self, query: &Proposition) -> Result<Report, err::ErrorKind> {
        Ok(self.answer(query)?.report)
    }

    /// Some valuation of the knowledge base and query on which the knowledge base is true and `query` is false, if one exists.
    pub fn counter_model(&self, query: &Proposition) -> Result<Option<CValuation>, err::ErrorKind> {
        Ok(self.answer(query)?.counter_model)
    }

    /// The report on `query` together with any counter-model, from a single examination of the models.
    ///
    /// ```rust
    /// # use entailment::engine::InferenceEngine;
    /// # use entailment::reports::Report;
    /// # use entailment::structures::proposition::Proposition;
    /// let rain = Proposition::symbol("rain").unwrap();
    /// let cold = Proposition::symbol("cold").unwrap();
    /// let engine = InferenceEngine::new(Proposition::and([rain.clone(), rain]).unwrap()).unwrap();
    ///
    /// let answer = engine.answer(&cold).unwrap();
    /// assert_eq!(answer.report, Report::NotEntailed);
    /// assert_eq!(answer.counter_model.unwrap().get("cold"), Some(&false));
    /// assert_eq!(engine.counters.queries(), 1);
    /// ```
    pub fn answer(&self, query: &Proposition) -> Result<Answer, err::ErrorKind> {
        let examination = self.examine(query)?;

        let report = match examination {
            Examination {
                counter_model: Some(_),
                ..
            } => Report::NotEntailed,

            Examination {
                knowledge_held: true,
                ..
            } => Report::Entailed,

            Examination {
                knowledge_held: false,
                ..
            } => Report::Vacuous,
        };

        log::info!(target: targets::ENTAILMENT, "{query}: {report}");
        Ok(Answer {
            report,
            counter_model: examination.counter_model,
        })
    }

    /// Whether the knowledge base is true on some valuation of its symbols.
    pub fn is_satisfiable(&self) -> Result<bool, err::ErrorKind> {
        let universe = Universe::from(self.knowledge_base().objects());
        self.check_universe(&universe)?;

        let short_circuit = self.config.short_circuit.value;
        for assignment in universe.models()? {
            if self
                .knowledge_base()
                .evaluate_with(&assignment, short_circuit)
                .map_err(mismatch)?
            {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Every valuation of the symbols of the knowledge base on which the knowledge base is true.
    pub fn models(&self) -> Result<Vec<CValuation>, err::ErrorKind> {
        let universe = Universe::from(self.knowledge_base().objects());
        self.check_universe(&universe)?;

        let short_circuit = self.config.short_circuit.value;
        let mut models = Vec::default();
        for assignment in universe.models()? {
            if self
                .knowledge_base()
                .evaluate_with(&assignment, short_circuit)
                .map_err(mismatch)?
            {
                models.push(assignment.canonical());
            }
        }
        Ok(models)
    }

    /// Examines valuations of the knowledge base and query until a counter-model is found or every valuation has been examined.
    fn examine(&self, query: &Proposition) -> Result<Examination, err::ErrorKind> {
        let universe = Universe::from_propositions(
            self.knowledge_base()
                .conjuncts()
                .iter()
                .map(|conjunct| conjunct.as_ref())
                .chain(once(query)),
        );
        self.check_universe(&universe)?;

        log::debug!(target: targets::ENUMERATION, "Universe: {:?}", universe.symbols());

        let short_circuit = self.config.short_circuit.value;
        let mut examination = Examination {
            knowledge_held: false,
            counter_model: None,
        };
        let mut examined = 0;

        for assignment in universe.models()? {
            examined += 1;

            let knowledge_value = self
                .knowledge_base()
                .evaluate_with(&assignment, short_circuit)
                .map_err(mismatch)?;

            if !knowledge_value {
                continue;
            }
            examination.knowledge_held = true;

            if !query
                .evaluate_with(&assignment, short_circuit)
                .map_err(mismatch)?
            {
                log::trace!(target: targets::ENTAILMENT, "Counter-model: {assignment:?}");
                examination.counter_model = Some(assignment.canonical());
                break;
            }
        }

        log::debug!(target: targets::ENUMERATION, "Examined {examined} of {} models", 1_u64 << universe.len());
        self.counters.note_query(examined);

        Ok(examination)
    }
}
