/*!
The knowledge base of an engine.

A knowledge base is the conjunction of an ordered list of propositions, its conjuncts.
The list only grows, and each conjunct is shared with whoever supplied it.

An empty knowledge base is the empty conjunction, and so is true on every valuation.
*/

use std::{collections::BTreeSet, sync::Arc};

use crate::{
    structures::{proposition::Proposition, symbol::Symbol, valuation::Valuation},
    types::err::{self},
};

/// An ordered list of propositions, interpreted as a conjunction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    conjuncts: Vec<Arc<Proposition>>,
}

impl KnowledgeBase {
    /// A knowledge base whose conjuncts are those of a conjunction.
    ///
    /// Fails if the proposition is not a conjunction.
    pub fn from_conjunction(conjunction: Proposition) -> Result<Self, err::ValidationError> {
        match conjunction {
            Proposition::And(junction) => Ok(KnowledgeBase {
                conjuncts: junction.into_operands(),
            }),
            _ => Err(err::ValidationError::NotAConjunction),
        }
    }

    /// The conjuncts of the knowledge base, in the order given.
    pub fn conjuncts(&self) -> &[Arc<Proposition>] {
        &self.conjuncts
    }

    /// A count of conjuncts.
    pub fn len(&self) -> usize {
        self.conjuncts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conjuncts.is_empty()
    }

    pub(crate) fn push(&mut self, conjunct: Arc<Proposition>) {
        self.conjuncts.push(conjunct)
    }

    /// The value of the knowledge base on `valuation`.
    pub fn evaluate_with<V: Valuation + ?Sized>(
        &self,
        valuation: &V,
        short_circuit: bool,
    ) -> Result<bool, err::EvaluationError> {
        let mut value = true;
        for conjunct in &self.conjuncts {
            if !conjunct.evaluate_with(valuation, short_circuit)? {
                value = false;
                if short_circuit {
                    break;
                }
            }
        }
        Ok(value)
    }

    pub fn evaluate<V: Valuation + ?Sized>(&self, valuation: &V) -> Result<bool, err::EvaluationError> {
        self.evaluate_with(valuation, true)
    }

    /// All (distinct) symbols which occur in some conjunct.
    pub fn objects(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::default();
        for conjunct in &self.conjuncts {
            conjunct.collect_objects(&mut symbols);
        }
        symbols
    }

    /// The names of all symbols which occur in some conjunct.
    pub fn symbols(&self) -> BTreeSet<&str> {
        self.conjuncts
            .iter()
            .flat_map(|conjunct| conjunct.symbols())
            .collect()
    }

    /// The knowledge base as a string, with the empty knowledge base written '⊤'.
    pub fn formula(&self) -> String {
        format!("{self}")
    }
}

impl std::fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.conjuncts.as_slice() {
            [] => write!(f, "⊤"),
            [conjunct] => write!(f, "{conjunct}"),
            conjuncts => {
                write!(f, "(")?;
                for (index, conjunct) in conjuncts.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ∧ ")?;
                    }
                    write!(f, "{conjunct}")?;
                }
                write!(f, ")")
            }
        }
    }
}
