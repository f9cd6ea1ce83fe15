//! Propositions, built from [symbols](crate::structures::symbol) and connectives.
//!
//! A proposition is one of a closed collection of variants:
//!
//! | Variant       | Shape                         | True when                                    |
//! |---------------|-------------------------------|----------------------------------------------|
//! | Symbol        | a name                        | the valuation maps the name to true          |
//! | Not           | one operand                   | the operand is false                         |
//! | And           | two or more operands          | every operand is true                        |
//! | Or            | two or more operands          | some operand is true                         |
//! | Implication   | an antecedent and consequent  | the antecedent is false or consequent true   |
//! | Biconditional | a left and right operand      | both operands have the same value            |
//!
//! Operands are held behind an [Arc], so a sub-proposition may be shared between any number of parents without being copied.
//!
//! ```rust
//! # use entailment::structures::proposition::Proposition;
//! # use entailment::structures::valuation::CValuation;
//! let rain = Proposition::symbol("rain").unwrap();
//! let wet = Proposition::symbol("wet").unwrap();
//!
//! let rule = Proposition::implies(rain.clone(), wet.clone());
//! let formula = Proposition::and([rule, rain]).unwrap();
//!
//! assert_eq!(formula.formula(), "((rain => wet) ∧ rain)");
//! assert_eq!(formula.objects().len(), 2);
//! ```
//!
//! # Validation
//!
//! Each operand of a connective is a proposition, and so is well-formed by construction.
//! The remaining requirements --- that a symbol has a name and that a conjunction or disjunction has at least two operands --- are checked when the proposition is built.
//! An invalid proposition is never returned, and so there is no validation to defer to evaluation.

mod evaluation;
mod formula;

use std::{collections::BTreeSet, sync::Arc};

use crate::{
    structures::symbol::Symbol,
    types::err::{self},
};

/// A proposition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Proposition {
    /// An atomic proposition.
    Symbol(Symbol),

    /// The negation of a proposition.
    Not(Arc<Proposition>),

    /// The conjunction of two or more propositions.
    And(Junction),

    /// The disjunction of two or more propositions.
    Or(Junction),

    /// An antecedent paired with a consequent.
    Implication(Arc<Proposition>, Arc<Proposition>),

    /// A left proposition paired with a right proposition.
    Biconditional(Arc<Proposition>, Arc<Proposition>),
}

/// The operands of a conjunction or disjunction.
///
/// A junction is only built with at least two operands, and may only grow.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Junction {
    operands: Vec<Arc<Proposition>>,
}

impl Junction {
    fn new<P: Into<Arc<Proposition>>>(
        connective: &'static str,
        operands: impl IntoIterator<Item = P>,
    ) -> Result<Self, err::ValidationError> {
        let operands = operands
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Arc<Proposition>>>();
        match operands.len() {
            0 | 1 => Err(err::ValidationError::TooFewOperands {
                connective,
                found: operands.len(),
            }),
            _ => Ok(Junction { operands }),
        }
    }

    /// The operands of the junction, in order.
    pub fn operands(&self) -> &[Arc<Proposition>] {
        &self.operands
    }

    /// The operands of the junction, taken from the junction.
    pub fn into_operands(self) -> Vec<Arc<Proposition>> {
        self.operands
    }

    /// Appends an operand to the junction.
    pub fn push(&mut self, operand: impl Into<Arc<Proposition>>) {
        self.operands.push(operand.into())
    }
}

impl Proposition {
    /// A symbol, so long as the name is non-empty.
    pub fn symbol(name: impl AsRef<str>) -> Result<Self, err::ErrorKind> {
        Ok(Proposition::Symbol(Symbol::new(name)?))
    }

    /// The negation of `operand`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: impl Into<Arc<Proposition>>) -> Self {
        Proposition::Not(operand.into())
    }

    /// The conjunction of `operands`, so long as there are at least two operands.
    pub fn and<P: Into<Arc<Proposition>>>(
        operands: impl IntoIterator<Item = P>,
    ) -> Result<Self, err::ErrorKind> {
        Ok(Proposition::And(Junction::new("And", operands)?))
    }

    /// The disjunction of `operands`, so long as there are at least two operands.
    pub fn or<P: Into<Arc<Proposition>>>(
        operands: impl IntoIterator<Item = P>,
    ) -> Result<Self, err::ErrorKind> {
        Ok(Proposition::Or(Junction::new("Or", operands)?))
    }

    /// The implication from `antecedent` to `consequent`.
    pub fn implies(
        antecedent: impl Into<Arc<Proposition>>,
        consequent: impl Into<Arc<Proposition>>,
    ) -> Self {
        Proposition::Implication(antecedent.into(), consequent.into())
    }

    /// The biconditional between `left` and `right`.
    pub fn iff(left: impl Into<Arc<Proposition>>, right: impl Into<Arc<Proposition>>) -> Self {
        Proposition::Biconditional(left.into(), right.into())
    }

    /// Appends an operand to a conjunction or disjunction.
    ///
    /// Any other proposition is left unchanged, and an error is returned.
    pub fn add(&mut self, operand: impl Into<Arc<Proposition>>) -> Result<(), err::ErrorKind> {
        match self {
            Proposition::And(junction) | Proposition::Or(junction) => {
                junction.push(operand);
                Ok(())
            }
            _ => Err(err::ErrorKind::from(err::ValidationError::NotAJunction)),
        }
    }

    /// The name of the connective of the proposition, or 'Symbol'.
    pub fn connective(&self) -> &'static str {
        match self {
            Proposition::Symbol(_) => "Symbol",
            Proposition::Not(_) => "Not",
            Proposition::And(_) => "And",
            Proposition::Or(_) => "Or",
            Proposition::Implication(..) => "Implication",
            Proposition::Biconditional(..) => "Biconditional",
        }
    }

    /// The names of all symbols which occur in the proposition.
    pub fn symbols(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::default();
        self.collect_names(&mut names);
        names
    }

    /// All (distinct) symbols which occur in the proposition.
    pub fn objects(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::default();
        self.collect_objects(&mut symbols);
        symbols
    }

    fn collect_names<'p>(&'p self, names: &mut BTreeSet<&'p str>) {
        match self {
            Proposition::Symbol(symbol) => {
                names.insert(symbol.name());
            }
            Proposition::Not(operand) => operand.collect_names(names),
            Proposition::And(junction) | Proposition::Or(junction) => {
                for operand in junction.operands() {
                    operand.collect_names(names)
                }
            }
            Proposition::Implication(left, right) | Proposition::Biconditional(left, right) => {
                left.collect_names(names);
                right.collect_names(names);
            }
        }
    }

    pub(crate) fn collect_objects(&self, symbols: &mut BTreeSet<Symbol>) {
        match self {
            Proposition::Symbol(symbol) => {
                symbols.insert(symbol.clone());
            }
            Proposition::Not(operand) => operand.collect_objects(symbols),
            Proposition::And(junction) | Proposition::Or(junction) => {
                for operand in junction.operands() {
                    operand.collect_objects(symbols)
                }
            }
            Proposition::Implication(left, right) | Proposition::Biconditional(left, right) => {
                left.collect_objects(symbols);
                right.collect_objects(symbols);
            }
        }
    }
}

impl From<Symbol> for Proposition {
    fn from(symbol: Symbol) -> Self {
        Proposition::Symbol(symbol)
    }
}

impl From<Symbol> for Arc<Proposition> {
    fn from(symbol: Symbol) -> Self {
        Arc::new(Proposition::Symbol(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Proposition {
        Proposition::symbol(name).unwrap()
    }

    #[test]
    fn junction_arity() {
        assert_eq!(
            Proposition::and([sym("A")]),
            Err(err::ErrorKind::Validation(
                err::ValidationError::TooFewOperands {
                    connective: "And",
                    found: 1
                }
            ))
        );
        assert!(Proposition::or(Vec::<Proposition>::new()).is_err());
        assert!(Proposition::or([sym("A"), sym("B")]).is_ok());
    }

    #[test]
    fn objects_deduplicate() {
        let a = sym("A");
        let formula =
            Proposition::and([a.clone(), Proposition::or([sym("B"), Proposition::not(a)]).unwrap()])
                .unwrap();

        let objects = formula.objects();
        assert_eq!(objects.len(), 2);
        assert!(objects.contains("A"));
        assert!(objects.contains("B"));

        assert_eq!(formula.symbols().into_iter().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn shared_subtree() {
        let shared = Arc::new(Proposition::iff(sym("p"), sym("q")));
        let formula = Proposition::or([shared.clone(), Arc::new(Proposition::not(shared))]).unwrap();
        assert_eq!(formula.objects().len(), 2);
    }

    #[test]
    fn symbols_as_operands() {
        let p = Symbol::new("p").unwrap();
        let q = Symbol::new("q").unwrap();

        let rule = Proposition::implies(p.clone(), q.clone());
        let both = Proposition::and([p, q]).unwrap();

        assert_eq!(rule.formula(), "(p => q)");
        assert_eq!(both.formula(), "(p ∧ q)");
    }

    #[test]
    fn connective_names() {
        let p = sym("p");
        let names = [
            p.clone(),
            Proposition::not(p.clone()),
            Proposition::and([p.clone(), p.clone()]).unwrap(),
            Proposition::or([p.clone(), p.clone()]).unwrap(),
            Proposition::implies(p.clone(), p.clone()),
            Proposition::iff(p.clone(), p),
        ]
        .iter()
        .map(Proposition::connective)
        .collect::<Vec<_>>();

        assert_eq!(
            names,
            vec!["Symbol", "Not", "And", "Or", "Implication", "Biconditional"]
        );
    }

    #[test]
    fn add_to_junction() {
        let mut conjunction = Proposition::and([sym("A"), sym("B")]).unwrap();
        assert!(conjunction.add(sym("C")).is_ok());
        match &conjunction {
            Proposition::And(junction) => assert_eq!(junction.operands().len(), 3),
            _ => panic!("Conjunction expected"),
        }

        let mut implication = Proposition::implies(sym("A"), sym("B"));
        assert_eq!(
            implication.add(sym("C")),
            Err(err::ErrorKind::Validation(err::ValidationError::NotAJunction))
        );
    }
}
