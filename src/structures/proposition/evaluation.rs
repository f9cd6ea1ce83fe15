//! Evaluation of a proposition on a valuation.
//!
//! Evaluation is a pure function of a proposition and valuation.
//! When short-circuiting, operands are evaluated in order until the value of the connective is known, and so a symbol absent from the valuation is only noted if the symbol is reached.

use crate::{
    structures::{proposition::Proposition, valuation::Valuation},
    types::err::{self},
};

impl Proposition {
    /// The value of the proposition on `valuation`, short-circuiting where possible.
    ///
    /// ```rust
    /// # use entailment::structures::proposition::Proposition;
    /// # use entailment::structures::symbol::Symbol;
    /// # use std::collections::HashMap;
    /// let p = Symbol::new("p").unwrap();
    /// let q = Symbol::new("q").unwrap();
    /// let rule = Proposition::implies(p.clone(), q.clone());
    ///
    /// let valuation = HashMap::from([(p, true), (q, false)]);
    /// assert_eq!(rule.evaluate(&valuation), Ok(false));
    /// ```
    pub fn evaluate<V: Valuation + ?Sized>(&self, valuation: &V) -> Result<bool, err::EvaluationError> {
        self.evaluate_with(valuation, true)
    }

    /// The value of the proposition on `valuation`.
    ///
    /// If `short_circuit` is false every operand of every connective is evaluated.
    pub fn evaluate_with<V: Valuation + ?Sized>(
        &self,
        valuation: &V,
        short_circuit: bool,
    ) -> Result<bool, err::EvaluationError> {
        match self {
            Proposition::Symbol(symbol) => match valuation.value_of(symbol) {
                Some(value) => Ok(value),
                None => Err(err::EvaluationError::MissingSymbol(symbol.clone())),
            },

            Proposition::Not(operand) => Ok(!operand.evaluate_with(valuation, short_circuit)?),

            Proposition::And(junction) => {
                let mut value = true;
                for operand in junction.operands() {
                    if !operand.evaluate_with(valuation, short_circuit)? {
                        value = false;
                        if short_circuit {
                            break;
                        }
                    }
                }
                Ok(value)
            }

            Proposition::Or(junction) => {
                let mut value = false;
                for operand in junction.operands() {
                    if operand.evaluate_with(valuation, short_circuit)? {
                        value = true;
                        if short_circuit {
                            break;
                        }
                    }
                }
                Ok(value)
            }

            Proposition::Implication(antecedent, consequent) => {
                let antecedent_value = antecedent.evaluate_with(valuation, short_circuit)?;
                if short_circuit && !antecedent_value {
                    return Ok(true);
                }
                let consequent_value = consequent.evaluate_with(valuation, short_circuit)?;
                Ok(!antecedent_value || consequent_value)
            }

            Proposition::Biconditional(left, right) => {
                let left_value = left.evaluate_with(valuation, short_circuit)?;
                let right_value = right.evaluate_with(valuation, short_circuit)?;
                Ok(left_value == right_value)
            }
        }
    }
}
