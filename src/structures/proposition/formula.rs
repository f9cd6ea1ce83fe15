//! A fully parenthesised rendering of a proposition.
//!
//! | Variant       | Rendering         |
//! |---------------|-------------------|
//! | Symbol        | `p`               |
//! | Not           | `¬(p)`            |
//! | And           | `(p ∧ q ∧ …)`     |
//! | Or            | `(p ∨ q ∨ …)`     |
//! | Implication   | `(p => q)`        |
//! | Biconditional | `(p <=> q)`       |

use crate::structures::proposition::Proposition;

impl Proposition {
    /// The proposition as a string.
    pub fn formula(&self) -> String {
        format!("{self}")
    }
}

impl std::fmt::Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Proposition::Symbol(symbol) => write!(f, "{symbol}"),

            Proposition::Not(operand) => write!(f, "¬({operand})"),

            Proposition::And(junction) | Proposition::Or(junction) => {
                let glyph = match self {
                    Proposition::And(_) => " ∧ ",
                    _ => " ∨ ",
                };
                write!(f, "(")?;
                for (index, operand) in junction.operands().iter().enumerate() {
                    if index > 0 {
                        write!(f, "{glyph}")?;
                    }
                    write!(f, "{operand}")?;
                }
                write!(f, ")")
            }

            Proposition::Implication(antecedent, consequent) => {
                write!(f, "({antecedent} => {consequent})")
            }

            Proposition::Biconditional(left, right) => write!(f, "({left} <=> {right})"),
        }
    }
}
