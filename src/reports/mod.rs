//! Details on the result of some query.

use crate::structures::valuation::CValuation;

/// The answer to an entailment query.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// Every model of the knowledge base is a model of the query, and the knowledge base has some model.
    Entailed,

    /// Some model of the knowledge base is not a model of the query.
    NotEntailed,

    /// The knowledge base has no model, and so entails every query.
    Vacuous,
}

impl Report {
    /// Whether the report is of entailment, vacuous or otherwise.
    pub fn is_entailed(&self) -> bool {
        match self {
            Self::Entailed | Self::Vacuous => true,
            Self::NotEntailed => false,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "ENTAILED"),
            Self::NotEntailed => write!(f, "NOT ENTAILED"),
            Self::Vacuous => write!(f, "VACUOUS"),
        }
    }
}

/// A report together with the counter-model witnessing a report of [NotEntailed](Report::NotEntailed).
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Answer {
    pub report: Report,

    /// Present exactly when the report is [NotEntailed](Report::NotEntailed).
    pub counter_model: Option<CValuation>,
}
