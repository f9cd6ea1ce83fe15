//! Error types used in the library.
//!
//! - Validation errors are raised when a proposition is built, or when a proposition is added to a knowledge base, and never later.
//! - Evaluation errors are raised when a valuation is missing some symbol of a proposition.
//!   Within an engine these are not expected, as the universe of an entailment check covers every symbol of the knowledge base and query.
//! - Engine errors concern the enumeration of models.
//! - Parse errors are from the [builder](crate::builder), and so are external to the core.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::symbol::Symbol;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Validation(ValidationError),
    Evaluation(EvaluationError),
    Engine(EngineError),
    Parse(ParseError),
}

/// Noted errors when building a proposition, or when extending a knowledge base.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// A conjunction or disjunction was given fewer than two operands.
    TooFewOperands {
        connective: &'static str,
        found: usize,
    },

    /// A symbol was given an empty name.
    EmptySymbol,

    /// An operand was appended to a proposition which is neither a conjunction nor a disjunction.
    NotAJunction,

    /// A knowledge base was built from a proposition which is not a conjunction.
    NotAConjunction,
}

impl From<ValidationError> for ErrorKind {
    fn from(e: ValidationError) -> Self {
        ErrorKind::Validation(e)
    }
}

/// Noted errors when evaluating a proposition on some valuation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// The valuation has no value for the symbol.
    MissingSymbol(Symbol),
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

/// Noted errors during an entailment check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// The universe of symbols is larger than the configured limit.
    UniverseTooLarge { size: usize, limit: usize },

    /// Some symbol was missing from an enumerated model.
    ///
    /// This is a defect, as the universe is built from the symbols of both the knowledge base and query.
    UniverseMismatch(Symbol),
}

impl From<EngineError> for ErrorKind {
    fn from(e: EngineError) -> Self {
        ErrorKind::Engine(e)
    }
}

/// Errors when reading a proposition from text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// A token was found where some other token was required.
    UnexpectedToken { position: usize, found: String },

    /// The input ended where some further token was required.
    UnexpectedEnd,

    /// A parenthesis without a partner, at the given position.
    UnbalancedParenthesis(usize),

    /// Some problem at a specific line of a knowledge file.
    Line(usize, Box<ErrorKind>),

    /// The reader failed.
    Read(usize),

    /// Connectives nested too deeply, with the position of the connective past the limit.
    TooDeep(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{e}"),
            Self::Evaluation(e) => write!(f, "{e}"),
            Self::Engine(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewOperands { connective, found } => {
                write!(f, "{connective} requires at least two operands, found {found}")
            }
            Self::EmptySymbol => write!(f, "A symbol requires a non-empty name"),
            Self::NotAJunction => write!(f, "Only a conjunction or disjunction may be extended"),
            Self::NotAConjunction => write!(f, "A knowledge base must be a conjunction"),
        }
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSymbol(symbol) => write!(f, "No value for {symbol} in the valuation"),
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UniverseTooLarge { size, limit } => {
                write!(f, "A universe of {size} symbols exceeds the limit of {limit}")
            }
            Self::UniverseMismatch(symbol) => {
                write!(f, "Internal error: {symbol} is missing from an enumerated model")
            }
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty input"),
            Self::UnexpectedToken { position, found } => {
                write!(f, "Unexpected '{found}' at position {position}")
            }
            Self::UnexpectedEnd => write!(f, "Unexpected end of input"),
            Self::UnbalancedParenthesis(position) => {
                write!(f, "Unbalanced parenthesis at position {position}")
            }
            Self::Line(line, e) => write!(f, "Line {line}: {e}"),
            Self::Read(line) => write!(f, "Failed to read line {line}"),
            Self::TooDeep(position) => write!(f, "Nesting too deep at position {position}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
