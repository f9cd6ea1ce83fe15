use crate::{
    misc::log::targets::{self},
    structures::proposition::Proposition,
    types::err::{self},
};

use super::lexer::{tokenize, Token};

/// The deepest nesting of connectives read from text.
///
/// Each negation, parenthesis, implication, and biconditional is a level of nesting.
pub const DEPTH_LIMIT: usize = 128;

/// Reads a proposition from `input`.
///
/// Fails if connectives are nested beyond [DEPTH_LIMIT].
pub fn parse_proposition(input: &str) -> Result<Proposition, err::ErrorKind> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(err::ErrorKind::from(err::ParseError::Empty));
    }

    let mut parser = Parser {
        tokens,
        index: 0,
        depth: 0,
    };
    let proposition = parser.biconditional()?;

    match parser.tokens.get(parser.index) {
        None => {
            log::trace!(target: targets::PARSE, "Read {}: {proposition}", proposition.connective());
            Ok(proposition)
        }
        Some((position, Token::Close)) => {
            Err(err::ErrorKind::from(err::ParseError::UnbalancedParenthesis(*position)))
        }
        Some((position, token)) => Err(err::ErrorKind::from(err::ParseError::UnexpectedToken {
            position: *position,
            found: token.to_string(),
        })),
    }
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    index: usize,

    /// The current nesting of connectives.
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|(_, token)| token)
    }

    /// Advances past the next token if it is `token`, returning the position of the token.
    fn take(&mut self, token: &Token) -> Option<usize> {
        match self.peek() == Some(token) {
            true => {
                let position = self.tokens[self.index].0;
                self.index += 1;
                Some(position)
            }
            false => None,
        }
    }

    /// Notes a further level of nesting, beginning at `position`.
    fn descend(&mut self, position: usize) -> Result<(), err::ErrorKind> {
        self.depth += 1;
        match self.depth > DEPTH_LIMIT {
            true => Err(err::ErrorKind::from(err::ParseError::TooDeep(position))),
            false => Ok(()),
        }
    }

    fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }

    fn biconditional(&mut self) -> Result<Proposition, err::ErrorKind> {
        let mut left = self.implication()?;
        let mut levels = 0;
        while let Some(position) = self.take(&Token::Iff) {
            self.descend(position)?;
            levels += 1;
            let right = self.implication()?;
            left = Proposition::iff(left, right);
        }
        self.ascend(levels);
        Ok(left)
    }

    fn implication(&mut self) -> Result<Proposition, err::ErrorKind> {
        let antecedent = self.disjunction()?;
        match self.take(&Token::Implies) {
            Some(position) => {
                self.descend(position)?;
                let consequent = self.implication()?;
                self.ascend(1);
                Ok(Proposition::implies(antecedent, consequent))
            }
            None => Ok(antecedent),
        }
    }

    fn disjunction(&mut self) -> Result<Proposition, err::ErrorKind> {
        let mut operands = vec![self.conjunction()?];
        while self.take(&Token::Or).is_some() {
            operands.push(self.conjunction()?);
        }
        match operands.len() {
            1 => Ok(operands.remove(0)),
            _ => Proposition::or(operands),
        }
    }

    fn conjunction(&mut self) -> Result<Proposition, err::ErrorKind> {
        let mut operands = vec![self.negation()?];
        while self.take(&Token::And).is_some() {
            operands.push(self.negation()?);
        }
        match operands.len() {
            1 => Ok(operands.remove(0)),
            _ => Proposition::and(operands),
        }
    }

    fn negation(&mut self) -> Result<Proposition, err::ErrorKind> {
        match self.take(&Token::Not) {
            Some(position) => {
                self.descend(position)?;
                let operand = self.negation()?;
                self.ascend(1);
                Ok(Proposition::not(operand))
            }
            None => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<Proposition, err::ErrorKind> {
        let Some((position, token)) = self.tokens.get(self.index).cloned() else {
            return Err(err::ErrorKind::from(err::ParseError::UnexpectedEnd));
        };
        self.index += 1;

        match token {
            Token::Symbol(name) => Proposition::symbol(name),

            Token::Open => {
                self.descend(position)?;
                let inner = self.biconditional()?;
                self.ascend(1);
                match self.take(&Token::Close) {
                    Some(_) => Ok(inner),
                    None => Err(err::ErrorKind::from(err::ParseError::UnbalancedParenthesis(position))),
                }
            }

            token => Err(err::ErrorKind::from(err::ParseError::UnexpectedToken {
                position,
                found: token.to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence() {
        let formula = parse_proposition("~a & b | c => d <=> e").unwrap();
        assert_eq!(formula.formula(), "((((¬(a) ∧ b) ∨ c) => d) <=> e)");
    }

    #[test]
    fn implication_right_associative() {
        let formula = parse_proposition("a => b => c").unwrap();
        assert_eq!(formula.formula(), "(a => (b => c))");
    }

    #[test]
    fn flat_junctions() {
        let formula = parse_proposition("a & b & c").unwrap();
        match formula {
            Proposition::And(junction) => assert_eq!(junction.operands().len(), 3),
            _ => panic!("Conjunction expected"),
        }
    }

    #[test]
    fn parentheses() {
        assert_eq!(
            parse_proposition("(a | b) & c").unwrap().formula(),
            "((a ∨ b) ∧ c)"
        );
        assert_eq!(
            parse_proposition("(a | b"),
            Err(err::ErrorKind::Parse(err::ParseError::UnbalancedParenthesis(0)))
        );
        assert_eq!(
            parse_proposition("a | b)"),
            Err(err::ErrorKind::Parse(err::ParseError::UnbalancedParenthesis(5)))
        );
    }

    #[test]
    fn nesting_limit() {
        let negations = "~".repeat(200_000) + "p";
        assert_eq!(
            parse_proposition(&negations),
            Err(err::ErrorKind::Parse(err::ParseError::TooDeep(DEPTH_LIMIT)))
        );

        let parentheses = "(".repeat(200_000) + "p";
        assert!(matches!(
            parse_proposition(&parentheses),
            Err(err::ErrorKind::Parse(err::ParseError::TooDeep(_)))
        ));

        let implications = "p => ".repeat(200_000) + "p";
        assert!(matches!(
            parse_proposition(&implications),
            Err(err::ErrorKind::Parse(err::ParseError::TooDeep(_)))
        ));

        let biconditionals = "p <=> ".repeat(200_000) + "p";
        assert!(matches!(
            parse_proposition(&biconditionals),
            Err(err::ErrorKind::Parse(err::ParseError::TooDeep(_)))
        ));
    }

    #[test]
    fn nesting_within_limit() {
        let depth = DEPTH_LIMIT / 2;
        let nested = "(".repeat(depth) + "p" + &")".repeat(depth);
        assert_eq!(parse_proposition(&nested), Ok(Proposition::symbol("p").unwrap()));

        let negations = "~".repeat(DEPTH_LIMIT) + "p";
        assert!(parse_proposition(&negations).is_ok());
    }

    #[test]
    fn malformed() {
        assert_eq!(
            parse_proposition("   "),
            Err(err::ErrorKind::Parse(err::ParseError::Empty))
        );
        assert_eq!(
            parse_proposition("a &"),
            Err(err::ErrorKind::Parse(err::ParseError::UnexpectedEnd))
        );
        assert_eq!(
            parse_proposition("a b"),
            Err(err::ErrorKind::Parse(err::ParseError::UnexpectedToken {
                position: 2,
                found: "b".to_string()
            }))
        );
    }
}
