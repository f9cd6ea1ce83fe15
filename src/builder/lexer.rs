use crate::types::err::{self};

/// Tokens of the infix notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum Token {
    Symbol(String),
    Not,
    And,
    Or,
    Implies,
    Iff,
    Open,
    Close,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symbol(name) => write!(f, "{name}"),
            Self::Not => write!(f, "¬"),
            Self::And => write!(f, "∧"),
            Self::Or => write!(f, "∨"),
            Self::Implies => write!(f, "=>"),
            Self::Iff => write!(f, "<=>"),
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
        }
    }
}

/// The tokens of `input`, each paired with the (character) position the token begins at.
pub(super) fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, err::ParseError> {
    let chars = input.chars().collect::<Vec<_>>();
    let mut tokens = Vec::default();
    let mut position = 0;

    // Whether the characters from `position` are exactly `pattern`.
    let at = |position: usize, pattern: &str| {
        pattern
            .chars()
            .enumerate()
            .all(|(offset, c)| chars.get(position + offset) == Some(&c))
    };

    while position < chars.len() {
        let c = chars[position];

        if c.is_whitespace() {
            position += 1;
            continue;
        }

        if c.is_alphabetic() || c == '_' {
            let start = position;
            while position < chars.len() && (chars[position].is_alphanumeric() || chars[position] == '_') {
                position += 1;
            }
            tokens.push((start, Token::Symbol(chars[start..position].iter().collect())));
            continue;
        }

        let (token, width) = match c {
            '~' | '!' | '¬' => (Token::Not, 1),
            '&' | '∧' => (Token::And, 1),
            '|' | '∨' => (Token::Or, 1),
            '→' => (Token::Implies, 1),
            '↔' => (Token::Iff, 1),
            '(' => (Token::Open, 1),
            ')' => (Token::Close, 1),
            '=' if at(position, "=>") => (Token::Implies, 2),
            '-' if at(position, "->") => (Token::Implies, 2),
            '<' if at(position, "<=>") => (Token::Iff, 3),
            '<' if at(position, "<->") => (Token::Iff, 3),
            _ => {
                return Err(err::ParseError::UnexpectedToken {
                    position,
                    found: c.to_string(),
                })
            }
        };

        tokens.push((position, token));
        position += width;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_and_ascii() {
        let ascii = tokenize("~a & b | c -> d <-> e").unwrap();
        let glyphs = tokenize("¬a ∧ b ∨ c → d ↔ e").unwrap();
        let ascii = ascii.into_iter().map(|(_, t)| t).collect::<Vec<_>>();
        let glyphs = glyphs.into_iter().map(|(_, t)| t).collect::<Vec<_>>();
        assert_eq!(ascii, glyphs);
    }

    #[test]
    fn positions() {
        let tokens = tokenize("p_1 <=> q").unwrap();
        assert_eq!(tokens[0], (0, Token::Symbol("p_1".to_string())));
        assert_eq!(tokens[1], (4, Token::Iff));
        assert_eq!(tokens[2], (8, Token::Symbol("q".to_string())));
    }

    #[test]
    fn unknown_character() {
        assert_eq!(
            tokenize("p = q"),
            Err(err::ParseError::UnexpectedToken {
                position: 2,
                found: "=".to_string()
            })
        );
    }
}
