use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    structures::proposition::Proposition,
    types::err::{self},
};

use super::parse_proposition;

/// Propositions read from a knowledge file.
#[derive(Clone, Debug, Default)]
pub struct KnowledgeFile {
    /// Propositions to be added to a knowledge base, in the order read.
    pub knowledge: Vec<Proposition>,

    /// Queries, in the order read.
    pub queries: Vec<Proposition>,
}

/// Reads a knowledge file.
///
/// Each line of a knowledge file is one of:
/// - Empty, or a comment beginning with '#'.
/// - A query, beginning with '?'.
/// - Otherwise, a proposition to be added to the knowledge base.
///
/// ```rust
/// # use entailment::builder::read_knowledge;
/// let file = "
/// ## The weather
/// rain -> wet
/// rain
/// ? wet
/// ";
///
/// let knowledge_file = read_knowledge(file.as_bytes()).unwrap();
/// assert_eq!(knowledge_file.knowledge.len(), 2);
/// assert_eq!(knowledge_file.queries.len(), 1);
/// ```
pub fn read_knowledge(reader: impl BufRead) -> Result<KnowledgeFile, err::ErrorKind> {
    let mut knowledge_file = KnowledgeFile::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = match line {
            Ok(line) => line,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Read(line_number))),
        };

        let line = line.trim();
        let at_line = |e: err::ErrorKind| err::ErrorKind::from(err::ParseError::Line(line_number, Box::new(e)));

        match line.chars().next() {
            None | Some('#') => {}

            Some('?') => {
                let query = parse_proposition(&line['?'.len_utf8()..]).map_err(at_line)?;
                knowledge_file.queries.push(query);
            }

            Some(_) => {
                let proposition = parse_proposition(line).map_err(at_line)?;
                knowledge_file.knowledge.push(proposition);
            }
        }
    }

    log::info!(target: targets::PARSE, "Read {} propositions and {} queries", knowledge_file.knowledge.len(), knowledge_file.queries.len());
    Ok(knowledge_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_errors() {
        let file = "a & b\n\n? a &\n";
        assert_eq!(
            read_knowledge(file.as_bytes()).err(),
            Some(err::ErrorKind::Parse(err::ParseError::Line(
                3,
                Box::new(err::ErrorKind::Parse(err::ParseError::UnexpectedEnd))
            )))
        );
    }

    #[test]
    fn comments_skipped() {
        let file = "# only a comment\n   \n";
        let knowledge_file = read_knowledge(file.as_bytes()).unwrap();
        assert!(knowledge_file.knowledge.is_empty());
        assert!(knowledge_file.queries.is_empty());
    }

    #[test]
    fn comment_before_knowledge() {
        let file = "\n# The weather\nrain -> wet\nrain\n? wet\n";
        let knowledge_file = read_knowledge(file.as_bytes()).unwrap();
        assert_eq!(knowledge_file.knowledge.len(), 2);
        assert_eq!(knowledge_file.queries.len(), 1);
        assert_eq!(knowledge_file.queries[0].formula(), "wet");
    }
}
