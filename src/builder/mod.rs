/*!
Reading propositions from text.

The builder is a convenience for the command line and for tests, and is independent of the core.
Propositions are written in a familiar infix notation:

| Connective    | Written                  |
|---------------|--------------------------|
| Not           | `~p`, `!p`, `¬p`         |
| And           | `p & q`, `p ∧ q`         |
| Or            | `p \| q`, `p ∨ q`        |
| Implication   | `p => q`, `p -> q`, `p → q` |
| Biconditional | `p <=> q`, `p <-> q`, `p ↔ q` |

Negation binds tightest, followed by conjunction, disjunction, implication, and the biconditional.
Implication associates to the right, and a chain of conjunctions (or disjunctions) is read as a single conjunction (or disjunction).
A symbol is a letter or underscore followed by any number of letters, digits, or underscores.

```rust
# use entailment::builder::parse_proposition;
let formula = parse_proposition("rain & (rain -> wet) <=> ~dry").unwrap();
assert_eq!(formula.formula(), "((rain ∧ (rain => wet)) <=> ¬(dry))");
```
*/

mod knowledge_file;
mod lexer;
mod parser;

pub use knowledge_file::{read_knowledge, KnowledgeFile};
pub use parser::{parse_proposition, DEPTH_LIMIT};
