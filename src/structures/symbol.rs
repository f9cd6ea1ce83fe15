/*!
Symbols, aka. 'atoms' or 'variables'.

A symbol is a name, and two symbols with the same name are the same symbol.

```rust
# use entailment::structures::symbol::Symbol;
# use std::collections::HashSet;
let rain = Symbol::new("rain").unwrap();
let also_rain = Symbol::new("rain").unwrap();

assert_eq!(rain, also_rain);

let symbols: HashSet<Symbol> = [rain, also_rain].into_iter().collect();
assert_eq!(symbols.len(), 1);
assert!(symbols.contains("rain"));
```

The name of a symbol is stored behind an [Arc], so clones of a symbol share a single name.
Equality, hashing, and order are those of the name, and so a symbol may be borrowed as a [str] to look up a symbol-keyed map.
*/

use std::{borrow::Borrow, sync::Arc};

use crate::types::err::{self};

/// An atomic proposition, identified by name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    name: Arc<str>,
}

impl Symbol {
    /// A symbol with the given name, so long as the name is not empty.
    pub fn new(name: impl AsRef<str>) -> Result<Self, err::ValidationError> {
        let name = name.as_ref();
        match name.is_empty() {
            true => Err(err::ValidationError::EmptySymbol),
            false => Ok(Symbol { name: name.into() }),
        }
    }

    /// The name of the symbol.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn empty_name() {
        assert_eq!(Symbol::new(""), Err(err::ValidationError::EmptySymbol));
    }

    #[test]
    fn ordered_by_name() {
        let a = Symbol::new("a").unwrap();
        let b = Symbol::new("b").unwrap();
        assert!(a < b);

        let mut map = BTreeMap::new();
        map.insert(b.clone(), false);
        map.insert(a.clone(), true);
        assert_eq!(map.keys().next(), Some(&a));
        assert_eq!(map.get("b"), Some(&false));
    }
}
