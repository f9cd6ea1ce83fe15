/*!
A (partial) function from symbols to truth values, aka. a 'model' or 'assignment'.

The valuation trait is implemented for symbol-keyed maps, and for the [assignments](crate::procedures::models::Assignment) produced when enumerating models.
The canonical representation of a valuation is an ordered map from symbols to booleans, [CValuation].

```rust
# use entailment::structures::symbol::Symbol;
# use entailment::structures::valuation::{CValuation, Valuation};
let p = Symbol::new("p").unwrap();
let q = Symbol::new("q").unwrap();

let mut valuation = CValuation::new();
valuation.insert(p.clone(), true);

assert_eq!(valuation.value_of(&p), Some(true));
assert_eq!(valuation.value_of(&q), None);
```

A valuation is supplied on each evaluation, and no proposition holds on to a valuation.
*/

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use super::symbol::Symbol;

/// The canonical representation of a valuation.
pub type CValuation = BTreeMap<Symbol, bool>;

/// Something which may provide the value of a symbol.
pub trait Valuation {
    /// The value of a symbol under the valuation, or otherwise nothing.
    fn value_of(&self, symbol: &Symbol) -> Option<bool>;
}

impl Valuation for BTreeMap<Symbol, bool> {
    fn value_of(&self, symbol: &Symbol) -> Option<bool> {
        self.get(symbol).copied()
    }
}

impl<S: BuildHasher> Valuation for HashMap<Symbol, bool, S> {
    fn value_of(&self, symbol: &Symbol) -> Option<bool> {
        self.get(symbol).copied()
    }
}

/// A string representation of a valuation, with false symbols prefixed by '-'.
pub fn valuation_string(valuation: &CValuation) -> String {
    valuation
        .iter()
        .map(|(symbol, value)| match value {
            true => format!("{symbol}"),
            false => format!("-{symbol}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
