/*!
Enumeration of every valuation of a universe of symbols.

A [Universe] is an ordered collection of distinct symbols.
A universe of *n* symbols has exactly 2<sup>*n*</sup> valuations, each of which is an [Assignment] of a value to every symbol of the universe.

Assignments are produced on demand by [Models], so only the assignment under examination is held in memory.
Each assignment is a counter whose *i*th bit determines the value of the *i*th symbol of the universe, with a clear bit read as true.
So, the first assignment values every symbol true and the last values every symbol false, as with the product of (true, false) taken once for each symbol.

```rust
# use entailment::procedures::models::Universe;
# use entailment::structures::proposition::Proposition;
# use entailment::structures::valuation::Valuation;
let p = Proposition::symbol("p").unwrap();
let q = Proposition::symbol("q").unwrap();
let formula = Proposition::or([p, q]).unwrap();

let universe = Universe::from_propositions([&formula]);
assert_eq!(universe.len(), 2);

let models = universe.models().unwrap();
assert_eq!(models.len(), 4);

let satisfying = universe
    .models()
    .unwrap()
    .filter(|assignment| formula.evaluate(assignment) == Ok(true))
    .count();
assert_eq!(satisfying, 3);
```

The order of the universe is the order of symbol names, though nothing depends on this beyond the order in which models are produced.
*/

use std::collections::BTreeSet;

use crate::{
    config::UNIVERSE_LIMIT_MAX,
    misc::log::targets::{self},
    structures::{
        proposition::Proposition,
        symbol::Symbol,
        valuation::{CValuation, Valuation},
    },
    types::err::{self},
};

/// An ordered collection of distinct symbols.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Universe {
    symbols: Vec<Symbol>,
}

impl Universe {
    /// The universe of all symbols which occur in some proposition.
    pub fn from_propositions<'p>(propositions: impl IntoIterator<Item = &'p Proposition>) -> Self {
        let mut symbols = BTreeSet::default();
        for proposition in propositions {
            proposition.collect_objects(&mut symbols);
        }
        Universe::from(symbols)
    }

    /// The symbols of the universe, in order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// A count of symbols in the universe.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The index of `symbol` in the universe, if the symbol is part of the universe.
    pub fn index_of(&self, symbol: &Symbol) -> Option<usize> {
        self.symbols.binary_search(symbol).ok()
    }

    /// An iterator over every assignment of values to the symbols of the universe.
    ///
    /// Fails if the universe has too many symbols to be enumerated.
    pub fn models(&self) -> Result<Models<'_>, err::EngineError> {
        if self.symbols.len() > UNIVERSE_LIMIT_MAX {
            return Err(err::EngineError::UniverseTooLarge {
                size: self.symbols.len(),
                limit: UNIVERSE_LIMIT_MAX,
            });
        }

        let end = 1_u64 << self.symbols.len();
        log::trace!(target: targets::ENUMERATION, "{end} models over {} symbols", self.symbols.len());

        Ok(Models {
            universe: self,
            next: 0,
            end,
        })
    }
}

impl From<BTreeSet<Symbol>> for Universe {
    fn from(symbols: BTreeSet<Symbol>) -> Self {
        Universe {
            symbols: symbols.into_iter().collect(),
        }
    }
}

/// An iterator over the assignments of a universe.
pub struct Models<'u> {
    universe: &'u Universe,
    next: u64,
    end: u64,
}

impl<'u> Iterator for Models<'u> {
    type Item = Assignment<'u>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next < self.end {
            true => {
                let assignment = Assignment {
                    universe: self.universe,
                    bits: self.next,
                };
                self.next += 1;
                Some(assignment)
            }
            false => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Models<'_> {}

/// A valuation of every symbol in some universe.
#[derive(Clone, Copy)]
pub struct Assignment<'u> {
    universe: &'u Universe,
    bits: u64,
}

impl Assignment<'_> {
    /// The (symbol, value) pairs of the assignment, in universe order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Symbol, bool)> {
        let bits = self.bits;
        self.universe
            .symbols()
            .iter()
            .enumerate()
            .map(move |(index, symbol)| (symbol, (bits >> index) & 1 == 0))
    }

    /// The canonical representation of the assignment.
    pub fn canonical(&self) -> CValuation {
        self.pairs()
            .map(|(symbol, value)| (symbol.clone(), value))
            .collect()
    }
}

impl Valuation for Assignment<'_> {
    fn value_of(&self, symbol: &Symbol) -> Option<bool> {
        let index = self.universe.index_of(symbol)?;
        Some((self.bits >> index) & 1 == 0)
    }
}

impl std::fmt::Debug for Assignment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.pairs()).finish()
    }
}
