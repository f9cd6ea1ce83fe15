//! Entailment on random knowledge bases and queries, checked against a truth table over a fixed collection of symbols.

use std::collections::HashMap;

use entailment::{
    engine::InferenceEngine,
    reports::Report,
    structures::{proposition::Proposition, symbol::Symbol},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SYMBOL_COUNT: usize = 5;

fn names() -> Vec<Symbol> {
    (0..SYMBOL_COUNT)
        .map(|index| Symbol::new(format!("s{index}")).unwrap())
        .collect()
}

fn random_proposition(rng: &mut StdRng, symbols: &[Symbol], depth: usize) -> Proposition {
    if depth == 0 || rng.random_bool(0.3) {
        let index = rng.random_range(0..symbols.len());
        return Proposition::from(symbols[index].clone());
    }

    match rng.random_range(0..5) {
        0 => Proposition::not(random_proposition(rng, symbols, depth - 1)),
        1 | 2 => {
            let count = rng.random_range(2..4);
            let operands = (0..count)
                .map(|_| random_proposition(rng, symbols, depth - 1))
                .collect::<Vec<_>>();
            match rng.random_bool(0.5) {
                true => Proposition::and(operands).unwrap(),
                false => Proposition::or(operands).unwrap(),
            }
        }
        3 => Proposition::implies(
            random_proposition(rng, symbols, depth - 1),
            random_proposition(rng, symbols, depth - 1),
        ),
        _ => Proposition::iff(
            random_proposition(rng, symbols, depth - 1),
            random_proposition(rng, symbols, depth - 1),
        ),
    }
}

/// Every valuation of all the symbols, whether or not they occur.
fn truth_table(symbols: &[Symbol]) -> Vec<HashMap<Symbol, bool>> {
    (0..(1_usize << symbols.len()))
        .map(|bits| {
            symbols
                .iter()
                .enumerate()
                .map(|(index, symbol)| (symbol.clone(), (bits >> index) & 1 == 1))
                .collect()
        })
        .collect()
}

#[test]
fn random_entailment() {
    let symbols = names();
    let table = truth_table(&symbols);
    let mut rng = StdRng::seed_from_u64(79);

    for _ in 0..200 {
        let conjuncts = (0..rng.random_range(2..4))
            .map(|_| random_proposition(&mut rng, &symbols, 3))
            .collect::<Vec<_>>();
        let knowledge = Proposition::and(conjuncts).unwrap();
        let query = random_proposition(&mut rng, &symbols, 3);

        let knowledge_models = table
            .iter()
            .filter(|valuation| knowledge.evaluate(*valuation).unwrap())
            .collect::<Vec<_>>();

        let expected = match knowledge_models.is_empty() {
            true => Report::Vacuous,
            false => match knowledge_models
                .iter()
                .all(|valuation| query.evaluate(*valuation).unwrap())
            {
                true => Report::Entailed,
                false => Report::NotEntailed,
            },
        };

        let engine = InferenceEngine::new(knowledge.clone()).unwrap();
        assert_eq!(engine.consult(&query), Ok(expected), "{knowledge} ⊨ {query}");
        assert_eq!(engine.entails(&query), Ok(expected.is_entailed()));

        // Symbols absent from the knowledge base have no influence on satisfiability.
        assert_eq!(engine.is_satisfiable(), Ok(expected != Report::Vacuous));
    }
}

#[test]
fn short_circuit_agrees() {
    let symbols = names();
    let table = truth_table(&symbols);
    let mut rng = StdRng::seed_from_u64(97);

    for _ in 0..200 {
        let proposition = random_proposition(&mut rng, &symbols, 4);
        for valuation in &table {
            assert_eq!(
                proposition.evaluate_with(valuation, true),
                proposition.evaluate_with(valuation, false)
            );
        }
    }
}
