use std::sync::{Arc, RwLock};

use entailment::{
    config::Config,
    engine::{InferenceEngine, KnowledgeBase},
    reports::Report,
    structures::{proposition::Proposition, symbol::Symbol, valuation::Valuation},
    types::err::{self},
};

fn sym(name: &str) -> Proposition {
    Proposition::symbol(name).unwrap()
}

mod empty_knowledge {

    use super::*;

    fn empty_engine() -> InferenceEngine {
        InferenceEngine::from_knowledge_base(KnowledgeBase::default(), Config::default()).unwrap()
    }

    #[test]
    fn tautologies_only() {
        let engine = empty_engine();

        let excluded_middle = Proposition::or([sym("p"), Proposition::not(sym("p"))]).unwrap();
        assert_eq!(engine.consult(&excluded_middle), Ok(Report::Entailed));

        assert_eq!(engine.consult(&sym("p")), Ok(Report::NotEntailed));
        assert_eq!(engine.is_satisfiable(), Ok(true));
    }

    #[test]
    fn single_empty_model() {
        let engine = empty_engine();
        let models = engine.models().unwrap();
        assert_eq!(models.len(), 1);
        assert!(models[0].is_empty());
        assert_eq!(engine.knowledge_base().formula(), "⊤");
    }
}

mod reasoning {

    use super::*;

    #[test]
    fn chained_implications() {
        let knowledge = Proposition::and([
            Proposition::implies(sym("a"), sym("b")),
            Proposition::implies(sym("b"), sym("c")),
            Proposition::implies(sym("c"), sym("d")),
            sym("a"),
        ])
        .unwrap();
        let engine = InferenceEngine::new(knowledge).unwrap();

        assert_eq!(engine.entails(&sym("d")), Ok(true));
        assert_eq!(
            engine.entails(&Proposition::implies(sym("a"), sym("d"))),
            Ok(true)
        );
        assert_eq!(
            engine.entails(&Proposition::implies(sym("d"), sym("e"))),
            Ok(false)
        );
    }

    #[test]
    fn disjunctive_syllogism() {
        let knowledge =
            Proposition::and([Proposition::or([sym("p"), sym("q")]).unwrap(), Proposition::not(sym("p"))])
                .unwrap();
        let engine = InferenceEngine::new(knowledge).unwrap();

        assert_eq!(engine.entails(&sym("q")), Ok(true));
        assert_eq!(engine.entails(&sym("p")), Ok(false));
    }

    #[test]
    fn biconditional_knowledge() {
        let knowledge = Proposition::and([Proposition::iff(sym("light"), sym("switch")), Proposition::not(sym("switch"))])
            .unwrap();
        let engine = InferenceEngine::new(knowledge).unwrap();

        assert_eq!(engine.entails(&Proposition::not(sym("light"))), Ok(true));
        assert_eq!(engine.entails(&sym("light")), Ok(false));
    }

    #[test]
    fn counter_model_falsifies_query() {
        let knowledge = Proposition::and([Proposition::or([sym("p"), sym("q")]).unwrap(), sym("r")]).unwrap();
        let engine = InferenceEngine::new(knowledge).unwrap();

        let query = Proposition::and([sym("p"), sym("q")]).unwrap();
        let counter = engine.counter_model(&query).unwrap().unwrap();

        assert_eq!(engine.knowledge_base().evaluate(&counter), Ok(true));
        assert_eq!(query.evaluate(&counter), Ok(false));
        assert_eq!(counter.value_of(&Symbol::new("r").unwrap()), Some(true));
    }
}

mod limits {

    use super::*;

    #[test]
    fn query_beyond_limit() {
        let mut config = Config::default();
        config.universe_limit.value = 3;

        let knowledge = Proposition::and([sym("a"), sym("b")]).unwrap();
        let engine = InferenceEngine::from_config(knowledge, config).unwrap();

        assert_eq!(engine.entails(&sym("c")), Ok(false));

        let wide_query = Proposition::or([sym("c"), sym("d")]).unwrap();
        assert_eq!(
            engine.entails(&wide_query),
            Err(err::ErrorKind::Engine(err::EngineError::UniverseTooLarge {
                size: 4,
                limit: 3
            }))
        );
    }
}

mod sharing {

    use super::*;

    #[test]
    fn readers_and_writer() {
        let knowledge = Proposition::and([sym("a"), sym("b")]).unwrap();
        let engine = Arc::new(RwLock::new(InferenceEngine::new(knowledge).unwrap()));

        let readers = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || {
                    let engine = engine.read().unwrap();
                    engine.entails(&sym("a")).unwrap()
                })
            })
            .collect::<Vec<_>>();

        engine.write().unwrap().add_knowledge(sym("c")).unwrap();

        for reader in readers {
            assert!(reader.join().unwrap());
        }

        let engine = engine.read().unwrap();
        assert_eq!(engine.entails(&sym("c")), Ok(true));
        assert!(engine.counters.queries() >= 5);
    }
}
