use entailment::{
    builder::{parse_proposition, read_knowledge},
    engine::{InferenceEngine, KnowledgeBase},
    config::Config,
    reports::Report,
};

mod knowledge_files {

    use super::*;

    const WUMPUS: &str = "
# Adjacent to a pit the air is breezy.
b11 <=> (p12 | p21)
b21 <=> (p11 | p22 | p31)
~p11
~b11
b21

? ~p12
? ~p21
? p22 | p31
? p31
";

    #[test]
    fn wumpus() {
        let knowledge_file = read_knowledge(WUMPUS.as_bytes()).unwrap();
        assert_eq!(knowledge_file.knowledge.len(), 5);

        let mut engine =
            InferenceEngine::from_knowledge_base(KnowledgeBase::default(), Config::default()).unwrap();
        for proposition in knowledge_file.knowledge {
            assert!(engine.add_knowledge(proposition).is_ok());
        }

        let reports = knowledge_file
            .queries
            .iter()
            .map(|query| engine.consult(query).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(
            reports,
            vec![
                Report::Entailed,
                Report::Entailed,
                Report::Entailed,
                Report::NotEntailed
            ]
        );
    }

    #[test]
    fn parsed_and_built_agree() {
        let parsed = parse_proposition("(a -> b) & a").unwrap();
        let engine = InferenceEngine::new(parsed).unwrap();
        assert_eq!(engine.knowledge_base().formula(), "((a => b) ∧ a)");
        assert_eq!(engine.entails(&parse_proposition("b").unwrap()), Ok(true));
    }
}
