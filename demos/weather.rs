use entailment::{
    engine::InferenceEngine, structures::proposition::Proposition,
    structures::valuation::valuation_string,
};

/// A small knowledge base is built and extended, with a handful of queries made after each extension.
fn main() {
    let rain = Proposition::symbol("rain").unwrap();
    let wet = Proposition::symbol("wet").unwrap();
    let cold = Proposition::symbol("cold").unwrap();
    let ice = Proposition::symbol("ice").unwrap();

    let knowledge = Proposition::and([
        Proposition::implies(rain.clone(), wet.clone()),
        Proposition::implies(Proposition::and([wet.clone(), cold.clone()]).unwrap(), ice.clone()),
    ])
    .unwrap();

    let mut engine = InferenceEngine::new(knowledge).unwrap();
    let queries = [wet, ice.clone(), Proposition::implies(cold.clone(), ice)];

    let ask = |engine: &InferenceEngine| {
        println!("c Knowledge base: {}", engine.knowledge_base());
        for query in &queries {
            let answer = engine.answer(query).unwrap();
            println!("{query}\t{}", answer.report);
            if let Some(counter) = answer.counter_model {
                println!("\tv {}", valuation_string(&counter));
            }
        }
    };

    ask(&engine);

    engine.add_knowledge(rain).unwrap();
    ask(&engine);

    engine.add_knowledge(cold).unwrap();
    ask(&engine);

    println!(
        "c {} queries, {} assignments examined",
        engine.counters.queries(),
        engine.counters.assignments()
    );
}
