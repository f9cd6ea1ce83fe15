use std::{fs::File, io::BufReader};

use entailment::{
    builder::read_knowledge,
    engine::{InferenceEngine, KnowledgeBase},
    structures::valuation::valuation_string,
};

mod parse;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let (config, cli_options) = match parse::config::config_from_args(&matches) {
        Ok(configs) => configs,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    println!("c Reading knowledge from {:?}", cli_options.path);

    let file = match File::open(&cli_options.path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open knowledge file");
            std::process::exit(1);
        }
    };

    let knowledge_file = match read_knowledge(BufReader::new(file)) {
        Ok(knowledge_file) => knowledge_file,
        Err(e) => {
            println!("c Parse error: {e}");
            std::process::exit(1);
        }
    };

    let mut engine = match InferenceEngine::from_knowledge_base(KnowledgeBase::default(), config) {
        Ok(engine) => engine,
        Err(e) => {
            println!("c Engine error: {e}");
            std::process::exit(2);
        }
    };

    for proposition in knowledge_file.knowledge {
        if let Err(e) = engine.add_knowledge(proposition) {
            println!("c Knowledge error: {e}");
            std::process::exit(2);
        }
    }

    println!("c Knowledge base: {}", engine.knowledge_base());

    if cli_options.models {
        match engine.models() {
            Ok(models) => {
                for model in models {
                    println!("m {}", valuation_string(&model));
                }
            }
            Err(e) => {
                println!("c Enumeration error: {e}");
                std::process::exit(2);
            }
        }
    }

    for query in &knowledge_file.queries {
        println!("c Query: {query}");

        let answer = match engine.answer(query) {
            Ok(answer) => answer,
            Err(e) => {
                println!("c Query error: {e}");
                std::process::exit(2);
            }
        };

        println!("s {}", answer.report);

        if cli_options.counter_model {
            if let Some(counter) = answer.counter_model {
                println!("v {}", valuation_string(&counter));
            }
        }
    }

    println!(
        "c {} queries, {} assignments examined",
        engine.counters.queries(),
        engine.counters.assignments()
    );
}
