use clap::{Arg, Command};
use hindi_tutor::{DEFAULT_QUESTION, PromptBuilder, Speech, TranslationResult};
use hindi_tutor_llm::{MockGenerator, MockMode, Tutor, TutorConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("hindi-tutor-cli")
        .version("0.1.0")
        .about("Translate an English sentence into Hindi with a grammar breakdown")
        .arg(
            Arg::new("question")
                .help("English sentence to translate")
                .default_value(DEFAULT_QUESTION)
                .index(1),
        )
        .arg(
            Arg::new("speech")
                .long("speech")
                .short('s')
                .help("Speech register: formal or casual")
                .default_value("formal"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the mock generator instead of Groq")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show the prompt and a readable summary")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let question = matches
        .get_one::<String>("question")
        .map(String::as_str)
        .unwrap_or(DEFAULT_QUESTION);
    let speech: Speech = matches
        .get_one::<String>("speech")
        .map(String::as_str)
        .unwrap_or("formal")
        .parse()?;
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    let tutor = if use_mock {
        Tutor::new(MockGenerator::new(MockMode::Example))
    } else {
        let config = match TutorConfig::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ {}", e);
                eprintln!("   Set it with: export GROQ_API_KEY=your_api_key");
                eprintln!("   Or use --mock to use the mock generator");
                return Err(e.into());
            }
        };
        Tutor::from_config(&config)?
    };

    if verbose {
        println!("📝 Question: \"{}\"", question);
        println!("🗣️  Speech: {}", speech);
        println!("🤖 Provider: {}", tutor.provider_name());
        println!();
        for message in PromptBuilder::new().build(question, speech) {
            println!("[{:?}]", message.role);
            println!("{}", message.content);
            println!();
        }
    }

    let value = match tutor.translate_value(question, speech).await {
        Ok(value) => value,
        Err(e) => {
            eprintln!("❌ Translation failed: {}", e);
            return Err(e.into());
        }
    };

    if verbose {
        match TranslationResult::from_value(value.clone()) {
            Ok(result) => {
                println!("🇮🇳 {}", result.hindi_text());
                println!("🔤 {}", result.readings().join(" "));
                for sentence in &result.grammar_breakdown {
                    println!("   {} — {}", sentence.hindi_text(), sentence.english);
                    for chunk in &sentence.chunks {
                        let words: Vec<&str> =
                            chunk.hindi.iter().map(|t| t.word.as_str()).collect();
                        println!("     {} : {} ({})", words.join(" "), chunk.meaning, chunk.grammar);
                    }
                }
            }
            Err(e) => eprintln!("⚠️  Reply does not match the expected shape: {}", e),
        }
        println!();
    }

    // Printed as the model wrote it, like the HTTP endpoint
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}
