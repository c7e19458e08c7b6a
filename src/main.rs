use clap::{Arg, Command};
use hindi_tutor::{DEFAULT_QUESTION, PromptBuilder, Speech};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("hindi-tutor")
        .version("0.1.0")
        .about("Print the prompt sent to the model for a question")
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
        .get_matches();

    let question = matches
        .get_one::<String>("question")
        .map(String::as_str)
        .unwrap_or(DEFAULT_QUESTION);
    let speech: Speech = matches
        .get_one::<String>("speech")
        .map(String::as_str)
        .unwrap_or("formal")
        .parse()?;

    let messages = PromptBuilder::new().build(question, speech);
    for (i, message) in messages.iter().enumerate() {
        println!("--- [{}] {:?} ---", i, message.role);
        println!("{}", message.content);
        println!();
    }

    Ok(())
}
