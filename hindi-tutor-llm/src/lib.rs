//! Chat-completion providers and the translation pipeline for hindi-tutor
//!
//! # Workflow Example
//!
//! ```ignore
//! use hindi_tutor::Speech;
//! use hindi_tutor_llm::{Tutor, TutorConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Read GROQ_API_KEY and friends
//!     let config = TutorConfig::from_env()?;
//!
//!     // 2. Build a tutor backed by Groq
//!     let tutor = Tutor::from_config(&config)?;
//!
//!     // 3. Ask for a translation with grammar breakdown
//!     let result = tutor.translate("Have you ever been to India?", Speech::Formal).await?;
//!
//!     println!("{}", result.hindi_text());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod groq;
pub mod mock;
pub mod tutor;


// Re-export main types for convenient access
pub use config::TutorConfig;
pub use error::{TutorError, TutorResult};
pub use generator::{GenerationParams, TextGenerator};
pub use groq::GroqProvider;
pub use mock::{MockGenerator, MockMode};
pub use tutor::Tutor;
