//! LLM integration crate for the Idea Forge CLI.
//!
//! This crate provides a provider-agnostic abstraction for interacting with
//! generative-completion services. Every request may carry a structured-output
//! schema; providers translate it into their native structured-output knob so
//! the reply comes back as a single JSON document.
//!
//! # Providers
//! - **Gemini**: Google's hosted generative API (default)
//! - **Ollama**: Local LLM runtime
//! - **Mock**: Deterministic canned replies for tests and offline runs
//!
//! # Example
//! ```no_run
//! use forge_llm::{LlmClient, LlmRequest, providers::OllamaClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OllamaClient::new();
//! let request = LlmRequest::new("Hello, world!", "llama3.2");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
pub use factory::create_client;
pub use providers::{GeminiClient, MockClient, OllamaClient};
