// Resume ingest: PDF parsing, LLM profile extraction, full-document storage.
// All LLM calls go through llm_client; no direct Anthropic calls here.

pub mod extractor;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod store;
