// Career recommendation: validated inputs, one LLM call, strict parse,
// sanitized scores, upsert-as-replace storage.
// All LLM calls go through llm_client; no direct Anthropic calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
