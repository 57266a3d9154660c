// Advisor chat: context-grounded free-text career answers.
// All LLM calls go through llm_client; no direct Anthropic calls here.

pub mod handlers;
pub mod prompts;
