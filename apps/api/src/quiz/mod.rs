// Quiz: ten-slot answer sheet with a one-way completed flag, plus
// LLM-generated personality questions.
// All LLM calls go through llm_client; no direct Anthropic calls here.

pub mod handlers;
pub mod machine;
pub mod prompts;
pub mod store;
