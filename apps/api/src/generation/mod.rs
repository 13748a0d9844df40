// Document assembly: validate → render templates → optional AI rewrite → export.
// All remote calls go through llm_client, never direct HTTP here.

pub mod assembler;
pub mod enhancer;
pub mod export;
pub mod handlers;
pub mod prompts;
pub mod templates;
pub mod validation;
