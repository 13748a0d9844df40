use crate::generation::assembler::DocumentAssembler;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone, Default)]
pub struct AppState {
    /// Carries the AI capability built from config; `Disabled` when no key is set.
    pub assembler: DocumentAssembler,
}
