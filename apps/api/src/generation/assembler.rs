//! Document Assembler: orchestrates one generation request.
//!
//! Flow: validate → render_templates → enhance_with_ai (optional) → export.
//! A rejected form stops before rendering; an enhancement failure never stops the flow.

use tracing::info;

use crate::errors::AppError;
use crate::generation::enhancer::{enhance_with_ai, EnhancementReport, FallbackPolicy};
use crate::generation::export::{export, ExportArtifacts};
use crate::generation::templates::render_templates;
use crate::generation::validation::validate;
use crate::llm_client::AiCapability;
use crate::models::profile::{DocumentSet, ProfileInput};

/// Result of a successful generation request.
#[derive(Debug, Clone)]
pub struct Generation {
    pub documents: DocumentSet,
    pub report: EnhancementReport,
    pub artifacts: ExportArtifacts,
}

/// Holds the injected AI capability. Shared across requests; carries no per-request state.
#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler {
    ai: AiCapability,
    policy: FallbackPolicy,
}

impl DocumentAssembler {
    pub fn new(ai: AiCapability, policy: FallbackPolicy) -> Self {
        Self { ai, policy }
    }

    pub fn ai(&self) -> &AiCapability {
        &self.ai
    }

    pub async fn generate(&self, input: &ProfileInput) -> Result<Generation, AppError> {
        validate(input)?;

        let templated = render_templates(input);
        let enhanced = enhance_with_ai(templated, input, &self.ai, self.policy).await;
        let artifacts = export(&enhanced.documents, input)?;

        info!(
            ai_requested = enhanced.report.requested,
            ai_applied = enhanced.report.applied.len(),
            ai_failures = enhanced.report.failures.len(),
            "Generated document set"
        );

        Ok(Generation {
            documents: enhanced.documents,
            report: enhanced.report,
            artifacts,
        })
    }
}
