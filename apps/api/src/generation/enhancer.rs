//! AI Enhancement: optionally replaces each template document with a remote rewrite.
//!
//! Failures never abort the request: each one is reported and the template text
//! is kept for every document that was not rewritten. `FallbackPolicy` decides
//! whether the three calls run concurrently or stop at the first failure.

use serde::Serialize;
use tracing::{info, warn};

use crate::generation::prompts::{system_prompt, user_prompt};
use crate::llm_client::{AiCapability, LlmError, TextGenerator};
use crate::models::profile::{DocumentKind, DocumentSet, ProfileInput};

/// How the three rewrites are issued and what happens after a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// All three calls run concurrently; only failed documents keep template text.
    #[default]
    PerDocument,
    /// Calls run one after another in document order. The first failure stops the
    /// remaining calls; rewrites that already succeeded are kept.
    StopOnFirstFailure,
}

/// A rewrite that did not happen, with a message fit for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementFailure {
    pub document: DocumentKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementReport {
    /// The form asked for AI.
    pub requested: bool,
    /// A remote client is configured.
    pub available: bool,
    pub policy: FallbackPolicy,
    /// Documents whose final text came from the remote service, in document order.
    pub applied: Vec<DocumentKind>,
    pub failures: Vec<EnhancementFailure>,
    /// Documents never sent because an earlier call failed.
    pub skipped: Vec<DocumentKind>,
}

#[derive(Debug, Clone)]
pub struct Enhanced {
    pub documents: DocumentSet,
    pub report: EnhancementReport,
}

/// Runs the enhancement step. When AI was not requested or no client is
/// configured, `docs` is returned unchanged and no call is made.
pub async fn enhance_with_ai(
    docs: DocumentSet,
    input: &ProfileInput,
    capability: &AiCapability,
    policy: FallbackPolicy,
) -> Enhanced {
    let mut report = EnhancementReport {
        requested: input.use_ai,
        available: capability.is_enabled(),
        policy,
        applied: Vec::new(),
        failures: Vec::new(),
        skipped: Vec::new(),
    };

    let generator = match capability.generator() {
        Some(generator) if input.use_ai => generator.as_ref(),
        _ => {
            return Enhanced {
                documents: docs,
                report,
            }
        }
    };

    info!(model = generator.model(), ?policy, "Polishing documents with AI");

    let outcomes = match policy {
        FallbackPolicy::PerDocument => {
            let (resume, cover_letter, bio) = tokio::join!(
                rewrite(generator, DocumentKind::Resume, &docs, input),
                rewrite(generator, DocumentKind::CoverLetter, &docs, input),
                rewrite(generator, DocumentKind::LinkedInBio, &docs, input),
            );
            vec![resume, cover_letter, bio]
        }
        FallbackPolicy::StopOnFirstFailure => {
            let mut outcomes = Vec::new();
            for kind in DocumentKind::ALL {
                let outcome = rewrite(generator, kind, &docs, input).await;
                let failed = outcome.1.is_err();
                outcomes.push(outcome);
                if failed {
                    break;
                }
            }
            outcomes
        }
    };

    report.skipped = DocumentKind::ALL[outcomes.len()..].to_vec();
    if !report.skipped.is_empty() {
        info!("Skipped {} rewrite(s) after first failure", report.skipped.len());
    }

    let mut documents = docs;
    for (kind, outcome) in outcomes {
        match outcome {
            Ok(text) => {
                documents = documents.with(kind, text);
                report.applied.push(kind);
            }
            Err(err) => {
                warn!(document = kind.label(), "AI rewrite failed: {err}");
                report.failures.push(EnhancementFailure {
                    document: kind,
                    message: format!("AI error: {err}"),
                });
            }
        }
    }

    Enhanced { documents, report }
}

async fn rewrite(
    generator: &dyn TextGenerator,
    kind: DocumentKind,
    docs: &DocumentSet,
    input: &ProfileInput,
) -> (DocumentKind, Result<String, LlmError>) {
    let prompt = user_prompt(kind, docs, input);
    (kind, generator.generate(system_prompt(kind), &prompt).await)
}
