use serde::{Deserialize, Serialize};

/// Form data for one generation request. Discarded once the response is sent.
///
/// Every field defaults to empty so a partially filled form still deserializes;
/// the required ones are enforced by `generation::validation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Free text, conventionally comma-separated.
    pub skills: String,
    pub experience: String,
    pub education: String,
    #[serde(rename = "useAI")]
    pub use_ai: bool,
}

/// The three generated documents. Replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSet {
    pub resume_text: String,
    pub cover_letter_text: String,
    pub linked_in_bio_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
    LinkedInBio,
}

impl DocumentKind {
    /// Display and request order.
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Resume,
        DocumentKind::CoverLetter,
        DocumentKind::LinkedInBio,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Resume => "Resume",
            DocumentKind::CoverLetter => "Cover Letter",
            DocumentKind::LinkedInBio => "LinkedIn Bio",
        }
    }
}

impl DocumentSet {
    pub fn get(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Resume => &self.resume_text,
            DocumentKind::CoverLetter => &self.cover_letter_text,
            DocumentKind::LinkedInBio => &self.linked_in_bio_text,
        }
    }

    /// Returns a new set with one document replaced.
    pub fn with(self, kind: DocumentKind, text: String) -> Self {
        match kind {
            DocumentKind::Resume => Self {
                resume_text: text,
                ..self
            },
            DocumentKind::CoverLetter => Self {
                cover_letter_text: text,
                ..self
            },
            DocumentKind::LinkedInBio => Self {
                linked_in_bio_text: text,
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_input_uses_form_field_names() {
        let input: ProfileInput = serde_json::from_value(serde_json::json!({
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "skills": "Go, SQL",
            "useAI": true
        }))
        .unwrap();
        assert_eq!(input.full_name, "Jane Doe");
        assert_eq!(input.phone, "");
        assert!(input.use_ai);
    }

    #[test]
    fn test_document_set_with_replaces_only_target() {
        let docs = DocumentSet {
            resume_text: "r".to_string(),
            cover_letter_text: "c".to_string(),
            linked_in_bio_text: "b".to_string(),
        };
        let docs = docs.with(DocumentKind::CoverLetter, "C2".to_string());
        assert_eq!(docs.get(DocumentKind::Resume), "r");
        assert_eq!(docs.get(DocumentKind::CoverLetter), "C2");
        assert_eq!(docs.get(DocumentKind::LinkedInBio), "b");
    }

    #[test]
    fn test_document_kind_serializes_camel_case() {
        assert_eq!(
            serde_json::to_value(DocumentKind::LinkedInBio).unwrap(),
            serde_json::json!("linkedInBio")
        );
    }
}
