// Instruction prompts for the three enhancement calls.
// Each document gets its own persona and only the form fields it needs.

use crate::models::profile::{DocumentKind, DocumentSet, ProfileInput};

pub const RESUME_SYSTEM: &str = "You are an expert resume writer.";

pub const COVER_LETTER_SYSTEM: &str = "You are an expert career coach.";

pub const LINKEDIN_BIO_SYSTEM: &str = "You are a LinkedIn branding expert.";

/// System prompt for the given document.
pub fn system_prompt(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Resume => RESUME_SYSTEM,
        DocumentKind::CoverLetter => COVER_LETTER_SYSTEM,
        DocumentKind::LinkedInBio => LINKEDIN_BIO_SYSTEM,
    }
}

/// User prompt for the given document.
///
/// The resume is rewritten from its rendered template; the other two are
/// written from the raw fields.
pub fn user_prompt(kind: DocumentKind, docs: &DocumentSet, input: &ProfileInput) -> String {
    match kind {
        DocumentKind::Resume => format!(
            "Rewrite this into a professional resume:\n{}",
            docs.get(kind)
        ),
        DocumentKind::CoverLetter => format!(
            "Write a strong cover letter based on:\nName: {}\nExperience: {}\nSkills: {}",
            input.full_name, input.experience, input.skills
        ),
        DocumentKind::LinkedInBio => format!(
            "Create a LinkedIn About section for {} with skills {} and experience {}",
            input.full_name, input.skills, input.experience
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::templates::render_templates;

    #[test]
    fn test_each_document_has_its_own_persona() {
        assert!(system_prompt(DocumentKind::Resume).contains("resume writer"));
        assert!(system_prompt(DocumentKind::CoverLetter).contains("career coach"));
        assert!(system_prompt(DocumentKind::LinkedInBio).contains("LinkedIn branding"));
    }

    #[test]
    fn test_prompts_carry_relevant_fields() {
        let input = ProfileInput {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            skills: "Go, SQL".to_string(),
            experience: "3y backend".to_string(),
            education: "BS CS".to_string(),
            ..Default::default()
        };
        let docs = render_templates(&input);

        let resume = user_prompt(DocumentKind::Resume, &docs, &input);
        assert!(resume.ends_with(&docs.resume_text));

        let letter = user_prompt(DocumentKind::CoverLetter, &docs, &input);
        assert!(letter.contains("Name: Jane Doe"));
        assert!(letter.contains("Experience: 3y backend"));
        assert!(letter.contains("Skills: Go, SQL"));
        assert!(!letter.contains("BS CS"));

        let bio = user_prompt(DocumentKind::LinkedInBio, &docs, &input);
        assert_eq!(
            bio,
            "Create a LinkedIn About section for Jane Doe with skills Go, SQL and experience 3y backend"
        );
    }
}
