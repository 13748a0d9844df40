//! Baseline documents built by plain interpolation.
//!
//! Values are inserted exactly as typed. `format!` is used instead of
//! placeholder replacement so a field containing `{skills}` or similar is never
//! re-expanded.

use crate::models::profile::{DocumentSet, ProfileInput};

/// Renders the resume, cover letter and LinkedIn bio. Pure and infallible.
pub fn render_templates(input: &ProfileInput) -> DocumentSet {
    DocumentSet {
        resume_text: render_resume(input),
        cover_letter_text: render_cover_letter(input),
        linked_in_bio_text: render_bio(input),
    }
}

/// Header, then skills, experience and education.
fn render_resume(input: &ProfileInput) -> String {
    format!(
        "{name}\n{email} | {phone}\n\n💡 Skills:\n{skills}\n\n💼 Experience:\n{experience}\n\n🎓 Education:\n{education}\n",
        name = input.full_name,
        email = input.email,
        phone = input.phone,
        skills = input.skills,
        experience = input.experience,
        education = input.education,
    )
}

fn render_cover_letter(input: &ProfileInput) -> String {
    format!(
        "Dear Hiring Manager,\n\n\
         I am excited to apply for a role at your company. With my background in {experience}, \
         and skills in {skills}, I am confident I can contribute effectively.\n\n\
         Looking forward to your response.\n\n\
         Regards,\n{name}\n",
        experience = input.experience,
        skills = input.skills,
        name = input.full_name,
    )
}

fn render_bio(input: &ProfileInput) -> String {
    format!(
        "I am {name}, skilled in {skills}, with experience in {experience}. \
         Passionate about growth and opportunities.",
        name = input.full_name,
        skills = input.skills,
        experience = input.experience,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ProfileInput {
        ProfileInput {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            skills: "Go, SQL".to_string(),
            experience: "3y backend".to_string(),
            education: "BS CS".to_string(),
            use_ai: false,
        }
    }

    #[test]
    fn test_resume_contains_every_field() {
        let docs = render_templates(&jane());
        for value in ["Jane Doe", "jane@x.com", "Go, SQL", "3y backend", "BS CS"] {
            assert!(docs.resume_text.contains(value), "missing {value}");
        }
    }

    #[test]
    fn test_resume_section_order() {
        let resume = render_templates(&jane()).resume_text;
        let header = resume.find("Jane Doe").unwrap();
        let skills = resume.find("Skills:").unwrap();
        let experience = resume.find("Experience:").unwrap();
        let education = resume.find("Education:").unwrap();
        assert!(header < skills && skills < experience && experience < education);
        assert!(resume.starts_with("Jane Doe\njane@x.com | \n"));
    }

    #[test]
    fn test_cover_letter_embeds_experience_skills_and_closes_with_name() {
        let letter = render_templates(&jane()).cover_letter_text;
        assert!(letter.starts_with("Dear Hiring Manager,"));
        assert!(letter.contains("background in 3y backend"));
        assert!(letter.contains("skills in Go, SQL"));
        assert!(letter.trim_end().ends_with("Regards,\nJane Doe"));
    }

    #[test]
    fn test_bio_is_single_sentence_template() {
        let bio = render_templates(&jane()).linked_in_bio_text;
        assert_eq!(
            bio,
            "I am Jane Doe, skilled in Go, SQL, with experience in 3y backend. \
             Passionate about growth and opportunities."
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(render_templates(&jane()), render_templates(&jane()));
    }

    #[test]
    fn test_values_are_not_escaped_or_truncated() {
        let long_experience = "Led <team> & shipped \"v2\"; {skills} stays literal. ".repeat(200);
        let input = ProfileInput {
            skills: "C++, {experience}, 100%".to_string(),
            experience: long_experience.clone(),
            education: "MSc\nPhD (ongoing)".to_string(),
            ..jane()
        };
        let docs = render_templates(&input);
        assert!(docs.resume_text.contains(&long_experience));
        assert!(docs.resume_text.contains("C++, {experience}, 100%"));
        assert!(docs.resume_text.contains("MSc\nPhD (ongoing)"));
        assert!(docs.cover_letter_text.contains(&long_experience));
    }

    #[test]
    fn test_empty_optional_fields_render() {
        let input = ProfileInput {
            full_name: "Ann".to_string(),
            email: "a@b.c".to_string(),
            ..Default::default()
        };
        let docs = render_templates(&input);
        assert!(docs.resume_text.contains("💡 Skills:\n\n"));
        assert!(docs.linked_in_bio_text.starts_with("I am Ann, skilled in , "));
    }
}
