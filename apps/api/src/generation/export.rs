//! Export: builds the downloadable payloads entirely in memory.
//!
//! The structured resume always mirrors the raw form fields, never the AI text.

use std::io::Cursor;

use base64ct::{Base64, Encoding};
use bytes::Bytes;
use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType};
use serde::Serialize;
use thiserror::Error;

use crate::models::profile::{DocumentSet, ProfileInput};

pub const RESUME_DOCX_FILE: &str = "resume.docx";
pub const COVER_LETTER_FILE: &str = "cover_letter.txt";
pub const LINKEDIN_BIO_FILE: &str = "linkedin_bio.txt";

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write resume.docx: {0}")]
    Docx(String),
}

/// Final payloads for one generation request.
#[derive(Debug, Clone)]
pub struct ExportArtifacts {
    pub resume_docx: Bytes,
    pub cover_letter: String,
    pub linkedin_bio: String,
}

/// How `Download::content` is encoded in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentEncoding {
    Base64,
    Utf8,
}

/// One downloadable file, delivered inline with the generated documents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub file_name: &'static str,
    pub content_type: &'static str,
    /// Size of the decoded file.
    pub size_bytes: usize,
    pub encoding: ContentEncoding,
    pub content: String,
}

impl ExportArtifacts {
    /// All three files, in display order.
    pub fn downloads(&self) -> Vec<Download> {
        vec![
            Download {
                file_name: RESUME_DOCX_FILE,
                content_type: DOCX_CONTENT_TYPE,
                size_bytes: self.resume_docx.len(),
                encoding: ContentEncoding::Base64,
                content: Base64::encode_string(&self.resume_docx),
            },
            text_download(COVER_LETTER_FILE, &self.cover_letter),
            text_download(LINKEDIN_BIO_FILE, &self.linkedin_bio),
        ]
    }

    /// Raw bytes and content type for one file, by its download name.
    pub fn payload(&self, file_name: &str) -> Option<(&'static str, Bytes)> {
        match file_name {
            RESUME_DOCX_FILE => Some((DOCX_CONTENT_TYPE, self.resume_docx.clone())),
            COVER_LETTER_FILE => Some((
                TEXT_CONTENT_TYPE,
                Bytes::from(self.cover_letter.clone()),
            )),
            LINKEDIN_BIO_FILE => Some((
                TEXT_CONTENT_TYPE,
                Bytes::from(self.linkedin_bio.clone()),
            )),
            _ => None,
        }
    }
}

fn text_download(file_name: &'static str, text: &str) -> Download {
    Download {
        file_name,
        content_type: TEXT_CONTENT_TYPE,
        size_bytes: text.len(),
        encoding: ContentEncoding::Utf8,
        content: text.to_string(),
    }
}

/// Packages the final documents. The cover letter and bio are taken from `docs`
/// as displayed; the DOCX is built from `input`.
pub fn export(docs: &DocumentSet, input: &ProfileInput) -> Result<ExportArtifacts, ExportError> {
    Ok(ExportArtifacts {
        resume_docx: build_resume_docx(input)?,
        cover_letter: docs.cover_letter_text.clone(),
        linkedin_bio: docs.linked_in_bio_text.clone(),
    })
}

/// Title with the name, a contact line, then Skills, Experience and Education sections.
pub fn build_resume_docx(input: &ProfileInput) -> Result<Bytes, ExportError> {
    let docx = Docx::new()
        .add_style(
            Style::new(TITLE_STYLE, StyleType::Paragraph)
                .name("Title")
                .size(56)
                .bold(),
        )
        .add_style(
            Style::new(HEADING_STYLE, StyleType::Paragraph)
                .name("Heading 1")
                .size(32)
                .bold(),
        )
        .add_paragraph(text_paragraph(&input.full_name).style(TITLE_STYLE))
        .add_paragraph(text_paragraph(&format!(
            "Email: {} | Phone: {}",
            input.email, input.phone
        )));

    let sections = [
        ("Skills", &input.skills),
        ("Experience", &input.experience),
        ("Education", &input.education),
    ];
    let docx = sections.iter().fold(docx, |docx, (heading, body)| {
        docx.add_paragraph(text_paragraph(heading).style(HEADING_STYLE))
            .add_paragraph(text_paragraph(body))
    });

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(Bytes::from(buf.into_inner()))
}

/// One paragraph per field; embedded newlines become line breaks.
fn text_paragraph(text: &str) -> Paragraph {
    let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().add_run(run)
}
