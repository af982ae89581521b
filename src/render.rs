use crate::disposal_guide::{guide_for, INSTITUTION_NAME};
use crate::error::ClassifyError;
use crate::waste_classifier::Report;
use std::fmt::Write;

pub const UPLOAD_HEADING: &str = "The image has been uploaded.";
pub const GUIDE_HEADING: &str = "Learn about where to throw your waste!";

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text(String),
    Numbered {
        number: usize,
        text: String,
        url: Option<String>,
    },
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub blocks: Vec<Block>,
}

/// Ordered sections, one per column of the result view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub sections: Vec<Section>,
}

impl Page {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            sections: vec![Section {
                heading: GUIDE_HEADING.to_string(),
                blocks: vec![Block::Error(message.into())],
            }],
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            let _ = writeln!(out, "== {} ==", section.heading);
            for block in &section.blocks {
                let _ = match block {
                    Block::Text(text) => writeln!(out, "{}", text),
                    Block::Numbered {
                        number,
                        text,
                        url: Some(url),
                    } => writeln!(out, "{}. {}: {}", number, text, url),
                    Block::Numbered { number, text, .. } => writeln!(out, "{}. {}", number, text),
                    Block::Error(message) => writeln!(out, "Error: {}", message),
                };
            }
        }
        out
    }

    pub fn has_error(&self) -> bool {
        self.sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .any(|b| matches!(b, Block::Error(_)))
    }
}

fn error_message(error: &ClassifyError) -> String {
    match error {
        ClassifyError::InvalidImage(e) => {
            format!("The uploaded file could not be read as an image ({}).", e)
        }
        other => format!("The image could not be classified: {}", other),
    }
}

pub fn render(outcome: &Result<Report, ClassifyError>, show_institution: bool) -> Page {
    let report = match outcome {
        Ok(report) => report,
        Err(error) => return Page::error(error_message(error)),
    };

    let (width, height) = report.source_dimensions;
    let mut sections = vec![Section {
        heading: UPLOAD_HEADING.to_string(),
        blocks: vec![Block::Text(format!("{} x {} pixels", width, height))],
    }];

    let classification = &report.classification;
    let confidence = format!("{:.1}%", classification.confidence * 100.0);

    let guide = match classification.category {
        Some(category) => guide_for(category),
        None => {
            sections.push(Section {
                heading: GUIDE_HEADING.to_string(),
                blocks: vec![Block::Text(format!(
                    "This image is classified as {} (confidence {}), but no disposal information is available for this category.",
                    classification.label.trim(),
                    confidence
                ))],
            });
            return Page { sections };
        }
    };

    sections.push(Section {
        heading: GUIDE_HEADING.to_string(),
        blocks: vec![
            Block::Text(format!(
                "This image is classified as {} (confidence {}).",
                guide.display_name, confidence
            )),
            Block::Text(guide.explanation.to_string()),
            Block::Text(guide.instructions.to_string()),
        ],
    });

    if show_institution {
        let mut blocks: Vec<Block> = guide
            .institution
            .notes
            .iter()
            .map(|note| Block::Text(note.to_string()))
            .collect();

        blocks.extend(
            guide
                .institution
                .drop_offs
                .iter()
                .enumerate()
                .map(|(i, drop_off)| Block::Numbered {
                    number: i + 1,
                    text: drop_off.name.to_string(),
                    url: drop_off.map_url.map(str::to_string),
                }),
        );

        sections.push(Section {
            heading: format!("{} Waste Information", INSTITUTION_NAME),
            blocks,
        });
    }

    Page { sections }
}
