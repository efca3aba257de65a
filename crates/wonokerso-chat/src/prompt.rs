//! Prompt assembly: knowledge preamble, question, and answer instructions.
//!
//! The builder produces raw text. URL encoding happens once, in the HTTP
//! layer, when the prompt is placed into the query string.

use std::fmt::Write;

use crate::knowledge::KnowledgeBase;

/// Heading used by the village widget.
pub const DEFAULT_HEADING: &str = "Informasi Desa Wonokerso:";

const BULLETED_INSTRUCTION: &str = "Jawablah menggunakan informasi di atas jika relevan, \
     jika tidak jawab secara umum dalam bahasa Indonesia.";

const KEY_VALUE_LEAD: &str = "Jawab:";

const KEY_VALUE_INSTRUCTION: &str = "Buat jawaban atau tanggapi pertanyaan pengguna,\
     gunakan informasi hanya jika dibutuhkan, jika tidak, jawab dengan jawaban yang tepat \
     dan akurat sesuai pertanyaan pengguna.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStyle {
    /// Heading, then one `- fact` line per value.
    Bulleted { heading: String },
    /// `Jawab:` lead-in, then one `key: fact` line per entry.
    KeyValue,
}

impl Default for PromptStyle {
    fn default() -> Self {
        PromptStyle::Bulleted {
            heading: DEFAULT_HEADING.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    style: PromptStyle,
}

impl PromptBuilder {
    pub fn new(style: PromptStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &PromptStyle {
        &self.style
    }

    /// Build the grounded prompt for `question`. Every fact is copied verbatim.
    pub fn build(&self, knowledge: &KnowledgeBase, question: &str) -> String {
        let mut prompt = String::new();
        // Writing into a String cannot fail.
        match &self.style {
            PromptStyle::Bulleted { heading } => {
                let _ = writeln!(prompt, "{heading}");
                for fact in knowledge.values() {
                    let _ = writeln!(prompt, "- {fact}");
                }
                let _ = writeln!(prompt, "\nPertanyaan: \"{question}\"");
                prompt.push_str(BULLETED_INSTRUCTION);
            }
            PromptStyle::KeyValue => {
                prompt.push_str(KEY_VALUE_LEAD);
                for (key, fact) in knowledge.iter() {
                    let _ = writeln!(prompt, "{key}: {fact}");
                }
                let _ = writeln!(prompt, "\n\"Informasi(jika perlu):{question}\"");
                let _ = writeln!(prompt, "{KEY_VALUE_INSTRUCTION}");
            }
        }
        prompt
    }
}
