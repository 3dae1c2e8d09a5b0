//! Parser for generated question text
//!
//! Model output is expected to loosely follow the prompt template:
//!
//! ```text
//! Question #1: What is the capital of France?
//!  a) Paris
//!  b) London
//!  c) Berlin
//!  d) Madrid
//! ```
//!
//! The `a)` line is always taken as the correct answer and `b)`..`d)` as the
//! wrong ones. Blocks that don't have all five parts are dropped.

use std::sync::OnceLock;

use regex::Regex;

use super::models::QuestionRecord;

/// Extracts question blocks from raw generated text
pub struct QuestionParser {
    /// Start of every block
    marker_regex: Regex,
    /// Five-part shape of a single block body
    block_regex: Regex,
}

impl QuestionParser {
    pub fn new() -> Self {
        Self {
            marker_regex: Regex::new(r"Question #\d+:").expect("Invalid regex"),
            block_regex: Regex::new(
                r"(?s)\A(.*?)\n\s*a\)\s*(.*?)\n\s*b\)\s*(.*?)\n\s*c\)\s*(.*?)\n\s*d\)\s*(.*)\z",
            )
            .expect("Invalid regex"),
        }
    }

    /// Parse every well-formed block in `raw_text`, tagging each record with
    /// `category`. Returns an empty list when nothing matches.
    pub fn parse(&self, raw_text: &str, category: &str) -> Vec<QuestionRecord> {
        let markers: Vec<_> = self.marker_regex.find_iter(raw_text).collect();
        let category = Some(category.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let mut records = Vec::new();
        for (i, marker) in markers.iter().enumerate() {
            let end = markers
                .get(i + 1)
                .map(|next| next.start())
                .unwrap_or(raw_text.len());
            let block = &raw_text[marker.end()..end];

            match self.parse_block(block, category.clone()) {
                Some(record) => records.push(record),
                None => log::debug!("Skipping malformed question block #{}", i + 1),
            }
        }

        records
    }

    fn parse_block(&self, block: &str, category: Option<String>) -> Option<QuestionRecord> {
        let caps = self.block_regex.captures(block)?;
        let field = |i: usize| caps.get(i).map(|m| m.as_str().trim().to_string());

        let record = QuestionRecord {
            question: field(1)?,
            correct: field(2)?,
            wrong1: field(3)?,
            wrong2: field(4)?,
            wrong3: field(5)?,
            category,
        };

        record.is_complete().then_some(record)
    }
}

impl Default for QuestionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse generated text with a shared parser instance
pub fn parse_generated_questions(raw_text: &str, category: &str) -> Vec<QuestionRecord> {
    static PARSER: OnceLock<QuestionParser> = OnceLock::new();
    PARSER.get_or_init(QuestionParser::new).parse(raw_text, category)
}
