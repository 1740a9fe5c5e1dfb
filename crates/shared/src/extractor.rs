use regex::Regex;

use crate::models::QUESTION_SLOTS;

/// Header lines the model tends to emit above the actual questions, such as
/// `想定質問：`. Matched against each trimmed line; matching lines are
/// dropped before extraction.
pub const DEFAULT_LABEL_PATTERNS: [&str; 2] =
    ["^想定質問[:：]?", "(?i)^anticipated questions?[:：]?"];

/// Numbered-list marker: a single digit, a period, trailing whitespace.
const NUMBERED_ITEM_PATTERN: &str = r"\n?\s*\d\.\s*";

/// Normalizes a free-text model reply into exactly [`QUESTION_SLOTS`]
/// question strings.
///
/// Tiers, applied in order: strip header label lines, split on numbered-list
/// markers, fall back to one question per line when numbering is absent,
/// then pad with empty strings or truncate to exactly three entries.
#[derive(Debug, Clone)]
pub struct QuestionExtractor {
    label_patterns: Vec<Regex>,
    numbered_item: Regex,
}

impl QuestionExtractor {
    /// Builds an extractor that strips the given leading-label patterns
    /// instead of the defaults. Patterns are anchored by the caller.
    pub fn with_label_patterns<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let label_patterns = patterns
            .into_iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            label_patterns,
            numbered_item: Regex::new(NUMBERED_ITEM_PATTERN)?,
        })
    }

    pub fn extract(&self, raw_text: &str) -> [String; QUESTION_SLOTS] {
        let lines: Vec<&str> = raw_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| !self.is_label_line(line))
            .collect();

        let joined = lines.join("\n");
        let mut items: Vec<String> = self
            .numbered_item
            .split(&joined)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
            .collect();

        // Unnumbered output: treat each remaining line as one question.
        if items.len() < QUESTION_SLOTS {
            items = lines.into_iter().map(str::to_string).collect();
        }

        let mut items = items.into_iter();
        std::array::from_fn(|_| items.next().unwrap_or_default())
    }

    fn is_label_line(&self, line: &str) -> bool {
        self.label_patterns
            .iter()
            .any(|pattern| pattern.is_match(line))
    }
}

impl Default for QuestionExtractor {
    fn default() -> Self {
        Self::with_label_patterns(DEFAULT_LABEL_PATTERNS)
            .expect("default extraction patterns compile")
    }
}

#[cfg(test)]
mod tests;
