//! Word-usage contract and generated-story artifact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Separator line between story pages.
pub const PAGE_SEPARATOR: &str = "---";

/// Contract for one candidate document.
///
/// The generator may only draw on the mastered vocabulary and must work the
/// target words in repeatedly; everything else about the story is its own
/// business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Only these words may appear in the story body.
    pub mastered_words: Vec<String>,
    /// Words to introduce and repeat.
    pub target_words: Vec<String>,
    /// Pages requested, separated by `---` lines in the output.
    pub num_pages: usize,
    /// Appended verbatim to the prompt on regeneration passes.
    pub extra_instruction: Option<String>,
}

impl GenerationRequest {
    /// Default page count for a first pass.
    pub const DEFAULT_PAGES: usize = 5;

    /// Create a request over mastered and target word lists.
    pub fn new<M, T, S, U>(mastered_words: M, target_words: T) -> Self
    where
        M: IntoIterator<Item = S>,
        T: IntoIterator<Item = U>,
        S: Into<String>,
        U: Into<String>,
    {
        Self {
            mastered_words: mastered_words.into_iter().map(Into::into).collect(),
            target_words: target_words.into_iter().map(Into::into).collect(),
            num_pages: Self::DEFAULT_PAGES,
            extra_instruction: None,
        }
    }

    /// Set the requested page count.
    pub fn with_pages(mut self, num_pages: usize) -> Self {
        self.num_pages = num_pages;
        self
    }

    /// Append an extra instruction to the prompt.
    pub fn with_extra_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.extra_instruction = Some(instruction.into());
        self
    }

    /// Render the contract into the generator prompt.
    pub fn prompt(&self) -> String {
        let mut prompt = format!(
            "Write a short children's decodable book.\n\
             Use ONLY these mastered words: {}.\n\
             Include and repeat these target learning words: {}.\n\
             Make sure at least 60% of the words in the learning words list are used.\n\
             Make sure at least 80% of the words are mastered words.\n\
             Sentences should be short, simple, and repetitive.\n\
             The book should have {} pages, each separated by a line containing only '---'.",
            self.mastered_words.join(", "),
            self.target_words.join(", "),
            self.num_pages
        );
        if let Some(instruction) = &self.extra_instruction {
            prompt.push('\n');
            prompt.push_str(instruction);
        }
        prompt
    }
}

/// A generated candidate story with its usage measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedStory {
    pub id: Uuid,
    pub text: String,
    /// Generation passes it took to produce this text.
    pub attempts: u32,
    /// Share of distinct target words the story uses.
    pub target_coverage: f64,
    /// Share of distinct mastered words the story uses.
    pub mastered_coverage: f64,
    pub created_at: DateTime<Utc>,
}

impl GeneratedStory {
    /// Pages of the story, split on `---` separator lines.
    pub fn pages(&self) -> Vec<&str> {
        self.text
            .split(PAGE_SEPARATOR)
            .map(str::trim)
            .filter(|page| !page.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_the_contract() {
        let request = GenerationRequest::new(["cat", "the"], ["pond"]).with_pages(3);
        let prompt = request.prompt();

        assert!(prompt.contains("cat, the"));
        assert!(prompt.contains("pond"));
        assert!(prompt.contains("3 pages"));
        assert!(prompt.contains("60%"));
    }

    #[test]
    fn test_extra_instruction_is_appended() {
        let request = GenerationRequest::new(["cat"], ["pond"])
            .with_extra_instruction("Repeat the target words more often.");
        assert!(request.prompt().ends_with("Repeat the target words more often."));
    }

    #[test]
    fn test_story_pages_split() {
        let story = GeneratedStory {
            id: Uuid::new_v4(),
            text: "The cat sat.\n---\nThe cat ran.\n---\n".to_string(),
            attempts: 1,
            target_coverage: 1.0,
            mastered_coverage: 0.5,
            created_at: Utc::now(),
        };
        assert_eq!(story.pages(), vec!["The cat sat.", "The cat ran."]);
    }
}
