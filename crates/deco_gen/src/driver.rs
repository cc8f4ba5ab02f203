//! Regeneration loop: generate, measure target coverage, scale and retry.

use std::collections::BTreeSet;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use deco_corpus::normalize_word;
use deco_score::coverage_ratio;

use crate::contract::{GeneratedStory, GenerationRequest};
use crate::error::{GenError, GenResult};
use crate::generator::TextGenerator;

/// Driver configuration.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Minimum share of distinct target words a story must use.
    pub target_threshold: f64,
    /// Page ceiling when the driver scales a request up.
    pub max_pages: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            target_threshold: 0.6,
            max_pages: 30,
        }
    }
}

/// Drives a text generator until the candidate honors the word contract.
///
/// One regeneration pass only: a story below the coverage threshold gets a
/// second attempt with `ceil(1 / coverage)`-scaled pages (capped) and an
/// instruction to repeat the targets; whatever comes back is the result.
pub struct GenerationDriver<G> {
    generator: G,
    config: DriverConfig,
}

impl<G: TextGenerator> GenerationDriver<G> {
    /// Create a driver with the default configuration.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            config: DriverConfig::default(),
        }
    }

    /// Replace the driver configuration.
    pub fn with_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Generate a story, regenerating once when target coverage falls
    /// short.
    pub async fn run(&self, request: GenerationRequest) -> GenResult<GeneratedStory> {
        let target_set = normalized_set(&request.target_words);
        if target_set.is_empty() {
            return Err(GenError::EmptyContract);
        }
        let mastered_set = normalized_set(&request.mastered_words);

        let mut request = request;
        let mut attempts = 1;
        let mut text = self.generator.generate(&request).await?;
        let mut coverage = coverage_ratio(&text, &target_set);
        debug!("First pass target coverage: {:.2}", coverage);

        if coverage < self.config.target_threshold {
            let pages = self.scaled_pages(request.num_pages, coverage);
            info!(
                "Target coverage {:.2} below threshold {:.2}, regenerating with {} pages",
                coverage, self.config.target_threshold, pages
            );

            request = request.with_pages(pages).with_extra_instruction(
                "Please repeat the target words more often and ensure each page includes them.",
            );
            text = self.generator.generate(&request).await?;
            coverage = coverage_ratio(&text, &target_set);
            attempts += 1;
        }

        Ok(GeneratedStory {
            id: Uuid::new_v4(),
            attempts,
            target_coverage: coverage,
            mastered_coverage: coverage_ratio(&text, &mastered_set),
            text,
            created_at: Utc::now(),
        })
    }

    /// Scale the page count by the coverage shortfall, capped at the
    /// configured ceiling. Zero coverage goes straight to the ceiling.
    fn scaled_pages(&self, num_pages: usize, coverage: f64) -> usize {
        if coverage <= 0.0 {
            return self.config.max_pages;
        }
        let scale = (1.0 / coverage).ceil() as usize;
        (num_pages * scale).min(self.config.max_pages)
    }
}

fn normalized_set(words: &[String]) -> BTreeSet<String> {
    words
        .iter()
        .map(|word| normalize_word(word))
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockGenerator;

    fn request() -> GenerationRequest {
        GenerationRequest::new(
            ["the", "a", "dog", "and", "ran"],
            ["cat", "mat", "sat", "ram"],
        )
    }

    #[tokio::test]
    async fn test_single_pass_when_coverage_is_good() {
        let generator = MockGenerator::new()
            .add_response("The cat sat on a mat. A ram ran.");
        let driver = GenerationDriver::new(generator.clone());

        let story = driver.run(request()).await.unwrap();
        assert_eq!(story.attempts, 1);
        assert!((story.target_coverage - 1.0).abs() < 1e-9);
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_regenerates_once_with_scaled_pages() {
        // First pass uses 1 of 4 targets (0.25 coverage) -> scale = 4,
        // pages = 5 * 4 = 20.
        let generator = MockGenerator::new()
            .add_response("The cat ran.")
            .add_response("The cat sat on a mat. The ram sat.");
        let driver = GenerationDriver::new(generator.clone());

        let story = driver.run(request()).await.unwrap();
        assert_eq!(story.attempts, 2);
        assert!(story.target_coverage > 0.6);

        let captured = generator.captured_requests();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[1].num_pages, 20);
        assert!(captured[1].extra_instruction.is_some());
    }

    #[tokio::test]
    async fn test_zero_coverage_jumps_to_page_ceiling() {
        let generator = MockGenerator::new()
            .add_response("Nothing relevant here.")
            .add_response("Still nothing.");
        let driver = GenerationDriver::new(generator.clone());

        let story = driver.run(request()).await.unwrap();
        assert_eq!(story.attempts, 2);
        assert_eq!(generator.captured_requests()[1].num_pages, 30);
    }

    #[tokio::test]
    async fn test_page_scaling_respects_ceiling() {
        let generator = MockGenerator::new()
            .add_response("The cat ran.")
            .add_response("The cat sat on a mat.");
        let config = DriverConfig {
            target_threshold: 0.6,
            max_pages: 8,
        };
        let driver = GenerationDriver::new(generator.clone()).with_config(config);

        let _ = driver.run(request()).await.unwrap();
        assert_eq!(generator.captured_requests()[1].num_pages, 8);
    }

    #[tokio::test]
    async fn test_empty_target_contract_is_an_error() {
        let generator = MockGenerator::new().add_response("anything");
        let driver = GenerationDriver::new(generator);

        let empty = GenerationRequest::new(vec!["the".to_string()], Vec::<String>::new());
        let err = driver.run(empty).await.unwrap_err();
        assert!(matches!(err, GenError::EmptyContract));
    }

    #[tokio::test]
    async fn test_generator_failure_propagates() {
        let generator = MockGenerator::new().simulate_failure("backend down");
        let driver = GenerationDriver::new(generator);

        let err = driver.run(request()).await.unwrap_err();
        assert!(matches!(err, GenError::Generator(_)));
    }
}
