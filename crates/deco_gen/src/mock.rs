//! Mock text generator for testing.
//!
//! Returns scripted stories and captures every request, so tests can drive
//! the regeneration loop without a generative backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::contract::GenerationRequest;
use crate::error::{GenError, GenResult};
use crate::generator::TextGenerator;

/// Scripted text generator.
#[derive(Clone, Default)]
pub struct MockGenerator {
    /// Predefined responses, returned in order (cycling when exhausted).
    responses: Arc<RwLock<Vec<String>>>,
    /// Index of the next response to return.
    response_index: Arc<AtomicUsize>,
    /// Captured requests for verification.
    captured: Arc<RwLock<Vec<GenerationRequest>>>,
    /// Simulated failure message, if any.
    simulate_failure: Arc<RwLock<Option<String>>>,
}

impl MockGenerator {
    /// Create a mock with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for the next generate call.
    pub fn add_response(self, text: impl Into<String>) -> Self {
        self.responses.write().push(text.into());
        self
    }

    /// Replace all scripted responses.
    pub fn with_responses(self, responses: Vec<String>) -> Self {
        *self.responses.write() = responses;
        self
    }

    /// Make every generate call fail with the given message.
    pub fn simulate_failure(self, message: impl Into<String>) -> Self {
        *self.simulate_failure.write() = Some(message.into());
        self
    }

    /// All captured requests so far.
    pub fn captured_requests(&self) -> Vec<GenerationRequest> {
        self.captured.read().clone()
    }

    /// Number of generate calls made.
    pub fn call_count(&self) -> usize {
        self.captured.read().len()
    }

    fn next_response(&self) -> String {
        let responses = self.responses.read();
        if responses.is_empty() {
            return String::new();
        }
        let index = self.response_index.fetch_add(1, Ordering::SeqCst);
        responses
            .get(index % responses.len())
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> GenResult<String> {
        self.captured.write().push(request.clone());

        if let Some(message) = self.simulate_failure.read().clone() {
            return Err(GenError::Generator(message));
        }
        Ok(self.next_response())
    }
}
