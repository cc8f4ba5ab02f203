//! # deco_gen
//!
//! Text-generation collaborator seam for DecoRead.
//!
//! This crate owns the word-usage contract handed to a generative text
//! service and the loop that decides whether a candidate is good enough:
//! - **GenerationRequest**: mastered/target word contract rendered into a
//!   deterministic prompt
//! - **TextGenerator**: the async trait real backends implement; the only
//!   async seam in the workspace
//! - **MockGenerator**: scripted implementation for tests
//! - **GenerationDriver**: regenerates once with a scaled page count when
//!   target-word coverage comes back below threshold
//!
//! ## Example
//!
//! ```rust,ignore
//! use deco_gen::{GenerationDriver, GenerationRequest, MockGenerator};
//!
//! let generator = MockGenerator::new().add_response("The cat sat. --- The cat ran.");
//! let driver = GenerationDriver::new(generator);
//! let story = driver.run(GenerationRequest::new(mastered, targets)).await?;
//! println!("coverage {:.2} after {} attempts", story.target_coverage, story.attempts);
//! ```

pub mod contract;
pub mod driver;
pub mod error;
pub mod generator;
pub mod mock;

pub use contract::{GeneratedStory, GenerationRequest};
pub use driver::{DriverConfig, GenerationDriver};
pub use error::{GenError, GenResult};
pub use generator::TextGenerator;
pub use mock::MockGenerator;
