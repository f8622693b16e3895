// Service exports
pub mod memory;
pub mod source;

pub use memory::InMemoryCandidateSource;
pub use source::{CandidateSource, FetchError};
