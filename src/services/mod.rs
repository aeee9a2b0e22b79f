// Service exports
pub mod artifact;

pub use artifact::{load_model, ArtifactError};
