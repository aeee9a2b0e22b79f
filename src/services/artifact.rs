use crate::models::RegressionModel;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the persisted model artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model artifact has an empty feature schema")]
    EmptySchema,

    #[error("model artifact arity mismatch: {names} feature names but {coefficients} coefficients")]
    ArityMismatch { names: usize, coefficients: usize },
}

/// Load and validate the regression model artifact from disk
///
/// The artifact is produced by an external training pipeline; its feature
/// order is the contract every prediction relies on, so a structurally
/// inconsistent artifact is rejected at load rather than at inference.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<RegressionModel, ArtifactError> {
    let path = path.as_ref();
    tracing::debug!("Reading model artifact from {}", path.display());

    let raw = std::fs::read_to_string(path)?;
    let model: RegressionModel = serde_json::from_str(&raw)?;

    if model.feature_names.is_empty() {
        return Err(ArtifactError::EmptySchema);
    }

    if model.feature_names.len() != model.coefficients.len() {
        return Err(ArtifactError::ArityMismatch {
            names: model.feature_names.len(),
            coefficients: model.coefficients.len(),
        });
    }

    Ok(model)
}
