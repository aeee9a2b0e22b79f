use crate::models::{EncodedFeatures, PredictionRequest};
use thiserror::Error;

/// Closed vocabulary for `ocean_proximity`, in the column order the
/// training pipeline emitted the indicator features.
pub const OCEAN_PROXIMITY_VOCABULARY: [&str; 5] = [
    "<1H OCEAN",
    "INLAND",
    "ISLAND",
    "NEAR BAY",
    "NEAR OCEAN",
];

/// Numeric attribute names in the column order the model was trained with
pub const NUMERIC_FEATURES: [&str; 8] = [
    "longitude",
    "latitude",
    "housing_median_age",
    "total_rooms",
    "total_bedrooms",
    "population",
    "households",
    "median_income",
];

/// Width of the encoded vector: 8 numeric features plus 5 indicators
pub const ENCODED_WIDTH: usize = NUMERIC_FEATURES.len() + OCEAN_PROXIMITY_VOCABULARY.len();

/// Canonical feature schema produced by [`encode`], in order
///
/// Model artifacts must be trained against exactly this column order.
pub fn feature_schema() -> Vec<String> {
    let mut names: Vec<String> = NUMERIC_FEATURES.iter().map(|n| n.to_string()).collect();
    names.extend(
        OCEAN_PROXIMITY_VOCABULARY
            .iter()
            .map(|v| format!("ocean_proximity_{}", v)),
    );
    names
}

/// Errors that can occur while encoding a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("unknown ocean_proximity value: {value:?} (expected one of {OCEAN_PROXIMITY_VOCABULARY:?})")]
    UnknownCategory { value: String },
}

/// One-hot encode a prediction request into the model's feature schema
///
/// Numeric attributes pass through unchanged, in declaration order. The
/// categorical attribute is replaced by five mutually-exclusive binary
/// indicators named `ocean_proximity_<value>`, exactly one of which is 1.
///
/// A value outside the vocabulary is rejected rather than encoded as an
/// all-zero indicator block, which the model never saw during training.
pub fn encode(request: &PredictionRequest) -> Result<EncodedFeatures, EncodeError> {
    let category = request.ocean_proximity.as_str();
    if !OCEAN_PROXIMITY_VOCABULARY.contains(&category) {
        return Err(EncodeError::UnknownCategory {
            value: category.to_string(),
        });
    }

    let mut names = Vec::with_capacity(ENCODED_WIDTH);
    let mut values = Vec::with_capacity(ENCODED_WIDTH);

    for (name, value) in request.numeric_features() {
        names.push(name.to_string());
        values.push(value);
    }

    for vocab in OCEAN_PROXIMITY_VOCABULARY {
        names.push(format!("ocean_proximity_{}", vocab));
        values.push(if vocab == category { 1.0 } else { 0.0 });
    }

    Ok(EncodedFeatures { names, values })
}
