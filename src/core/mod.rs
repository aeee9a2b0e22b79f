// Core algorithm exports
pub mod encoder;
pub mod predictor;

pub use encoder::{
    encode, feature_schema, EncodeError, ENCODED_WIDTH, NUMERIC_FEATURES,
    OCEAN_PROXIMITY_VOCABULARY,
};
pub use predictor::{InferenceError, Predictor};
