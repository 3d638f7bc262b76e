// predictor-backend/src/extractors/mod.rs
pub mod json;

pub use json::JsonBody;
