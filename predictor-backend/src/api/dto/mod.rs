// predictor-backend/src/api/dto/mod.rs
pub mod common;
pub mod match_dto;
