// predictor-backend/src/api/handlers/mod.rs
pub mod admin_handler;
pub mod system_handler;
