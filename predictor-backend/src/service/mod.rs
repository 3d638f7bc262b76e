// src/service/mod.rs
pub mod admin_service;
pub mod tournament_service;
