// src/domain/mod.rs
pub mod knockout_slot;
pub mod match_model;
pub mod principal;
pub mod role;
pub mod team_model;
