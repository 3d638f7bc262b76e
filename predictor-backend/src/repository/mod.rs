// src/repository/mod.rs
pub mod match_repository;
