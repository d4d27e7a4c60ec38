//! Infrastructure layer: storage implementations, wire DTOs and input sanitizing.

pub mod dto;
pub mod repository;
pub mod sanitize;
