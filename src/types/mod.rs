// Portfolio shared type definitions
// Each submodule defines types used across the application.

pub mod contact;
pub mod content;
pub mod errors;
pub mod repository;
pub mod route;
pub mod theme;
