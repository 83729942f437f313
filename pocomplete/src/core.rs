// src/core.rs
pub mod analyzer;
pub mod exclude;
pub mod scanner;
pub mod table;
