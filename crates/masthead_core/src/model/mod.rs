//! Entity model for the author/magazine/article graph.
//!
//! # Responsibility
//! - Define the three entity records and their typed identifiers.
//! - Own field-level validation rules shared by construction and setters.
//!
//! # Invariants
//! - Every entity is identified by a stable, never-reused ID.
//! - Entities reference each other by ID only; `Catalog` owns all records.
//! - Owner collections (`Author::article_ids`, `Magazine::article_ids`) are
//!   mutated only from inside the crate.

pub mod article;
pub mod author;
pub mod ids;
pub mod magazine;
pub mod validation;
