//! Core library for recase
//!
//! This crate implements the **Functional Core** of the recase application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The recase project uses a two-crate architecture to enforce separation of
//! concerns:
//!
//! - **`recase_core`** (this crate): Pure transformation functions with zero I/O
//! - **`recase`**: Argument parsing and terminal output (the Imperative Shell)
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`case`]: Segmentation of identifier-like strings into word tokens and
//!   reassembly into camelCase, kebab-case, or dot.case
//!
//! # Example Usage
//!
//! ```rust
//! use recase_core::case::{convert, CaseStyle};
//!
//! let kebab = convert("camelCaseString", CaseStyle::Kebab).unwrap();
//! assert_eq!(kebab, "camel-case-string");
//! ```

pub mod case;
