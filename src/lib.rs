//! PassGen - password generator, strength checker and credential vault
//!
//! This library provides the core functionality behind the `passgen` binary:
//! character-set based password generation, an additive strength heuristic,
//! a bounded history of generated passwords and a local credential vault with
//! JSON and CSV import/export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Character classes, generation requests, history entries and credentials
//! - `storage`: Key-value storage port with JSON file and in-memory backends
//! - `services`: Generation, strength, history, vault and import logic
//! - `export`: JSON and CSV vault export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust
//! use passgen::models::{ClassSelection, GenerationRequest};
//! use passgen::services::{evaluate, PasswordGenerator};
//!
//! let mut generator = PasswordGenerator::new();
//! let password = generator
//!     .generate(&GenerationRequest::new(ClassSelection::all(), 16))
//!     .unwrap();
//! assert_eq!(password.len(), 16);
//! assert!(evaluate(password.as_str()).is_some());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PassgenError, PassgenResult};
