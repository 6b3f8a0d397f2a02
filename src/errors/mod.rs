//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics the parser accumulates. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical and syntactic problems
//! - Helpful suggestions used when rendering diagnostics

pub mod errors;
