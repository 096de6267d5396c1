//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Error conversion helpers
pub mod error_helpers;

/// Verbose diagnostics on stderr
pub mod logging;

/// Display-width aware truncation and padding
pub mod text;

/// Input validation utilities
pub mod validation;
