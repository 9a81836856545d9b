//! Error types for Vellum operations.
//!
//! This module provides the main error type [`VellumError`] which wraps
//! the error conditions that can occur while building and exporting
//! drawable trees.

use std::io;

use thiserror::Error;

use vellum_core::error::DrawError;

/// The main error type for Vellum operations.
#[derive(Debug, Error)]
pub enum VellumError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Draw error: {0}")]
    Draw(#[from] DrawError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for VellumError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
