//! Vellum Core Types and Definitions
//!
//! This crate provides the foundational types for the Vellum drawing
//! library. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: The drawable protocol and the recording drawing context
//!   ([`draw`] module)
//! - **Errors**: Geometry and rendering error types ([`error`] module)

pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;
