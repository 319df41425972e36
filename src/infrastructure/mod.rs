//! Infrastructure layer for host collaborators.
//!
//! Implements the traits in [`crate::domain::ports`].
//!
//! # Modules
//!
//! - [`clipboard`] - System and fixed-text clipboards
//! - [`editor`] - In-memory text buffer

pub mod clipboard;
pub mod editor;
