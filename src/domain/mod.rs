//! Domain layer: value types and host contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Positions, classifications and paste results
//! - [`ports`] - Traits for the editor buffer and the clipboard
//!
//! The domain layer has no dependency on infrastructure. Concrete buffers and
//! clipboards live in [`crate::infrastructure`].

pub mod entities;
pub mod ports;
