//! Application layer services.
//!
//! Services compose the pure utilities with the host contracts in
//! [`crate::domain::ports`], giving the host integration a single entry point
//! per paste command.
//!
//! # Available Services
//!
//! - [`services::paste_service::PasteService`] - Default, link and image paste handling

pub mod services;
