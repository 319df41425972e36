//! Business logic services for the application layer.

pub mod paste_service;

pub use paste_service::PasteService;
