//! Service implementations for the interface traits

pub mod dgt_client;

pub use dgt_client::{DgtClient, VERSION_PLACEHOLDER, normalize_source_path};
