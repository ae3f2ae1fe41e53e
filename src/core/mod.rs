//! Core components of the `livemarket-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`MarketClient`] and its builder.
//! - The primary [`MarketError`] type.
//! - Shared data models like [`AssetClass`].
//! - The internal fetch layer.

/// The main client (`MarketClient`), builder, and configuration.
pub mod client;
/// The primary error type (`MarketError`) for the crate.
pub mod error;
/// Shared data models used across multiple modules.
pub mod models;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::MarketClient`
pub use client::{MarketClient, MarketClientBuilder};
pub use error::MarketError;
pub use models::AssetClass;
