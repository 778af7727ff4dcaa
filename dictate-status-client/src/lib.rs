// SPDX-License-Identifier: GPL-3.0-only
pub mod client;
pub mod error;
pub mod models;

// Re-export commonly used types for convenience
pub use client::DictationStatusClient;
pub use error::ClientError;
pub use models::*;
