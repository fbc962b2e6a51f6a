//! Core types shared across cfndiff facilities
//!
//! This crate provides foundational types used by the error handling,
//! logging and comparison layers:
//!
//! - **Correlation**: `RunId` identifying one comparison run
//! - **Sensitive data**: `Sensitive<T>` marker for masked parameter values
//! - **Schema constants**: Canonical field keys and event names

pub mod run;
pub mod schema;
pub mod sensitive;

pub use run::RunId;
pub use sensitive::Sensitive;
