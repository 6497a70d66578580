//! # Snapshot Testing Support
//!
//! Utilities for testing translations with snapshot assertions and
//! invariant checks.
//!
//! - **`outline`**: renders a [`Translation`] as an indented text outline,
//!   stable enough for `insta` inline snapshots
//! - **`invariants`**: structural checks every translation must pass (no empty
//!   paragraphs, no unescaped markup in escaped text, diagnostics point at real
//!   lines)
//!
//! [`Translation`]: crate::models::Translation

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
