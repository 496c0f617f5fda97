//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — config and report/output structs.
//! - `constants.rs` — stable defaults (endpoint, document path, timeout).
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem/network side effects. Changes
//! here affect the `--json` output schema; keep them explicit.

pub mod constants;
pub mod models;
