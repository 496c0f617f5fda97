//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `remote.rs` — fetch from the model server.
//! - `report.rs` — read-only tags/rules/verify probes.
//! - `update.rs` — rule merge + rewrite.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate pipeline stages to `services/*`.
//! - Keep behavior and output schema stable.

pub mod remote;
pub mod report;
pub mod update;

pub use remote::handle_remote_commands;
pub use report::handle_report_commands;
pub use update::handle_update_commands;
