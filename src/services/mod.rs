//! Service layer containing the pipeline stages and side-effect helpers.
//!
//! ## Service map
//! - `fetcher.rs` — single blocking POST to the model server.
//! - `store.rs` — encoding-aware load, pretty UTF-8 save, audit log.
//! - `inspector.rs` — read-only tag/rule/field probes.
//! - `merger.rs` — global rule merge transform.
//! - `config.rs` — optional config file loading and endpoint resolution.
//! - `output.rs` — JSON/text output helper.
//!
//! ## Conventions
//! - Probes are pure over the decoded document; side effects live in
//!   `fetcher`/`store` and are explicit.
//! - Command handlers stay thin; they delegate here.

pub mod config;
pub mod fetcher;
pub mod inspector;
pub mod merger;
pub mod output;
pub mod store;
