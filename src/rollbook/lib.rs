//! # Rollbook Architecture
//!
//! Rollbook is a **UI-agnostic student-record library**: the CLI that ships
//! with it is just one client. The same core could sit behind a GUI or a web
//! endpoint unchanged, and the layering is designed to keep it that way.
//!
//! ## The Layers
//!
//! ```text
//! CLI layer (args.rs, cli/, wired by main.rs)
//!   parses arguments, renders feedback and listings, owns stdout/stderr
//!           │
//! API layer (api.rs)
//!   thin facade over commands; owns the store, returns Result<CmdResult>
//!           │
//! Command layer (commands/*.rs)
//!   pure business logic per user command; no I/O assumptions
//!           │
//! Core (model, fields, store, query, feedback)
//!   validated value types, the identity-indexed store, read-only queries,
//!   and outcome-message formatting
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, and never exits the process.
//! Disk persistence ([`store::json`]) and configuration ([`config`]) are
//! collaborators the client wires in; the store itself is purely in-memory.
//!
//! ## Records Are Values
//!
//! A [`model::Record`] is immutable once built: every field passed through a
//! validator in [`fields`] at construction, and edits produce a new record
//! that the store swaps in atomically. The student/contact split is the
//! [`model::Profile`] sum type, matched exhaustively everywhere.
//!
//! ## Testing Strategy
//!
//! - **Commands** (`commands/*.rs`): unit tests of business logic against an
//!   in-memory store. The lion's share of testing lives here.
//! - **Core** (`fields`, `store`, `query`, `feedback`): table-style unit
//!   tests of shapes, invariants, and classification.
//! - **CLI** (`tests/`): end-to-end runs of the binary against a temp data
//!   directory.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade—entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`model`]: the `Record` value object and its variants
//! - [`fields`]: validated field newtypes and their shapes
//! - [`store`]: the in-memory record store and JSON persistence
//! - [`query`]: name and tag queries over the store
//! - [`feedback`]: outcome classification and highlight spans
//! - [`config`]: display configuration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod feedback;
pub mod fields;
pub mod model;
pub mod query;
pub mod store;
