//! # FitCRM Architecture
//!
//! FitCRM keeps a personal trainer's client roster on the local machine and
//! enriches each client's detail view with exercise suggestions. It is a
//! **UI-agnostic library** with a thin CLI on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, cli/)                         │
//! │  - Parses arguments, prompts, prints, owns exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, raw ids → ClientId            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Form (add/edit), list/search, delete, detail             │
//! │  - Uses validation.rs and enrich/                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait: load_all / save_all + CRUD on top     │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record Consistency
//!
//! - Ids are minted once, at creation, and never change.
//! - Only input that passed [`validation::validate`] reaches the store.
//! - `lastUpdated` is stamped on every create and update.
//! - The roster is rewritten as a whole, atomically.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Confirmation prompts and exercise lookups are passed in as trait objects
//! ([`commands::delete::Confirm`], [`enrich::ExerciseSource`]), so tests can
//! script them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each screen
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Client records and exercise suggestions
//! - [`validation`]: Form validation rules
//! - [`enrich`]: Exercise suggestions with the built-in fallback table
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod enrich;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;
