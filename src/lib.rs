//! ticklist - Terminal Task List Library
//!
//! This library provides the core functionality for the ticklist CLI tool:
//! an ordered task list held in memory and mirrored to a JSON file on
//! every change.
//!
//! # Core Concepts
//!
//! - **Tasks**: Ordered records with monotonic ids and readable timestamps
//! - **Store**: The single mutation point, rewriting the whole list per change
//! - **Export**: Dated JSON snapshots of the current list
//! - **Notices**: Transient messages that expire on their own
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `config.toml`
//! - `error`: Error types and result aliases
//! - `task`: Task records and the list store
//! - `storage`: JSON file persistence with locked atomic writes
//! - `export`: Dated snapshot files
//! - `notify`: Transient notification state
//! - `actions`: Gesture handling shared by the TUI and the CLI
//! - `ui`: The interactive full-screen list view

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod notify;
pub mod output;
pub mod storage;
pub mod task;
pub mod ui;

pub use error::{Error, Result};
