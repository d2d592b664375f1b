//! Steam Shortcut Adder library - registers a launcher as a non-Steam game.
//!
//! This library exposes the core functionality of the `ssa` CLI for use in
//! tests and other tools.
//!
//! # Modules
//!
//! - `appid`: Shortcut identifier derived from name and launch target
//! - `vdf`: Binary `shortcuts.vdf` record encoding and store mutation
//! - `artwork`: Library artwork download and caching
//! - `launcher`, `steam`: Locating the launcher and the Steam user
//! - `config`: Configuration file handling
//! - `error`: Error types with user-recoverable hints
//! - `output`: Output mode abstraction (robot/human)
//! - `workflow`: The end-to-end add pipeline
#![forbid(unsafe_code)]

pub mod appid;
pub mod artwork;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs_util;
pub mod launcher;
pub mod logging;
pub mod output;
pub mod steam;
pub mod theme;
pub mod vdf;
pub mod workflow;
