//! # cedit
//!
//! Opens files in a configured editor, re-running the editor through an
//! elevation command (sudo and friends) only when a file is not writable by
//! the current user.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod cli;
pub mod command;
pub mod commands;
pub mod config;
pub mod constants;
pub mod editor;
pub mod environment;
pub mod error;
pub mod installer;
pub mod permissions;
pub mod resolver;
pub mod runner;
pub mod target;
pub mod ui;

pub use config::Config;
pub use error::Error;
