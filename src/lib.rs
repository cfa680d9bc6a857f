//! `bigo-curves` library crate.
//!
//! The binary (`bigo`) is a thin wrapper around this library so that:
//!
//! - measurement and fitting are testable without spawning processes
//! - candidates can be any Rust callable, not just catalog entries
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod bench;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
