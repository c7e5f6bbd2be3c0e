//! vitrine - Front-page curation for a local content store
//!
//! A command-line tool that loads tagged, timestamped content records from
//! a directory of JSON documents and curates them into a featured set and
//! a latest set for display.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::VitrineError;
