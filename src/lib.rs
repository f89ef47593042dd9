//! Mediainform - Typed media metadata from MediaInfo
//!
//! This library crate exposes the command-line front end for integration testing.

pub mod config;
pub mod display;
pub mod inform;
