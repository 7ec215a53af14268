//! Space Battle: a single-player arcade shooter.
//!
//! The library holds the whole simulation. Rendering, the terminal and the
//! respawn pause live in the binary, which only reads the state exposed here.

pub mod compute;
pub mod config;
pub mod entities;
pub mod input;
pub mod settings;
pub mod stats;
pub mod ui;
pub mod viewport;
