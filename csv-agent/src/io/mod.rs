//! I/O helpers for agent commands.

pub mod config;
