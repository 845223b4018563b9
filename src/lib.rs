// src/lib.rs
//! imgpick - A terminal image picker.
//!
//! Browse local storage below a fixed root, preview images and hand exactly
//! one selected path (or a cancellation) back to the caller.

pub mod app;
pub mod browse;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod ui;
