// src/app/mod.rs
//! Application module - front-end state around a browse session.

pub mod state;
pub mod thumbnail;

// Re-export the App struct
pub use state::App;
pub use thumbnail::{Thumbnail, ThumbnailLoader};
