//! # Capacitor Canvas
//!
//! Toolkit-agnostic drawing state for the trajectory viewer: maps physical
//! paths to pixels and keeps the scene the shell paints every frame.

pub mod scale;
pub mod scene;

pub use scale::*;
pub use scene::*;
