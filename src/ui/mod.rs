//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation throughout.

pub mod theme;
pub mod carousel;
pub mod autoplay;
pub mod disclosure;
pub mod movies;
pub mod pages;

pub use theme::Theme;
