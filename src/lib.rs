//! FilmWise - terminal front-end for a movie and series catalog
//!
//! A featured carousel on the home page, movie and series listings, and a
//! header whose navigation and search collapse behind toggles on narrow
//! terminals.
//!
//! # Modules
//!
//! - `models` - Slides, catalog records and routes
//! - `catalog` - Placeholder catalog data
//! - `ui` - TUI components (carousel, header disclosure, lists, pages)
//! - `app` - Application state and navigation
//! - `cli` / `commands` - Command line parsing and subcommands
//! - `config` - TOML configuration file
//! - `logging` - Logger setup

pub mod models;
pub mod catalog;
pub mod ui;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use models::{MediaType, Movie, Route, Slide};

pub use app::{App, AppOptions, InputMode};
pub use config::{Config, ConfigError};
pub use ui::autoplay::CarouselController;
pub use ui::carousel::{Carousel, CarouselConfig, Phase};
pub use ui::disclosure::Disclosure;
