//! Data structures and types for FilmWise
//!
//! Shared models used across the application organized by domain:
//! - **Carousel**: featured slides shown on the home page
//! - **Catalog**: movie/series records from the placeholder catalog
//! - **Routing**: pages reachable from the header navigation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Carousel Models
// =============================================================================

/// One carousel entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Stable unique key within a slide list
    pub id: String,
    /// Opaque reference to the media asset (path or URL)
    pub image_ref: String,
    /// Optional display text rendered under the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Slide {
    pub fn new(id: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_ref: image_ref.into(),
            caption: None,
        }
    }

    /// Attach a caption
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Caption if present, otherwise the asset name
    pub fn label(&self) -> &str {
        self.caption.as_deref().unwrap_or_else(|| {
            self.image_ref
                .rsplit('/')
                .next()
                .unwrap_or(&self.image_ref)
        })
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.label())
    }
}

// =============================================================================
// Catalog Models
// =============================================================================

/// Media type discriminator for catalog entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Movie => write!(f, "Movie"),
            MediaType::Series => write!(f, "Series"),
        }
    }
}

/// Catalog record for a movie or series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub media_type: MediaType,
    pub title: String,
    pub description: String,
    pub year: u16,
    /// Release date as `YYYY-MM-DD`
    pub release_date: String,
    /// Runtime in minutes
    pub runtime: u16,
    pub rating: f32,
    pub total_favorites: u32,
    pub is_favorite: bool,
    pub total_comments: u32,
    /// Genre id -> genre name
    pub genres: BTreeMap<u32, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Movie {
    /// Format runtime as "2h 32m" or "45m"
    pub fn format_runtime(&self) -> String {
        let hours = self.runtime / 60;
        let minutes = self.runtime % 60;
        if hours > 0 {
            format!("{}h {:02}m", hours, minutes)
        } else {
            format!("{}m", minutes)
        }
    }

    /// Genre names joined for display
    pub fn genre_names(&self) -> String {
        self.genres
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Case-insensitive genre membership
    pub fn has_genre(&self, name: &str) -> bool {
        self.genres.values().any(|g| g.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.year, self.media_type)
    }
}

// =============================================================================
// Routing
// =============================================================================

/// Pages of the application, keyed by URL-style path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    Movies,
    Series,
    Login,
    About,
    Contact,
    NotFound,
}

impl Route {
    /// Links shown in the header navigation, in display order
    pub const NAV: [Route; 4] = [Route::Home, Route::Movies, Route::Series, Route::Login];

    /// Every routable page (excludes the fallback)
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Movies,
        Route::Series,
        Route::Login,
        Route::About,
        Route::Contact,
    ];

    /// Resolve a path; unknown paths map to `NotFound`
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" => Route::Home,
            "/movies" => Route::Movies,
            "/series" => Route::Series,
            "/login" => Route::Login,
            "/about" => Route::About,
            "/contact" => Route::Contact,
            _ => Route::NotFound,
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Movies => "/movies",
            Route::Series => "/series",
            Route::Login => "/login",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::NotFound => "*",
        }
    }

    /// Label used in navigation and page titles
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Movies => "Movies",
            Route::Series => "Series",
            Route::Login => "Login",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Tests
// =============================================================================
