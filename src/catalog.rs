//! Placeholder catalog
//!
//! Hard-coded content standing in for a real data source. Pages pull their
//! slides and listings from here.

use std::collections::BTreeMap;

use crate::models::{MediaType, Movie, Slide};

const POSTER: &str = "assets/images/forrest_gump.jpg";

/// Featured slides for the home page carousel
pub fn featured_slides() -> Vec<Slide> {
    (1..=3)
        .map(|n| {
            Slide::new(format!("slider{}", n), POSTER)
                .with_caption(format!("Forrest Gump {}", n))
        })
        .collect()
}

fn genres(entries: &[(u32, &str)]) -> BTreeMap<u32, String> {
    entries
        .iter()
        .map(|(id, name)| (*id, (*name).to_string()))
        .collect()
}

/// Movies listed on the movies page
pub fn movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 3,
            media_type: MediaType::Movie,
            title: "The Dark Knight".into(),
            description: "The menace known as the Joker wreaks havoc on Gotham City.".into(),
            year: 2008,
            release_date: "2008-07-18".into(),
            runtime: 152,
            rating: 9.0,
            total_favorites: 0,
            is_favorite: false,
            total_comments: 0,
            genres: genres(&[(1, "Drama"), (2, "Crime"), (3, "Action"), (6, "Mystery")]),
            image: None,
        },
        Movie {
            id: 2,
            media_type: MediaType::Movie,
            title: "The Pursuit of Happyness".into(),
            description: "Based on a true story about a man named Christopher Gardner.".into(),
            year: 2006,
            release_date: "2006-12-15".into(),
            runtime: 117,
            rating: 8.0,
            total_favorites: 0,
            is_favorite: false,
            total_comments: 0,
            genres: genres(&[(1, "Drama")]),
            image: None,
        },
        Movie {
            id: 1,
            media_type: MediaType::Movie,
            title: "The Shawshank Redemption".into(),
            description: "Two imprisoned men bond over a number of years".into(),
            year: 1994,
            release_date: "1994-10-14".into(),
            runtime: 142,
            rating: 9.3,
            total_favorites: 0,
            is_favorite: false,
            total_comments: 0,
            genres: genres(&[(1, "Drama"), (2, "Crime"), (6, "Mystery")]),
            image: None,
        },
    ]
}

/// Series listed on the series page
///
/// Empty until series data exists; the page shows its empty state.
pub fn series() -> Vec<Movie> {
    Vec::new()
}

/// Movies carrying the given genre (case-insensitive)
pub fn movies_by_genre(genre: &str) -> Vec<Movie> {
    movies().into_iter().filter(|m| m.has_genre(genre)).collect()
}
