//! CLI Command Handlers
//!
//! Each handler takes CLI args and Output, returns ExitCode.

use serde::Serialize;
use std::path::PathBuf;

use crate::catalog;
use crate::cli::{ConfigCmd, ExitCode, MoviesCmd, Output, RoutesCmd, SlidesCmd};
use crate::config::Config;
use crate::models::{Movie, Route, Slide};

// =============================================================================
// Routes Command
// =============================================================================

/// One row of the route table
#[derive(Debug, Serialize)]
pub struct RouteEntry {
    pub name: &'static str,
    pub path: &'static str,
    /// Shown in the header navigation
    pub in_nav: bool,
}

pub fn route_table() -> Vec<RouteEntry> {
    Route::ALL
        .iter()
        .map(|r| RouteEntry {
            name: r.label(),
            path: r.path(),
            in_nav: Route::NAV.contains(r),
        })
        .collect()
}

pub fn routes_cmd(_cmd: RoutesCmd, output: &Output) -> ExitCode {
    let routes = route_table();
    let result = output.print(&routes, |routes| {
        routes
            .iter()
            .map(|r| {
                let marker = if r.in_nav { "*" } else { " " };
                format!("{} {:<10} {}", marker, r.name, r.path)
            })
            .collect::<Vec<_>>()
            .join("\n")
    });

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

// =============================================================================
// Movies Command
// =============================================================================

/// Catalog movies filtered by genre and truncated to `limit`
pub fn select_movies(genre: Option<&str>, limit: usize) -> Vec<Movie> {
    let mut movies = match genre {
        Some(genre) => catalog::movies_by_genre(genre),
        None => catalog::movies(),
    };
    movies.truncate(limit);
    movies
}

fn format_movie_line(movie: &Movie) -> String {
    format!(
        "{:>3}  {:<28} {}  ★ {:.1}  {:>7}  {}",
        movie.id,
        movie.title,
        movie.year,
        movie.rating,
        movie.format_runtime(),
        movie.genre_names()
    )
}

pub fn movies_cmd(cmd: MoviesCmd, output: &Output) -> ExitCode {
    if cmd.limit == 0 {
        return output.error("--limit must be at least 1", ExitCode::InvalidArgs);
    }

    let movies = select_movies(cmd.genre.as_deref(), cmd.limit);
    if movies.is_empty() {
        output.info("No Movie Found!");
    }

    let result = output.print(&movies, |movies| {
        movies
            .iter()
            .map(format_movie_line)
            .collect::<Vec<_>>()
            .join("\n")
    });

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

// =============================================================================
// Slides Command
// =============================================================================

pub fn slides_cmd(_cmd: SlidesCmd, output: &Output) -> ExitCode {
    let slides: Vec<Slide> = catalog::featured_slides();
    let result = output.print(&slides, |slides| {
        slides
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}  ({})", i + 1, s, s.image_ref))
            .collect::<Vec<_>>()
            .join("\n")
    });

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

// =============================================================================
// Config Command
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ConfigReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub written: bool,
    pub config: Config,
}

pub fn config_cmd(cmd: ConfigCmd, config: Config, path: Option<PathBuf>, output: &Output) -> ExitCode {
    let mut written = false;
    if cmd.init {
        let Some(target) = path.as_deref() else {
            return output.error("Could not determine config path", ExitCode::Error);
        };
        if let Err(e) = config.save_to(target) {
            return output.error(e.to_string(), ExitCode::Error);
        }
        output.info(format!("Wrote {}", target.display()));
        written = true;
    }

    let report = ConfigReport {
        path,
        written,
        config,
    };
    let result = output.print(&report, |report| {
        let location = report
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<none>".to_string());
        let body = toml::to_string_pretty(&report.config).unwrap_or_default();
        format!("# {}\n{}", location, body)
    });

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_output() -> Output {
        Output {
            json: true,
            quiet: true,
        }
    }

    #[test]
    fn test_route_table_covers_all_routes() {
        let table = route_table();
        assert_eq!(table.len(), Route::ALL.len());
        assert_eq!(table[0].path, "/");
        assert_eq!(table.iter().filter(|r| r.in_nav).count(), Route::NAV.len());
    }

    #[test]
    fn test_select_movies_filters_and_limits() {
        assert_eq!(select_movies(None, 20).len(), 3);
        assert_eq!(select_movies(None, 1).len(), 1);
        assert_eq!(select_movies(Some("crime"), 20).len(), 2);
        assert!(select_movies(Some("western"), 20).is_empty());
    }

    #[test]
    fn test_format_movie_line() {
        let movie = &catalog::movies()[0];
        let line = format_movie_line(movie);
        assert!(line.contains("The Dark Knight"));
        assert!(line.contains("2h 32m"));
    }

    #[test]
    fn test_movies_cmd_zero_limit_is_invalid() {
        let code = movies_cmd(
            MoviesCmd {
                genre: None,
                limit: 0,
            },
            &quiet_output(),
        );
        assert_eq!(code, ExitCode::InvalidArgs);
    }

    #[test]
    fn test_config_cmd_init_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filmwise").join("config.toml");

        let code = config_cmd(
            ConfigCmd { init: true },
            Config::default(),
            Some(path.clone()),
            &quiet_output(),
        );
        assert_eq!(code, ExitCode::Success);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_config_cmd_init_without_path_fails() {
        let code = config_cmd(ConfigCmd { init: true }, Config::default(), None, &quiet_output());
        assert_eq!(code, ExitCode::Error);
    }
}
