//! App state and core application logic
//!
//! Manages the current page, navigation history and input mode, and owns
//! the widgets each page needs: the header disclosure, the search form, the
//! home carousel and the catalog lists.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog;
use crate::config::{Config, ConfigError};
use crate::models::Route;
use crate::ui::autoplay::CarouselController;
use crate::ui::carousel::CarouselConfig;
use crate::ui::disclosure::{Disclosure, SearchForm, Viewport, DEFAULT_COMPACT_WIDTH};
use crate::ui::movies::MoviesView;

/// Rows moved by PageUp/PageDown in lists
const PAGE_SIZE: usize = 10;

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Options
// =============================================================================

/// Startup options resolved from config and command line
#[derive(Debug, Clone, PartialEq)]
pub struct AppOptions {
    pub start_route: Route,
    pub carousel: CarouselConfig,
    /// Width below which the header collapses
    pub compact_width: u16,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            start_route: Route::Home,
            carousel: CarouselConfig::default(),
            compact_width: DEFAULT_COMPACT_WIDTH,
        }
    }
}

impl AppOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            start_route: config.start_route(),
            carousel: config.carousel_config(),
            compact_width: config.layout.compact_width,
        }
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Current page
    pub route: Route,
    /// Navigation history stack
    pub nav_stack: Vec<Route>,
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Global error message
    pub error: Option<String>,
    /// Transient status bar message
    pub status: Option<String>,

    // Header
    pub disclosure: Disclosure,
    pub search: SearchForm,
    pub compact_width: u16,
    /// Width class of the last drawn frame
    pub viewport: Viewport,

    // Pages
    pub movies: MoviesView,
    pub series: MoviesView,
    carousel: Option<CarouselController>,
    carousel_config: CarouselConfig,
}

impl Default for App {
    fn default() -> Self {
        Self::with_options(AppOptions::default())
    }
}

impl App {
    /// Create a new App starting on the home page
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AppOptions) -> Self {
        let mut movies = MoviesView::new();
        movies.set_items(catalog::movies());
        let mut series = MoviesView::with_title("SERIES");
        series.set_items(catalog::series());

        let mut app = Self {
            route: options.start_route,
            nav_stack: Vec::new(),
            running: true,
            input_mode: InputMode::Normal,
            error: None,
            status: None,
            disclosure: Disclosure::new(),
            search: SearchForm::new(),
            compact_width: options.compact_width,
            viewport: Viewport::Compact,
            movies,
            series,
            carousel: None,
            carousel_config: options.carousel,
        };
        app.sync_carousel();
        app
    }

    /// Build the app for `config`. A config file that could not be used, or
    /// carousel timings that were replaced, are shown in the error popup.
    pub fn from_config(config: &Config, load_error: Option<ConfigError>) -> Self {
        let mut app = Self::with_options(AppOptions::from_config(config));
        let problem = match load_error {
            Some(e) => Some(format!("{}; using defaults", e)),
            None => config
                .validate()
                .err()
                .map(|e| format!("{}; using default timings", e)),
        };
        if let Some(msg) = problem {
            app.set_error(msg);
        }
        app
    }

    /// Home carousel, present only while the home page is shown
    pub fn carousel(&self) -> Option<&CarouselController> {
        self.carousel.as_ref()
    }

    /// Mount or unmount the home carousel to match the current route
    fn sync_carousel(&mut self) {
        match (self.route == Route::Home, self.carousel.is_some()) {
            (true, false) => {
                self.carousel = Some(CarouselController::mount(
                    catalog::featured_slides(),
                    self.carousel_config,
                ));
            }
            (false, true) => {
                self.carousel = None;
            }
            _ => {}
        }
    }

    /// Record the width of the frame being drawn
    pub fn set_width(&mut self, width: u16) {
        self.viewport = Viewport::from_width(width, self.compact_width);
    }

    /// Whether the header draws the disclosure flags at all
    fn overlays_visible(&self) -> bool {
        self.viewport == Viewport::Compact
    }

    /// Apply pending timer events. Returns true if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.carousel.as_mut().map_or(false, |c| c.pump())
    }

    /// Navigate to a new page, pushing current to stack
    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            log::debug!("navigate {} -> {}", self.route.path(), route.path());
            self.nav_stack.push(self.route);
            self.route = route;
            self.sync_carousel();
        }
        self.input_mode = InputMode::Normal;
    }

    /// Navigate to the page at `path`
    pub fn navigate_path(&mut self, path: &str) {
        self.navigate(Route::from_path(path));
    }

    /// Go back to previous page
    pub fn back(&mut self) -> bool {
        if self.input_mode == InputMode::Editing {
            self.input_mode = InputMode::Normal;
            return true;
        }

        if let Some(prev) = self.nav_stack.pop() {
            log::debug!("back {} -> {}", self.route.path(), prev.path());
            self.route = prev;
            self.sync_carousel();
            true
        } else {
            false
        }
    }

    /// Move to the next (or previous) page in the route table
    pub fn cycle_route(&mut self, forward: bool) {
        let routes = Route::ALL;
        let pos = routes.iter().position(|r| *r == self.route);
        let next = match (pos, forward) {
            (Some(i), true) => (i + 1) % routes.len(),
            (Some(i), false) => (i + routes.len() - 1) % routes.len(),
            (None, _) => 0,
        };
        self.navigate(routes[next]);
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    /// Open the search form and focus it
    pub fn focus_search(&mut self) {
        self.disclosure.open_search();
        self.input_mode = InputMode::Editing;
    }

    /// Close the search form
    pub fn dismiss_search(&mut self) {
        self.disclosure.close_search();
        self.input_mode = InputMode::Normal;
    }

    /// Record the query; searching itself happens elsewhere
    pub fn submit_search(&mut self) {
        let message = self
            .search
            .submit()
            .map(|q| format!("Search submitted: \"{}\"", q));
        if let Some(message) = message {
            log::info!("{}", message);
            self.set_status(message);
        }
        self.input_mode = InputMode::Normal;
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Clear error on any keypress
        self.clear_error();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    /// Handle keys in editing (text input) mode
    fn handle_editing_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.dismiss_search();
                true
            }
            KeyCode::Enter => {
                self.submit_search();
                true
            }
            KeyCode::Char(c) => {
                self.search.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.search.backspace();
                true
            }
            KeyCode::Delete => {
                self.search.delete();
                true
            }
            KeyCode::Left => {
                self.search.cursor_left();
                true
            }
            KeyCode::Right => {
                self.search.cursor_right();
                true
            }
            KeyCode::Home => {
                self.search.cursor_home();
                true
            }
            KeyCode::End => {
                self.search.cursor_end();
                true
            }
            _ => false,
        }
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return true;
            }
            KeyCode::Char('m') if self.overlays_visible() => {
                let open = self.disclosure.toggle_nav();
                log::debug!("nav drawer {}", if open { "opened" } else { "closed" });
                return true;
            }
            KeyCode::Char('/') => {
                self.focus_search();
                return true;
            }
            KeyCode::Esc => {
                // Innermost overlay first; a wide header draws neither
                if self.overlays_visible() {
                    if self.disclosure.search_open() {
                        self.dismiss_search();
                        return true;
                    }
                    if self.disclosure.nav_open() {
                        self.disclosure.toggle_nav();
                        return true;
                    }
                }
                return self.back();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as usize) - ('1' as usize);
                if let Some(route) = Route::NAV.get(idx) {
                    self.navigate(*route);
                    return true;
                }
            }
            KeyCode::Tab => {
                self.cycle_route(true);
                return true;
            }
            KeyCode::BackTab => {
                self.cycle_route(false);
                return true;
            }
            _ => {}
        }

        match self.route {
            Route::Home => self.handle_home_key(key),
            Route::Movies => Self::handle_list_key(&mut self.movies, key),
            Route::Series => Self::handle_list_key(&mut self.series, key),
            _ => false,
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> bool {
        let Some(carousel) = self.carousel.as_mut() else {
            return false;
        };

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                carousel.previous();
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                carousel.next();
                true
            }
            KeyCode::Home => {
                carousel.go_to(0);
                true
            }
            KeyCode::End => {
                let last = carousel.carousel().len().saturating_sub(1);
                carousel.go_to(last);
                true
            }
            KeyCode::Char(' ') | KeyCode::Char('p') => {
                let playing = carousel.toggle_autoplay();
                self.set_status(if playing { "Autoplay on" } else { "Autoplay paused" });
                true
            }
            _ => false,
        }
    }

    fn handle_list_key(view: &mut MoviesView, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => view.up(),
            KeyCode::Down | KeyCode::Char('j') => view.down(),
            KeyCode::PageUp => view.page_up(PAGE_SIZE),
            KeyCode::PageDown => view.page_down(PAGE_SIZE),
            KeyCode::Home => view.home(),
            KeyCode::End => view.end(),
            _ => return false,
        }
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
