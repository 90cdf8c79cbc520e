//! FilmWise theme
//!
//! Color palette and style helpers for the TUI: dark chrome with an orange
//! brand accent. Widgets read their state-driven style hooks from here.

use ratatui::style::{Color, Modifier, Style};

/// FilmWise color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #111318 (near black)
    pub const BACKGROUND: Color = Color::Rgb(0x11, 0x13, 0x18);

    /// Primary: #ff8c1a (brand orange)
    pub const PRIMARY: Color = Color::Rgb(0xff, 0x8c, 0x1a);

    /// Secondary: #f5c518 (marquee gold)
    pub const SECONDARY: Color = Color::Rgb(0xf5, 0xc5, 0x18);

    /// Accent: #ffd166 (soft yellow)
    pub const ACCENT: Color = Color::Rgb(0xff, 0xd1, 0x66);

    /// Highlight: #ff5e3a (coral)
    pub const HIGHLIGHT: Color = Color::Rgb(0xff, 0x5e, 0x3a);

    /// Text: #f0f0f0 (white)
    pub const TEXT: Color = Color::Rgb(0xf0, 0xf0, 0xf0);

    /// Dim: #5a5f6b (muted)
    pub const DIM: Color = Color::Rgb(0x5a, 0x5f, 0x6b);

    /// Success: #4caf50 (green)
    pub const SUCCESS: Color = Color::Rgb(0x4c, 0xaf, 0x50);

    /// Warning: #ffb300 (amber)
    pub const WARNING: Color = Color::Rgb(0xff, 0xb3, 0x00);

    /// Error: #ff4d4d (red)
    pub const ERROR: Color = Color::Rgb(0xff, 0x4d, 0x4d);

    // ═══════════════════════════════════════════════════════════════════════
    // DERIVED COLORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Slightly lighter background for panels/inputs
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x1c, 0x1f, 0x26);

    /// Border color (dim orange)
    pub const BORDER: Color = Color::Rgb(0x7a, 0x4a, 0x14);

    /// Border color when focused
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    /// Highlighted text (inverted with primary color)
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item / active link
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default()
            .fg(Self::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Normal/unfocused border
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Focused border
    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // COMPONENT STYLES
    // ═══════════════════════════════════════════════════════════════════════

    /// First half of the brand name
    pub fn brand_primary() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .add_modifier(Modifier::BOLD)
    }

    /// Second half of the brand name
    pub fn brand_secondary() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Carousel caption while no transition is in flight
    pub fn slide_idle() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .add_modifier(Modifier::BOLD)
    }

    /// Carousel caption while transitioning (faded)
    pub fn slide_transitioning() -> Style {
        Style::default().fg(Self::DIM).add_modifier(Modifier::DIM)
    }

    /// Navigation list in the expanded drawer
    pub fn nav_expanded() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Navigation list inline in the header bar
    pub fn nav_collapsed() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    /// Search dismiss control
    pub fn dismiss() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for list items (selected/highlighted)
    pub fn list_item_selected() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for input fields
    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Favorite marker
    pub fn favorite() -> Style {
        Style::default().fg(Self::HIGHLIGHT)
    }

    /// Year/date metadata
    pub fn year() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Genre tags
    pub fn genre() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Runtime text
    pub fn duration() -> Style {
        Style::default().fg(Self::DIM)
    }
}
