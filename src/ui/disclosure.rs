//! Header disclosure control
//!
//! Two independent visibility flags behind their own affordances: the menu
//! button toggles the navigation drawer, the search icon opens an inline
//! search form that is closed with its own dismiss control. On wide
//! terminals both regions are always shown and the flags have no visible
//! effect.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::models::Route;
use crate::ui::Theme;

/// Default terminal width below which the compact header is used
pub const DEFAULT_COMPACT_WIDTH: u16 = 80;

/// Menu glyph while the drawer is closed
pub const MENU_OPEN_GLYPH: &str = "☰";
/// Menu glyph while the drawer is open
pub const MENU_CLOSE_GLYPH: &str = "✕";
/// Search affordance glyph
pub const SEARCH_GLYPH: &str = "⌕";

/// Header height without any disclosed region
const BAR_HEIGHT: u16 = 3;

// =============================================================================
// Disclosure State
// =============================================================================

/// Visibility of the navigation drawer and the search overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    nav_open: bool,
    search_open: bool,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nav_open(&self) -> bool {
        self.nav_open
    }

    pub fn search_open(&self) -> bool {
        self.search_open
    }

    /// Flip the navigation drawer. Returns the new state.
    pub fn toggle_nav(&mut self) -> bool {
        self.nav_open = !self.nav_open;
        self.nav_open
    }

    pub fn open_search(&mut self) {
        self.search_open = true;
    }

    pub fn close_search(&mut self) {
        self.search_open = false;
    }
}

// =============================================================================
// Search Form
// =============================================================================

/// Text input behind the search affordance
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    /// Current query
    pub query: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Last submitted query
    pub submitted: Option<String>,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.query
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.query.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.query.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index(self.cursor);
            self.query.remove(idx);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    /// Record the query as submitted. Blank queries are ignored.
    ///
    /// Nothing is executed here; the caller decides what a submission does.
    pub fn submit(&mut self) -> Option<&str> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.submitted = Some(trimmed.to_string());
        self.submitted.as_deref()
    }

    /// Query split at the cursor, for drawing the caret
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.query.split_at(self.byte_index(self.cursor))
    }
}

// =============================================================================
// Layout Mapping
// =============================================================================

/// Terminal width class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Compact,
    Wide,
}

impl Viewport {
    pub fn from_width(width: u16, compact_width: u16) -> Self {
        if width < compact_width {
            Viewport::Compact
        } else {
            Viewport::Wide
        }
    }
}

/// How the navigation list is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPresentation {
    /// Not drawn (compact, drawer closed)
    Hidden,
    /// Inline in the header bar
    Row,
    /// Expanded drawer, one link per line
    Stacked,
}

/// How the search affordance is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPresentation {
    /// Icon only (compact, overlay closed)
    Icon,
    /// Overlay form with a dismiss control (compact, overlay open)
    InlineForm,
    /// Always-visible form (wide)
    Form,
}

/// Presentation of the header for a given disclosure state and width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    pub viewport: Viewport,
    /// Menu affordance glyph; None when the menu button is not shown
    pub menu_glyph: Option<&'static str>,
    pub nav: NavPresentation,
    pub search: SearchPresentation,
}

impl HeaderLayout {
    pub fn compute(disclosure: &Disclosure, width: u16, compact_width: u16) -> Self {
        match Viewport::from_width(width, compact_width) {
            Viewport::Wide => Self {
                viewport: Viewport::Wide,
                menu_glyph: None,
                nav: NavPresentation::Row,
                search: SearchPresentation::Form,
            },
            Viewport::Compact => Self {
                viewport: Viewport::Compact,
                menu_glyph: Some(if disclosure.nav_open() {
                    MENU_CLOSE_GLYPH
                } else {
                    MENU_OPEN_GLYPH
                }),
                nav: if disclosure.nav_open() {
                    NavPresentation::Stacked
                } else {
                    NavPresentation::Hidden
                },
                search: if disclosure.search_open() {
                    SearchPresentation::InlineForm
                } else {
                    SearchPresentation::Icon
                },
            },
        }
    }

    /// Rows the header needs
    pub fn height(&self) -> u16 {
        let mut height = BAR_HEIGHT;
        if self.nav == NavPresentation::Stacked {
            height += Route::NAV.len() as u16 + 2;
        }
        if self.search == SearchPresentation::InlineForm {
            height += BAR_HEIGHT;
        }
        height
    }

    /// Style hook for the navigation list
    pub fn nav_style(&self) -> Style {
        match self.nav {
            NavPresentation::Stacked => Theme::nav_expanded(),
            NavPresentation::Row | NavPresentation::Hidden => Theme::nav_collapsed(),
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Header renderer
#[derive(Debug, Default)]
pub struct HeaderView;

impl HeaderView {
    pub fn new() -> Self {
        Self
    }

    /// Render the header for `layout` into `area`
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        layout: &HeaderLayout,
        form: &SearchForm,
        active: Route,
        editing: bool,
    ) {
        let mut constraints = vec![Constraint::Length(BAR_HEIGHT)];
        if layout.nav == NavPresentation::Stacked {
            constraints.push(Constraint::Length(Route::NAV.len() as u16 + 2));
        }
        if layout.search == SearchPresentation::InlineForm {
            constraints.push(Constraint::Length(BAR_HEIGHT));
        }
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        match layout.viewport {
            Viewport::Wide => self.render_wide_bar(frame, rows[0], layout, form, active, editing),
            Viewport::Compact => self.render_compact_bar(frame, rows[0], layout),
        }

        let mut next_row = 1;
        if layout.nav == NavPresentation::Stacked {
            self.render_drawer(frame, rows[next_row], layout, active);
            next_row += 1;
        }
        if layout.search == SearchPresentation::InlineForm {
            self.render_inline_search(frame, rows[next_row], form, editing);
        }
    }

    fn brand() -> Paragraph<'static> {
        Paragraph::new(Line::from(vec![
            Span::styled("Film", Theme::brand_primary()),
            Span::styled("Wise", Theme::brand_secondary()),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border()),
        )
    }

    /// Navigation links with hotkeys, e.g. "1 Home  2 Movies"
    pub fn nav_spans(active: Route) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, route) in Route::NAV.iter().enumerate() {
            spans.push(Span::styled(format!("{} ", i + 1), Theme::keybind()));
            let style = if *route == active {
                Theme::selected()
            } else {
                Theme::text()
            };
            spans.push(Span::styled(route.label(), style));
            spans.push(Span::raw("  "));
        }
        spans
    }

    fn render_wide_bar(
        &self,
        frame: &mut Frame,
        area: Rect,
        layout: &HeaderLayout,
        form: &SearchForm,
        active: Route,
        editing: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(14), // Brand
                Constraint::Min(1),     // Nav row
                Constraint::Length(34), // Search form
            ])
            .split(area);

        frame.render_widget(Self::brand(), chunks[0]);

        let nav = Paragraph::new(Line::from(Self::nav_spans(active)))
            .style(layout.nav_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Theme::border()),
            );
        frame.render_widget(nav, chunks[1]);

        frame.render_widget(Self::search_input(form, editing, None), chunks[2]);
    }

    fn render_compact_bar(&self, frame: &mut Frame, area: Rect, layout: &HeaderLayout) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(5),  // Menu button
                Constraint::Length(14), // Brand
                Constraint::Min(0),
                Constraint::Length(5), // Search icon
            ])
            .split(area);

        let bordered = || {
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border())
        };

        if let Some(glyph) = layout.menu_glyph {
            let menu = Paragraph::new(Span::styled(glyph, Theme::accent()))
                .alignment(Alignment::Center)
                .block(bordered());
            frame.render_widget(menu, chunks[0]);
        }

        frame.render_widget(Self::brand(), chunks[1]);

        if layout.search == SearchPresentation::Icon {
            let icon = Paragraph::new(Span::styled(SEARCH_GLYPH, Theme::accent()))
                .alignment(Alignment::Center)
                .block(bordered());
            frame.render_widget(icon, chunks[3]);
        }
    }

    fn render_drawer(&self, frame: &mut Frame, area: Rect, layout: &HeaderLayout, active: Route) {
        let lines: Vec<Line> = Route::NAV
            .iter()
            .enumerate()
            .map(|(i, route)| {
                let is_active = *route == active;
                Line::from(vec![
                    Span::styled(if is_active { "▸ " } else { "  " }, Theme::accent()),
                    Span::styled(format!("{} ", i + 1), Theme::keybind()),
                    Span::styled(
                        route.label(),
                        if is_active {
                            Theme::selected()
                        } else {
                            Theme::text()
                        },
                    ),
                ])
            })
            .collect();

        let drawer = Paragraph::new(lines).style(layout.nav_style()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border_focused())
                .title(Span::styled(" MENU ", Theme::title())),
        );
        frame.render_widget(drawer, area);
    }

    fn render_inline_search(&self, frame: &mut Frame, area: Rect, form: &SearchForm, editing: bool) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(5), Constraint::Min(1)])
            .split(area);

        let dismiss = Paragraph::new(Span::styled("X", Theme::dismiss()))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Theme::border()),
            );
        frame.render_widget(dismiss, chunks[0]);
        frame.render_widget(
            Self::search_input(form, editing, Some(" ESC:close ")),
            chunks[1],
        );
    }

    fn search_input<'a>(
        form: &'a SearchForm,
        editing: bool,
        hint: Option<&'static str>,
    ) -> Paragraph<'a> {
        let text = if editing {
            let (before, after) = form.split_at_cursor();
            format!("{} {}│{}", SEARCH_GLYPH, before, after)
        } else if form.query.is_empty() {
            format!("{} Search movies...", SEARCH_GLYPH)
        } else {
            format!("{} {}", SEARCH_GLYPH, form.query)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if editing {
                Theme::border_focused()
            } else {
                Theme::border()
            })
            .title(Span::styled(" SEARCH ", Theme::title()));
        if let Some(hint) = hint {
            block = block.title_bottom(Span::styled(hint, Theme::dimmed()));
        }

        Paragraph::new(text)
            .style(if editing {
                Theme::input().fg(Theme::PRIMARY)
            } else {
                Theme::input()
            })
            .block(block)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclosure_defaults_closed() {
        let d = Disclosure::new();
        assert!(!d.nav_open());
        assert!(!d.search_open());
    }

    #[test]
    fn test_toggle_nav_is_involution() {
        let mut d = Disclosure::new();
        assert!(d.toggle_nav());
        assert!(!d.toggle_nav());
        assert_eq!(d, Disclosure::new());
    }

    #[test]
    fn test_search_open_close() {
        let mut d = Disclosure::new();
        d.close_search();
        assert!(!d.search_open());

        d.open_search();
        d.open_search();
        assert!(d.search_open());

        d.close_search();
        assert!(!d.search_open());
    }

    #[test]
    fn test_flags_are_independent() {
        let mut d = Disclosure::new();
        d.toggle_nav();
        d.open_search();
        assert!(d.nav_open() && d.search_open());

        d.close_search();
        assert!(d.nav_open());

        d.open_search();
        d.toggle_nav();
        assert!(d.search_open());
    }

    #[test]
    fn test_layout_wide_ignores_flags() {
        let mut d = Disclosure::new();
        let closed = HeaderLayout::compute(&d, 120, DEFAULT_COMPACT_WIDTH);
        d.toggle_nav();
        d.open_search();
        let open = HeaderLayout::compute(&d, 120, DEFAULT_COMPACT_WIDTH);

        assert_eq!(closed, open);
        assert_eq!(open.nav, NavPresentation::Row);
        assert_eq!(open.search, SearchPresentation::Form);
        assert_eq!(open.menu_glyph, None);
        assert_eq!(open.height(), 3);
    }

    #[test]
    fn test_layout_compact_follows_flags() {
        let mut d = Disclosure::new();
        let layout = HeaderLayout::compute(&d, 60, DEFAULT_COMPACT_WIDTH);
        assert_eq!(layout.viewport, Viewport::Compact);
        assert_eq!(layout.menu_glyph, Some(MENU_OPEN_GLYPH));
        assert_eq!(layout.nav, NavPresentation::Hidden);
        assert_eq!(layout.search, SearchPresentation::Icon);
        assert_eq!(layout.height(), 3);

        d.toggle_nav();
        let layout = HeaderLayout::compute(&d, 60, DEFAULT_COMPACT_WIDTH);
        assert_eq!(layout.menu_glyph, Some(MENU_CLOSE_GLYPH));
        assert_eq!(layout.nav, NavPresentation::Stacked);
        assert_eq!(layout.height(), 3 + 6);

        d.open_search();
        let layout = HeaderLayout::compute(&d, 60, DEFAULT_COMPACT_WIDTH);
        assert_eq!(layout.search, SearchPresentation::InlineForm);
        assert_eq!(layout.height(), 3 + 6 + 3);
    }

    #[test]
    fn test_viewport_breakpoint() {
        assert_eq!(Viewport::from_width(79, 80), Viewport::Compact);
        assert_eq!(Viewport::from_width(80, 80), Viewport::Wide);
    }

    #[test]
    fn test_nav_style_hook() {
        let mut d = Disclosure::new();
        d.toggle_nav();
        let layout = HeaderLayout::compute(&d, 40, DEFAULT_COMPACT_WIDTH);
        assert_eq!(layout.nav_style(), Theme::nav_expanded());

        let layout = HeaderLayout::compute(&d, 100, DEFAULT_COMPACT_WIDTH);
        assert_eq!(layout.nav_style(), Theme::nav_collapsed());
    }

    #[test]
    fn test_search_form_editing() {
        let mut form = SearchForm::new();
        for c in "hello".chars() {
            form.insert(c);
        }
        assert_eq!(form.query, "hello");
        assert_eq!(form.cursor, 5);

        form.cursor_left();
        form.cursor_left();
        form.insert('X');
        assert_eq!(form.query, "helXlo");

        form.backspace();
        assert_eq!(form.query, "hello");

        form.cursor_home();
        form.delete();
        assert_eq!(form.query, "ello");

        form.cursor_end();
        assert_eq!(form.cursor, 4);
    }

    #[test]
    fn test_search_form_multibyte() {
        let mut form = SearchForm::new();
        for c in "Amélie".chars() {
            form.insert(c);
        }
        form.cursor_left();
        form.cursor_left();
        form.cursor_left();
        assert_eq!(form.split_at_cursor(), ("Amé", "lie"));

        form.backspace();
        assert_eq!(form.query, "Amlie");
    }

    #[test]
    fn test_search_form_submit() {
        let mut form = SearchForm::new();
        assert_eq!(form.submit(), None);

        form.query = "  gump ".into();
        assert_eq!(form.submit(), Some("gump"));
        assert_eq!(form.submitted.as_deref(), Some("gump"));
    }
}
