//! Movie list view
//!
//! Selectable list of catalog entries for the movies and series pages,
//! with a detail pane for the highlighted title.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::models::Movie;
use crate::ui::Theme;

/// Text shown when the list has nothing to display
pub const EMPTY_MESSAGE: &str = "No Movie Found!";

/// Movie list view state
#[derive(Debug, Default)]
pub struct MoviesView {
    /// Entries to display
    pub items: Vec<Movie>,
    /// Currently selected index
    pub selected: usize,
    /// Scroll offset for viewport
    pub offset: usize,
    /// Title to display in the border
    pub title: String,
}

impl MoviesView {
    pub fn new() -> Self {
        Self::with_title("MOVIES")
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Replace the entries, resetting selection
    pub fn set_items(&mut self, items: Vec<Movie>) {
        self.items = items;
        self.selected = 0;
        self.offset = 0;
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset = self.selected;
            }
        }
    }

    pub fn down(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }

    pub fn page_down(&mut self, page_size: usize) {
        let max_idx = self.items.len().saturating_sub(1);
        self.selected = (self.selected + page_size).min(max_idx);
    }

    pub fn home(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn end(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// Currently highlighted entry
    pub fn current(&self) -> Option<&Movie> {
        self.items.get(self.selected)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    fn adjust_offset(&mut self, visible_height: usize) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible_height {
            self.offset = self.selected.saturating_sub(visible_height.saturating_sub(1));
        }
    }

    /// Render list and detail pane
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.items.is_empty() {
            self.render_empty(frame, area);
            return;
        }

        let chunks = if area.width >= 70 {
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(area)
        } else {
            Layout::vertical([Constraint::Min(5), Constraint::Length(7)]).split(area)
        };

        self.render_list(frame, chunks[0]);
        self.render_detail(frame, chunks[1]);
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let visible_height = area.height.saturating_sub(2) as usize;
        self.adjust_offset(visible_height);

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(visible_height)
            .map(|(i, movie)| self.render_item(i, movie))
            .collect();

        let title = format!(" {} ({}/{}) ", self.title, self.selected + 1, self.items.len());

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border_focused())
                    .border_type(BorderType::Rounded)
                    .title(Span::styled(title, Theme::title())),
            )
            .style(Theme::text());

        frame.render_widget(list, area);
    }

    /// Format: ▸ Title (Year)        ★ 9.0  2h 32m
    fn render_item(&self, index: usize, movie: &Movie) -> ListItem<'static> {
        let is_selected = index == self.selected;
        let marker = if is_selected { "▸ " } else { "  " };
        let favorite = if movie.is_favorite { " ♥" } else { "" };

        let line = Line::from(vec![
            Span::styled(
                marker.to_string(),
                if is_selected { Theme::accent() } else { Theme::dimmed() },
            ),
            Span::styled(
                movie.title.clone(),
                if is_selected { Theme::list_item_selected() } else { Theme::text() },
            ),
            Span::styled(
                format!(" ({})", movie.year),
                if is_selected { Theme::accent() } else { Theme::year() },
            ),
            Span::styled(favorite.to_string(), Theme::favorite()),
            Span::raw(" "),
            Span::styled(
                format!("★ {:.1}", movie.rating),
                Self::rating_style(movie.rating, is_selected),
            ),
            Span::raw("  "),
            Span::styled(movie.format_runtime(), Theme::duration()),
        ]);

        ListItem::new(line)
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let Some(movie) = self.current() else {
            return;
        };

        let lines = vec![
            Line::from(Span::styled(movie.title.clone(), Theme::title())),
            Line::from(vec![
                Span::styled(movie.release_date.clone(), Theme::year()),
                Span::styled(" • ", Theme::dimmed()),
                Span::styled(movie.format_runtime(), Theme::duration()),
                Span::styled(" • ", Theme::dimmed()),
                Span::styled(movie.media_type.to_string(), Theme::secondary()),
            ]),
            Line::from(Span::styled(movie.genre_names(), Theme::genre())),
            Line::default(),
            Line::from(Span::styled(movie.description.clone(), Theme::text())),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("♥ {}", movie.total_favorites), Theme::favorite()),
                Span::raw("   "),
                Span::styled(format!("💬 {}", movie.total_comments), Theme::dimmed()),
            ]),
        ];

        let detail = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border())
                    .border_type(BorderType::Rounded)
                    .title(Span::styled(" DETAILS ", Theme::title())),
            );

        frame.render_widget(detail, area);
    }

    fn rating_style(rating: f32, is_selected: bool) -> Style {
        if is_selected {
            Theme::accent()
        } else if rating >= 7.5 {
            Theme::success()
        } else if rating >= 6.0 {
            Theme::warning()
        } else if rating >= 4.0 {
            Theme::dimmed()
        } else {
            Theme::error()
        }
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .style(Theme::dimmed())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border())
                    .border_type(BorderType::Rounded)
                    .title(Span::styled(format!(" {} ", self.title), Theme::title())),
            );

        frame.render_widget(empty, area);
    }
}
