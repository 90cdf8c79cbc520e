//! Page composition
//!
//! Lays out the header, the page for the current route, the footer and the
//! status bar, and draws the error popup on top.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use tokio::time::Instant;

use crate::app::{App, InputMode};
use crate::models::Route;
use crate::ui::carousel::CarouselView;
use crate::ui::disclosure::{HeaderLayout, HeaderView};
use crate::ui::Theme;

pub const FOOTER_TEXT: &str = "© 2023 FilmWise, Inc. All Rights Reserved.";

/// Main render function - dispatches to page renderers
pub fn render_app(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.set_width(area.width);

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BACKGROUND)), area);

    let header = HeaderLayout::compute(&app.disclosure, area.width, app.compact_width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header.height()), // Header
            Constraint::Min(1),                  // Page
            Constraint::Length(1),               // Footer
            Constraint::Length(1),               // Status bar
        ])
        .split(area);

    HeaderView::new().render(
        frame,
        chunks[0],
        &header,
        &app.search,
        app.route,
        app.input_mode == InputMode::Editing,
    );
    render_page(frame, chunks[1], app);
    render_footer(frame, chunks[2]);
    render_status_bar(frame, chunks[3], app);

    if let Some(ref error) = app.error {
        render_error_popup(frame, area, error);
    }
}

fn render_page(frame: &mut Frame, area: Rect, app: &mut App) {
    match app.route {
        Route::Home => render_home(frame, area, app),
        Route::Movies => app.movies.render(frame, area),
        Route::Series => app.series.render(frame, area),
        Route::Login => render_login(frame, area),
        Route::About => render_text_page(
            frame,
            area,
            "ABOUT",
            vec![
                Line::from(Span::styled("About FilmWise", Theme::title())),
                Line::default(),
                Line::from(Span::styled(
                    "FilmWise helps you keep track of the movies and series worth watching.",
                    Theme::text(),
                )),
            ],
        ),
        Route::Contact => render_text_page(
            frame,
            area,
            "CONTACT",
            vec![
                Line::from(Span::styled("Contact Us", Theme::title())),
                Line::default(),
                Line::from(Span::styled("Questions or feedback? We'd like to hear from you.", Theme::text())),
            ],
        ),
        Route::NotFound => render_not_found(frame, area),
    }
}

fn page_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(format!(" {} ", title), Theme::title()))
}

fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Greeting
            Constraint::Min(5),    // Carousel
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let greeting = Paragraph::new(Span::styled("Hello From Home Page!", Theme::accent()))
        .alignment(Alignment::Center);
    frame.render_widget(greeting, chunks[0]);

    if let Some(controller) = app.carousel() {
        CarouselView::new().render(frame, chunks[1], controller.carousel(), Instant::now());
    }

    let hints = Line::from(vec![
        Span::styled(" ←→ ", Theme::keybind()),
        Span::styled("slide  ", Theme::dimmed()),
        Span::styled(" SPACE ", Theme::keybind()),
        Span::styled("pause/play  ", Theme::dimmed()),
        Span::styled(" HOME/END ", Theme::keybind()),
        Span::styled("first/last", Theme::dimmed()),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[2]);
}

fn render_login(frame: &mut Frame, area: Rect) {
    let field = |label: &'static str| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), Theme::secondary()),
            Span::styled("[                    ]", Theme::input()),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Sign in to FilmWise", Theme::title())),
        Line::default(),
        field("Email"),
        Line::default(),
        field("Password"),
        Line::default(),
        Line::from(Span::styled("Accounts are not available yet.", Theme::dimmed())),
    ];

    let login = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(page_block("LOGIN"));
    frame.render_widget(login, area);
}

fn render_text_page(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let page = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(page_block(title));
    frame.render_widget(page, area);
}

fn render_not_found(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("404 Page Not Found!", Theme::error())),
        Line::default(),
        Line::from(vec![
            Span::styled("Page is not found in our server please Go Back to ", Theme::text()),
            Span::styled("Home", Theme::selected()),
            Span::styled(" (press 1)", Theme::keybind()),
        ]),
    ];
    render_text_page(frame, area, "NOT FOUND", lines);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(FOOTER_TEXT)
        .style(Theme::dimmed())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Render status bar at bottom
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::ACCENT),
        ),
    };

    let route_indicator = Span::styled(format!(" {} ", app.route.path()), Theme::dimmed());

    let message = match &app.status {
        Some(msg) => Span::styled(format!(" {} ", msg), Theme::success()),
        None => Span::raw(""),
    };

    let help = Span::styled(
        " q:quit  m:menu  /:search  tab:page  ESC:back ",
        Theme::dimmed(),
    );

    let status_line = Line::from(vec![
        mode_indicator,
        route_indicator,
        message,
        Span::raw(" │ "),
        help,
    ]);

    frame.render_widget(Paragraph::new(status_line).style(Theme::status_bar()), area);
}

/// Render error popup overlay
fn render_error_popup(frame: &mut Frame, area: Rect, error: &str) {
    let popup_width = 60.min(area.width.saturating_sub(4));
    let popup_height = 7;

    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height.min(area.height),
    };

    frame.render_widget(Clear, popup_area);

    let mut lines = vec![Line::default()];
    lines.extend(
        error
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Theme::error()))),
    );

    let error_block = Paragraph::new(lines)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Theme::error())
            .title(Span::styled(" ✗ ERROR ", Theme::error()))
            .style(Style::default().bg(Theme::BACKGROUND)),
    );

    frame.render_widget(error_block, popup_area);
}
