//! Featured slide carousel
//!
//! `Carousel` is the state machine: a cyclic position over an immutable
//! slide list plus an `Idle`/`Transitioning` phase. It never reads the clock
//! itself; every operation that depends on time takes the instant at which
//! it happens, so the timer driver in [`crate::ui::autoplay`] and the tests
//! feed it explicitly.
//!
//! `CarouselView` renders the slide at the current position, faded while a
//! transition is in flight.

use std::time::Duration;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use thiserror::Error;
use tokio::time::Instant;

use crate::models::Slide;
use crate::ui::Theme;

/// Default time between autoplay advances
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

/// Default time a transition stays in flight
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(2000);

// =============================================================================
// Configuration
// =============================================================================

/// Errors from carousel configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselConfigError {
    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,
    #[error("transition duration must be greater than zero")]
    ZeroTransition,
}

/// Carousel timing and looping behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Time between autoplay advances
    pub interval: Duration,
    /// Time a transition is considered in progress
    pub transition: Duration,
    /// Start the autoplay loop on mount
    pub autoplay: bool,
    /// Wrap from the last slide back to the first
    pub infinite: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            transition: DEFAULT_TRANSITION,
            autoplay: true,
            infinite: true,
        }
    }
}

impl CarouselConfig {
    /// Build from millisecond timings, keeping the other defaults
    pub fn from_millis(interval_ms: u64, transition_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            transition: Duration::from_millis(transition_ms),
            ..Self::default()
        }
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn validate(&self) -> Result<(), CarouselConfigError> {
        if self.interval.is_zero() {
            return Err(CarouselConfigError::ZeroInterval);
        }
        if self.transition.is_zero() {
            return Err(CarouselConfigError::ZeroTransition);
        }
        Ok(())
    }
}

// =============================================================================
// State Machine
// =============================================================================

/// Transition sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Showing the current slide
    #[default]
    Idle,
    /// Advance committed, effect playing until `started_at + transition`
    Transitioning { target: usize, started_at: Instant },
}

impl Phase {
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Phase::Transitioning { .. })
    }
}

/// Carousel state over an ordered slide list
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Slide>,
    config: CarouselConfig,
    current: usize,
    phase: Phase,
    autoplaying: bool,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>, config: CarouselConfig) -> Self {
        Self {
            slides,
            autoplaying: config.autoplay,
            config,
            current: 0,
            phase: Phase::Idle,
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase.is_transitioning()
    }

    /// Index being transitioned to, if any
    pub fn target_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Transitioning { target, .. } => Some(target),
            Phase::Idle => None,
        }
    }

    pub fn target_slide(&self) -> Option<&Slide> {
        self.target_index().and_then(|i| self.slides.get(i))
    }

    /// A list of zero or one slides is rendered statically
    pub fn can_cycle(&self) -> bool {
        self.slides.len() > 1
    }

    /// Autoplay switched on (not paused), whether or not it can advance
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplaying
    }

    /// Whether the autoplay loop should be running.
    ///
    /// A non-wrapping carousel stops once it rests on the last slide.
    pub fn is_autoplaying(&self) -> bool {
        self.autoplaying
            && self.can_cycle()
            && (self.is_transitioning() || self.forward_of(self.current).is_some())
    }

    /// Instant at which the in-flight transition commits
    pub fn transition_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Transitioning { started_at, .. } => Some(started_at + self.config.transition),
            Phase::Idle => None,
        }
    }

    /// Fraction of the in-flight transition elapsed at `now` (0.0 - 1.0)
    pub fn transition_progress(&self, now: Instant) -> Option<f32> {
        match self.phase {
            Phase::Transitioning { started_at, .. } => {
                let total = self.config.transition.as_secs_f32();
                if total <= 0.0 {
                    return Some(1.0);
                }
                let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
                Some((elapsed / total).clamp(0.0, 1.0))
            }
            Phase::Idle => None,
        }
    }

    /// Commit the in-flight transition if its deadline has passed.
    /// Returns true if the position changed.
    pub fn settle(&mut self, now: Instant) -> bool {
        match (self.phase, self.transition_deadline()) {
            (Phase::Transitioning { target, .. }, Some(deadline)) if now >= deadline => {
                self.current = target;
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Autoplay timer fired at `now`.
    /// Returns the target index if a transition started.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        self.settle(now);
        if !self.is_autoplaying() {
            return None;
        }
        let target = self.forward_of(self.current)?;
        self.begin(target, now)
    }

    /// Advance one slide
    pub fn next(&mut self, now: Instant) -> Option<usize> {
        self.settle(now);
        let target = self.forward_of(self.current)?;
        self.begin(target, now)
    }

    /// Go back one slide
    pub fn previous(&mut self, now: Instant) -> Option<usize> {
        self.settle(now);
        let target = self.backward_of(self.current)?;
        self.begin(target, now)
    }

    /// Jump to `index`, reduced modulo the slide count
    pub fn go_to(&mut self, index: usize, now: Instant) -> Option<usize> {
        self.settle(now);
        if self.slides.is_empty() {
            return None;
        }
        let target = index % self.slides.len();
        self.begin(target, now)
    }

    /// Stop the autoplay loop. Returns true if it was running.
    pub fn pause(&mut self) -> bool {
        std::mem::replace(&mut self.autoplaying, false)
    }

    /// Restart the autoplay loop. Returns true if it was stopped.
    pub fn resume(&mut self) -> bool {
        !std::mem::replace(&mut self.autoplaying, true)
    }

    /// Swap in a new slide list.
    ///
    /// An identical list keeps the current position; anything else resets
    /// to the first slide with no transition in flight. Returns true on reset.
    pub fn replace_slides(&mut self, slides: Vec<Slide>) -> bool {
        if slides == self.slides {
            return false;
        }
        self.slides = slides;
        self.current = 0;
        self.phase = Phase::Idle;
        true
    }

    fn begin(&mut self, target: usize, now: Instant) -> Option<usize> {
        if !self.can_cycle() || self.is_transitioning() || target == self.current {
            return None;
        }
        self.phase = Phase::Transitioning {
            target,
            started_at: now,
        };
        Some(target)
    }

    fn forward_of(&self, index: usize) -> Option<usize> {
        let len = self.slides.len();
        if len == 0 {
            return None;
        }
        if index + 1 < len {
            Some(index + 1)
        } else if self.config.infinite {
            Some(0)
        } else {
            None
        }
    }

    fn backward_of(&self, index: usize) -> Option<usize> {
        let len = self.slides.len();
        if len == 0 {
            return None;
        }
        if index > 0 {
            Some(index - 1)
        } else if self.config.infinite {
            Some(len - 1)
        } else {
            None
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Carousel renderer
#[derive(Debug, Default)]
pub struct CarouselView {
    /// Title to display in the border
    pub title: String,
}

impl CarouselView {
    pub fn new() -> Self {
        Self {
            title: "FEATURED".to_string(),
        }
    }

    /// Slide shown at `now` and whether it is faded.
    ///
    /// The outgoing slide fades out over the first half of a transition and
    /// the incoming one fades in over the second half.
    pub fn visible_slide<'a>(carousel: &'a Carousel, now: Instant) -> Option<(&'a Slide, bool)> {
        match carousel.transition_progress(now) {
            Some(progress) if progress >= 0.5 => carousel.target_slide().map(|s| (s, true)),
            Some(_) => carousel.current_slide().map(|s| (s, true)),
            None => carousel.current_slide().map(|s| (s, false)),
        }
    }

    /// Position dots, e.g. "● ○ ○"
    pub fn indicator(carousel: &Carousel) -> Line<'static> {
        let target = carousel.target_index();
        let spans: Vec<Span> = (0..carousel.len())
            .map(|i| {
                if i == carousel.current_index() {
                    Span::styled("● ", Theme::accent())
                } else if Some(i) == target {
                    Span::styled("◉ ", Theme::secondary())
                } else {
                    Span::styled("○ ", Theme::dimmed())
                }
            })
            .collect();
        Line::from(spans)
    }

    /// Render the carousel at `now`
    pub fn render(&self, frame: &mut Frame, area: Rect, carousel: &Carousel, now: Instant) {
        let mut title = format!(" {} ", self.title);
        if !carousel.is_empty() {
            title = format!(
                " {} ({}/{}) ",
                self.title,
                carousel.current_index() + 1,
                carousel.len()
            );
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border())
            .title(Span::styled(title, Theme::title()));

        let Some((slide, faded)) = Self::visible_slide(carousel, now) else {
            let empty = Paragraph::new("No content to display")
                .style(Theme::dimmed())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        };

        let slide_style = if faded {
            Theme::slide_transitioning()
        } else {
            Theme::slide_idle()
        };

        let status = if carousel.can_cycle() && !carousel.autoplay_enabled() {
            Span::styled("❚❚ paused", Theme::dimmed())
        } else {
            Span::raw("")
        };

        let content = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(format!("▣ {}", slide.image_ref), Theme::dimmed())),
            Line::from(""),
            Line::from(Span::styled(slide.label().to_string(), slide_style)),
            Line::from(""),
            Self::indicator(carousel),
            Line::from(status),
        ])
        .alignment(Alignment::Center)
        .block(block);

        frame.render_widget(content, area);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("s{}", i), format!("img{}.jpg", i)))
            .collect()
    }

    fn carousel(n: usize) -> Carousel {
        Carousel::new(slides(n), CarouselConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let c = carousel(3);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.is_autoplaying());
        assert_eq!(c.current_slide().unwrap().id, "s0");
    }

    #[test]
    fn test_tick_then_settle_advances_once() {
        let t0 = Instant::now();
        let mut c = carousel(3);

        assert_eq!(c.tick(t0 + ms(2000)), Some(1));
        assert!(c.is_transitioning());
        assert_eq!(c.current_index(), 0);

        // Not yet
        assert!(!c.settle(t0 + ms(3999)));
        assert_eq!(c.current_index(), 0);

        assert!(c.settle(t0 + ms(4000)));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_tick_while_transitioning_is_ignored() {
        let t0 = Instant::now();
        let mut c = Carousel::new(slides(3), CarouselConfig::from_millis(100, 2000));

        assert_eq!(c.tick(t0), Some(1));
        assert_eq!(c.tick(t0 + ms(100)), None);
        assert_eq!(c.tick(t0 + ms(200)), None);
        assert_eq!(c.target_index(), Some(1));

        // Deadline reached: tick commits first, then starts the next one
        assert_eq!(c.tick(t0 + ms(2000)), Some(2));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let t0 = Instant::now();
        let mut c = carousel(4);
        let mut now = t0;
        for _ in 0..4 {
            now += ms(2000);
            assert!(c.tick(now).is_some());
            now += ms(2000);
            assert!(c.settle(now));
        }
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_single_and_empty_never_transition() {
        let t0 = Instant::now();
        for n in [0, 1] {
            let mut c = carousel(n);
            assert!(!c.is_autoplaying());
            for step in 1..50u64 {
                let now = t0 + ms(step * 1000);
                assert_eq!(c.tick(now), None);
                assert_eq!(c.next(now), None);
                assert_eq!(c.previous(now), None);
                assert_eq!(c.go_to(step as usize, now), None);
                assert!(!c.settle(now));
            }
            assert_eq!(c.current_index(), 0);
            assert_eq!(c.phase(), Phase::Idle);
        }
    }

    #[test]
    fn test_manual_navigation_ignored_while_transitioning() {
        let t0 = Instant::now();
        let mut c = carousel(3);

        assert_eq!(c.next(t0), Some(1));
        assert_eq!(c.next(t0 + ms(10)), None);
        assert_eq!(c.previous(t0 + ms(20)), None);
        assert_eq!(c.go_to(2, t0 + ms(30)), None);
        assert_eq!(c.target_index(), Some(1));

        // Once the deadline passes the next call goes through
        assert_eq!(c.previous(t0 + ms(2000)), Some(0));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_previous_wraps() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        assert_eq!(c.previous(t0), Some(2));
        c.settle(t0 + ms(2000));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_go_to_reduces_modulo() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        assert_eq!(c.go_to(7, t0), Some(1));
        c.settle(t0 + ms(2000));
        assert_eq!(c.current_index(), 1);

        // Same slide is a no-op
        assert_eq!(c.go_to(4, t0 + ms(2001)), None);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn test_finite_carousel_stops_at_edges() {
        let t0 = Instant::now();
        let mut c = Carousel::new(slides(2), CarouselConfig::default().with_infinite(false));
        assert_eq!(c.previous(t0), None);
        assert_eq!(c.next(t0), Some(1));
        c.settle(t0 + ms(2000));
        assert_eq!(c.next(t0 + ms(2001)), None);
        assert_eq!(c.tick(t0 + ms(4000)), None);
    }

    #[test]
    fn test_finite_autoplay_ends_on_last_slide() {
        let t0 = Instant::now();
        let mut c = Carousel::new(slides(2), CarouselConfig::default().with_infinite(false));
        assert!(c.is_autoplaying());

        assert_eq!(c.tick(t0 + ms(2000)), Some(1));
        // Still running until the last transition lands
        assert!(c.is_autoplaying());
        c.settle(t0 + ms(4000));
        assert!(!c.is_autoplaying());
        assert!(c.autoplay_enabled());

        // Stepping back makes room to advance again
        assert_eq!(c.previous(t0 + ms(4000)), Some(0));
        c.settle(t0 + ms(6000));
        assert!(c.is_autoplaying());
    }

    #[test]
    fn test_pause_and_resume() {
        let t0 = Instant::now();
        let mut c = carousel(3);

        assert!(c.pause());
        assert!(!c.pause());
        assert!(!c.is_autoplaying());
        assert_eq!(c.tick(t0), None);

        // Manual navigation still works while paused
        assert_eq!(c.next(t0), Some(1));

        assert!(c.resume());
        assert!(!c.resume());
        assert!(c.is_autoplaying());
    }

    #[test]
    fn test_autoplay_disabled_by_config() {
        let c = Carousel::new(slides(3), CarouselConfig::default().with_autoplay(false));
        assert!(!c.is_autoplaying());
    }

    #[test]
    fn test_replace_slides_resets() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        c.next(t0);
        c.settle(t0 + ms(2000));
        c.next(t0 + ms(2000));
        assert!(c.is_transitioning());

        assert!(c.replace_slides(slides(5)));
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.len(), 5);
    }

    #[test]
    fn test_replace_with_identical_slides_keeps_position() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        c.next(t0);
        c.settle(t0 + ms(2000));

        assert!(!c.replace_slides(slides(3)));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_reordered_slides_reset() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        c.next(t0);
        c.settle(t0 + ms(2000));

        let mut reordered = slides(3);
        reordered.reverse();
        assert!(c.replace_slides(reordered));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_transition_progress() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        assert_eq!(c.transition_progress(t0), None);

        c.next(t0);
        assert_eq!(c.transition_progress(t0), Some(0.0));
        let half = c.transition_progress(t0 + ms(1000)).unwrap();
        assert!((half - 0.5).abs() < 0.001);
        assert_eq!(c.transition_progress(t0 + ms(5000)), Some(1.0));
    }

    #[test]
    fn test_visible_slide_crossfade() {
        let t0 = Instant::now();
        let mut c = carousel(3);

        let (slide, faded) = CarouselView::visible_slide(&c, t0).unwrap();
        assert_eq!(slide.id, "s0");
        assert!(!faded);

        c.next(t0);
        let (slide, faded) = CarouselView::visible_slide(&c, t0 + ms(500)).unwrap();
        assert_eq!(slide.id, "s0");
        assert!(faded);

        let (slide, faded) = CarouselView::visible_slide(&c, t0 + ms(1500)).unwrap();
        assert_eq!(slide.id, "s1");
        assert!(faded);
    }

    #[test]
    fn test_config_validate() {
        assert!(CarouselConfig::default().validate().is_ok());
        assert_eq!(
            CarouselConfig::from_millis(0, 10).validate(),
            Err(CarouselConfigError::ZeroInterval)
        );
        assert_eq!(
            CarouselConfig::from_millis(10, 0).validate(),
            Err(CarouselConfigError::ZeroTransition)
        );
    }
}
