//! Carousel autoplay driver
//!
//! Binds a [`Carousel`] to the two timers it needs: a periodic autoplay tick
//! and a one-shot settle at the end of each transition. Timers run as tokio
//! tasks that only send [`TimerEvent`]s; the owning [`CarouselController`]
//! applies them on the UI loop when it is pumped.
//!
//! Every event carries the generation of the slide list it was scheduled
//! for. Replacing the slides bumps the generation, so anything already queued
//! for the old list is dropped instead of applied.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::models::Slide;
use crate::ui::carousel::{Carousel, CarouselConfig, Phase};

/// Shortest period the autoplay timer accepts
const MIN_PERIOD: Duration = Duration::from_millis(1);

// =============================================================================
// Timer Tasks
// =============================================================================

/// Message sent from a timer task to its controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Autoplay interval elapsed
    Tick { generation: u64, at: Instant },
    /// Transition deadline reached
    Settle { generation: u64, at: Instant },
}

impl TimerEvent {
    pub fn generation(&self) -> u64 {
        match self {
            TimerEvent::Tick { generation, .. } | TimerEvent::Settle { generation, .. } => {
                *generation
            }
        }
    }
}

/// Owned handle to a spawned timer task. Dropping it aborts the task.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Send `Tick` every `period`, first one a full period from now.
    ///
    /// Returns None when called outside a tokio runtime.
    pub fn every(
        period: Duration,
        generation: u64,
        tx: UnboundedSender<TimerEvent>,
    ) -> Option<Self> {
        let runtime = Self::runtime()?;
        let period = period.max(MIN_PERIOD);
        let start = Instant::now() + period;

        let task = runtime.spawn(async move {
            let mut interval = time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                let at = interval.tick().await;
                if tx.send(TimerEvent::Tick { generation, at }).is_err() {
                    break;
                }
            }
        });

        Some(Self { task })
    }

    /// Send a single `Settle` at `deadline`.
    ///
    /// Returns None when called outside a tokio runtime.
    pub fn at(
        deadline: Instant,
        generation: u64,
        tx: UnboundedSender<TimerEvent>,
    ) -> Option<Self> {
        let runtime = Self::runtime()?;
        let task = runtime.spawn(async move {
            time::sleep_until(deadline).await;
            let _ = tx.send(TimerEvent::Settle {
                generation,
                at: deadline,
            });
        });
        Some(Self { task })
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    fn runtime() -> Option<Handle> {
        match Handle::try_current() {
            Ok(handle) => Some(handle),
            Err(_) => {
                log::warn!("no tokio runtime available; carousel timers disabled");
                None
            }
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

// =============================================================================
// Controller
// =============================================================================

/// A mounted carousel and the timers scoped to it
#[derive(Debug)]
pub struct CarouselController {
    carousel: Carousel,
    generation: u64,
    tx: UnboundedSender<TimerEvent>,
    rx: UnboundedReceiver<TimerEvent>,
    autoplay: Option<TimerHandle>,
    settle: Option<TimerHandle>,
}

impl CarouselController {
    /// Mount a carousel; starts the autoplay timer when it can cycle
    pub fn mount(slides: Vec<Slide>, config: CarouselConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut controller = Self {
            carousel: Carousel::new(slides, config),
            generation: 0,
            tx,
            rx,
            autoplay: None,
            settle: None,
        };
        controller.sync_autoplay();
        log::debug!(
            "carousel mounted: {} slides, autoplay {}",
            controller.carousel.len(),
            controller.autoplay.is_some()
        );
        controller
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the autoplay timer task is alive
    pub fn is_timer_running(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Whether a settle timer is scheduled for the in-flight transition
    pub fn has_pending_settle(&self) -> bool {
        self.settle.is_some()
    }

    /// Apply every queued timer event. Returns true if the carousel changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.rx.try_recv() {
            changed |= self.handle(event);
        }
        changed
    }

    /// Apply one timer event. Events from an older generation are ignored.
    pub fn handle(&mut self, event: TimerEvent) -> bool {
        if event.generation() != self.generation {
            log::trace!(
                "dropping stale carousel event (generation {} != {})",
                event.generation(),
                self.generation
            );
            return false;
        }

        let before = self.snapshot();
        match event {
            TimerEvent::Tick { at, .. } => {
                if self.carousel.tick(at).is_some() {
                    self.schedule_settle();
                }
            }
            TimerEvent::Settle { at, .. } => {
                self.carousel.settle(at);
            }
        }
        if !self.carousel.is_transitioning() {
            self.settle = None;
        }
        self.sync_autoplay();
        before != self.snapshot()
    }

    pub fn next(&mut self) -> bool {
        let started = self.carousel.next(Instant::now());
        self.after_manual(started)
    }

    pub fn previous(&mut self) -> bool {
        let started = self.carousel.previous(Instant::now());
        self.after_manual(started)
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        let started = self.carousel.go_to(index, Instant::now());
        self.after_manual(started)
    }

    /// Stop autoplay. An in-flight transition still completes.
    pub fn pause(&mut self) -> bool {
        let changed = self.carousel.pause();
        self.sync_autoplay();
        changed
    }

    pub fn resume(&mut self) -> bool {
        let changed = self.carousel.resume();
        self.sync_autoplay();
        changed
    }

    /// Pause if playing, resume if paused. Returns true if now switched on.
    pub fn toggle_autoplay(&mut self) -> bool {
        if self.carousel.autoplay_enabled() {
            self.pause();
        } else {
            self.resume();
        }
        self.carousel.autoplay_enabled()
    }

    /// Swap the slide list. A different list cancels all timers, resets the
    /// position and starts a new generation.
    pub fn replace_slides(&mut self, slides: Vec<Slide>) -> bool {
        if !self.carousel.replace_slides(slides) {
            return false;
        }
        self.generation += 1;
        self.autoplay = None;
        self.settle = None;
        self.sync_autoplay();
        log::debug!(
            "carousel slides replaced: {} slides, generation {}",
            self.carousel.len(),
            self.generation
        );
        true
    }

    fn after_manual(&mut self, started: Option<usize>) -> bool {
        if !self.carousel.is_transitioning() {
            self.settle = None;
        }
        self.sync_autoplay();
        match started {
            Some(_) => {
                self.schedule_settle();
                true
            }
            None => false,
        }
    }

    fn schedule_settle(&mut self) {
        self.settle = self
            .carousel
            .transition_deadline()
            .and_then(|deadline| TimerHandle::at(deadline, self.generation, self.tx.clone()));
    }

    fn sync_autoplay(&mut self) {
        if !self.carousel.is_autoplaying() {
            self.autoplay = None;
        } else if self.autoplay.is_none() {
            self.autoplay = TimerHandle::every(
                self.carousel.config().interval,
                self.generation,
                self.tx.clone(),
            );
        }
    }

    fn snapshot(&self) -> (usize, Phase) {
        (self.carousel.current_index(), self.carousel.phase())
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        log::debug!("carousel unmounted (generation {})", self.generation);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("s{}", i), format!("img{}.jpg", i)))
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_sends_ticks_at_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = Instant::now();
        let _handle = TimerHandle::every(ms(500), 7, tx).unwrap();

        time::sleep(ms(1100)).await;

        let first = rx.try_recv().unwrap();
        assert_eq!(
            first,
            TimerEvent::Tick {
                generation: 7,
                at: start + ms(500)
            }
        );
        let second = rx.try_recv().unwrap();
        assert_eq!(second.generation(), 7);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = TimerHandle::every(ms(500), 0, tx).unwrap();
        drop(handle);

        time::sleep(ms(2000)).await;
        assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
    }

    #[tokio::test(start_paused = true)]
    async fn test_at_fires_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let deadline = Instant::now() + ms(300);
        let handle = TimerHandle::at(deadline, 1, tx).unwrap();

        time::sleep(ms(400)).await;
        assert_eq!(
            rx.try_recv(),
            Ok(TimerEvent::Settle {
                generation: 1,
                at: deadline
            })
        );
        assert!(handle.is_finished());
    }

    #[test]
    fn test_timers_need_runtime() {
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(TimerHandle::every(ms(10), 0, tx.clone()).is_none());
        assert!(TimerHandle::at(Instant::now(), 0, tx).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_starts_timer_only_when_cycling() {
        let ctl = CarouselController::mount(slides(3), CarouselConfig::default());
        assert!(ctl.is_timer_running());

        let ctl = CarouselController::mount(slides(1), CarouselConfig::default());
        assert!(!ctl.is_timer_running());

        let ctl = CarouselController::mount(Vec::new(), CarouselConfig::default());
        assert!(!ctl.is_timer_running());

        let ctl = CarouselController::mount(
            slides(3),
            CarouselConfig::default().with_autoplay(false),
        );
        assert!(!ctl.is_timer_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_generation_is_ignored() {
        let mut ctl = CarouselController::mount(slides(3), CarouselConfig::default());
        assert!(ctl.replace_slides(slides(4)));
        assert_eq!(ctl.generation(), 1);

        let stale = TimerEvent::Tick {
            generation: 0,
            at: Instant::now(),
        };
        assert!(!ctl.handle(stale));
        assert!(!ctl.carousel().is_transitioning());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_cancels_timer_and_resume_restarts() {
        let mut ctl = CarouselController::mount(slides(3), CarouselConfig::default());
        assert!(ctl.pause());
        assert!(!ctl.is_timer_running());

        time::sleep(ms(10_000)).await;
        assert!(!ctl.pump());
        assert_eq!(ctl.carousel().current_index(), 0);

        assert!(ctl.resume());
        assert!(ctl.is_timer_running());
        assert!(!ctl.toggle_autoplay());
        assert!(ctl.toggle_autoplay());
    }

    #[tokio::test(start_paused = true)]
    async fn test_finite_autoplay_stops_timer_on_last_slide() {
        let mut ctl = CarouselController::mount(
            slides(2),
            CarouselConfig::default().with_infinite(false),
        );
        assert!(ctl.is_timer_running());

        time::sleep(ms(4100)).await;
        ctl.pump();
        assert_eq!(ctl.carousel().current_index(), 1);
        assert!(!ctl.is_timer_running());
        assert!(!ctl.carousel().is_autoplaying());

        time::sleep(ms(60_000)).await;
        assert!(!ctl.pump());
        assert!(!ctl.is_timer_running());

        // Going back gives autoplay somewhere to go again
        assert!(ctl.previous());
        assert!(ctl.is_timer_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_next_schedules_settle() {
        let mut ctl = CarouselController::mount(
            slides(3),
            CarouselConfig::default().with_autoplay(false),
        );
        assert!(ctl.next());
        assert!(ctl.has_pending_settle());
        assert!(!ctl.next());

        time::sleep(ms(2100)).await;
        assert!(ctl.pump());
        assert_eq!(ctl.carousel().current_index(), 1);
        assert!(!ctl.has_pending_settle());
    }
}
