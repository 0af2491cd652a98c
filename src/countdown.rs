//! Countdown engine component for Bubble Tea applications.
//!
//! This module owns the countdown state machine: the remaining time, the
//! running/paused/completed status and the per-tick decrement algorithm.
//! Presentation is limited to a styled `HH:MM:SS` string; screen layout is
//! the application's concern.
//!
//! # Basic Usage
//!
//! ```rust
//! use countdown_widgets::countdown::{Model, Mode};
//! use countdown_widgets::duration::Duration;
//!
//! // A live five-minute countdown. Returns None for a zero duration.
//! let engine = Model::new(Duration::new(0, 5, 0), Mode::Live).unwrap();
//! assert!(engine.running());
//! assert!(engine.view().contains("00:05:00"));
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use countdown_widgets::countdown::{Model, Mode, CompletedMsg};
//! use countdown_widgets::duration::Duration;
//!
//! struct MyApp {
//!     countdown: Model,
//! }
//!
//! impl BubbleTeaModel for MyApp {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let countdown = Model::new(Duration::new(0, 0, 10), Mode::Live).unwrap();
//!         let cmd = countdown.init();
//!         (Self { countdown }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(done) = msg.downcast_ref::<CompletedMsg>() {
//!             if done.id == self.countdown.id() {
//!                 // Countdown finished!
//!             }
//!         }
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.countdown.view()
//!     }
//! }
//! ```
//!
//! # Preview Mode
//!
//! A preview engine renders its duration without ever advancing:
//!
//! ```rust
//! use countdown_widgets::countdown::{Model, Mode, Status};
//! use countdown_widgets::duration::Duration;
//!
//! let preview = Model::new(Duration::new(1, 30, 0), Mode::Preview).unwrap();
//! assert!(preview.init().is_none()); // never ticks
//! assert_eq!(preview.status(), Status::Idle);
//! ```

use crate::duration::Duration;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration as StdDuration;

// Internal ID management for countdown instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generates unique identifiers for countdown instances.
///
/// Each engine gets its own ID so that several countdowns can coexist in
/// one application without their messages interfering. IDs are generated
/// atomically and start from 1.
fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Decomposes a total-seconds value into an hours/minutes/seconds triple.
///
/// The triple is always derived from the single stored counter, never kept
/// alongside it, so no drift can accumulate across ticks.
fn hms(remaining: u64) -> (u64, u64, u64) {
    (
        remaining / 3600,
        (remaining % 3600) / 60,
        remaining % 60,
    )
}

/// Lifecycle status of a countdown engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Static initial state of a preview engine. Never ticks.
    Idle,
    /// Actively counting down, one second per tick.
    Running,
    /// Suspended by [`Model::pause`]; remaining time is preserved.
    Paused,
    /// Reached zero. Terminal; only discarding the instance leaves it.
    Completed,
}

/// Whether an engine advances in real time or is a static preview.
///
/// The mode is fixed at creation. A preview engine exists purely to render
/// a chosen duration and never transitions to [`Status::Running`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal countdown; starts running immediately.
    Live,
    /// Non-advancing display of the chosen duration.
    Preview,
}

/// Message sent on every scheduled tick to advance the countdown.
///
/// Ticks are filtered by engine ID and by an internal tag. The tag changes
/// on every accepted tick and on every pause, so a tick scheduled before a
/// state change arrives stale and is rejected. This is what makes
/// cancellation total: a pending tick from before a pause can never fire
/// an observable update.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The unique identifier of the engine this tick targets.
    pub id: i64,
    /// Scheduling generation. Must match the engine's current tag exactly.
    tag: i64,
}

/// Message sent once when a countdown reaches zero.
///
/// Emitted in the same step that snaps the remaining time to zero, so there
/// is no observable "zero remaining, still running" frame before it.
#[derive(Debug, Clone)]
pub struct CompletedMsg {
    /// The unique identifier of the engine that completed.
    pub id: i64,
}

/// Message sent by [`Model::reset`] asking the owner to discard the engine.
///
/// Reset is not a state transition within the engine: the instance is
/// abandoned unchanged and the application returns to duration input.
#[derive(Debug, Clone)]
pub struct ResetMsg {
    /// The unique identifier of the engine to discard.
    pub id: i64,
}

/// A read-only view of the engine at one instant.
///
/// The triple is recomputed from the remaining-seconds counter on every
/// call to [`Model::snapshot`]; it is safe to sample at any time, including
/// after completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Whole hours remaining.
    pub hours: u64,
    /// Minutes remaining within the hour, 0–59.
    pub minutes: u64,
    /// Seconds remaining within the minute, 0–59.
    pub seconds: u64,
    /// Current lifecycle status.
    pub status: Status,
    /// The engine's fixed mode.
    pub mode: Mode,
}

/// Styles used when rendering the countdown.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style applied to the `HH:MM:SS` time string.
    pub time: Style,
    /// Style of the badge shown in front of a preview display.
    pub preview_badge: Style,
    /// Style of the completed flag appended when the countdown finishes.
    pub completed_flag: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            time: Style::new().bold(true),
            preview_badge: Style::new().foreground(Color::from("212")),
            completed_flag: Style::new().bold(true).foreground(Color::from("205")),
        }
    }
}

/// Countdown engine for Bubble Tea applications.
///
/// The engine stores a single non-negative remaining-seconds counter and a
/// status; the displayed hours/minutes/seconds are derived on every read.
/// Created from a [`Duration`] and a [`Mode`], it either ticks once per
/// second while running (live) or stays static forever (preview).
///
/// Controls are forgiving: calling [`pause`](Model::pause),
/// [`resume`](Model::resume) or [`reset`](Model::reset) in an inapplicable
/// state is a silent no-op, never an error. The only terminal conditions
/// are reaching zero ([`Status::Completed`]) and being discarded after a
/// reset.
///
/// # Examples
///
/// Driving the engine manually with its own tick messages:
///
/// ```rust
/// use countdown_widgets::countdown::{Model, Mode, Status};
/// use countdown_widgets::duration::Duration;
///
/// let mut engine = Model::new(Duration::new(0, 0, 2), Mode::Live).unwrap();
///
/// engine.update(Box::new(engine.tick_msg()));
/// assert_eq!(engine.remaining_seconds(), 1);
/// assert_eq!(engine.status(), Status::Running);
///
/// // The tick that would go below one snaps straight to zero/completed.
/// engine.update(Box::new(engine.tick_msg()));
/// assert_eq!(engine.remaining_seconds(), 0);
/// assert_eq!(engine.status(), Status::Completed);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Remaining time in whole seconds. Single source of truth for display.
    remaining: u64,
    status: Status,
    mode: Mode,
    /// Wall-clock spacing between ticks. Each tick still decrements exactly
    /// one second; shrinking the interval only compresses wall-clock time.
    interval: StdDuration,
    id: i64,
    /// Scheduling generation; bumped on every accepted tick and every exit
    /// from Running so stale scheduled ticks are rejected.
    tag: i64,
    styles: Styles,
}

impl Model {
    /// Creates a countdown engine with the default one-second tick cadence.
    ///
    /// Returns `None` when the duration is zero: a countdown of nothing is
    /// suppressed rather than treated as an error, mirroring the input
    /// widget's own submit gate.
    ///
    /// A [`Mode::Live`] engine starts in [`Status::Running`]; a
    /// [`Mode::Preview`] engine starts in [`Status::Idle`] and never runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countdown_widgets::countdown::{Model, Mode};
    /// use countdown_widgets::duration::Duration;
    ///
    /// assert!(Model::new(Duration::ZERO, Mode::Live).is_none());
    ///
    /// let engine = Model::new(Duration::new(0, 1, 30), Mode::Live).unwrap();
    /// assert_eq!(engine.remaining_seconds(), 90);
    /// ```
    pub fn new(duration: Duration, mode: Mode) -> Option<Self> {
        Self::new_with_interval(duration, mode, StdDuration::from_secs(1))
    }

    /// Creates a countdown engine with a custom wall-clock tick interval.
    ///
    /// The interval controls how often ticks are scheduled, not how much
    /// time each tick subtracts: every accepted tick decrements exactly one
    /// second. A short interval is mainly useful for demos and tests that
    /// should not wait out a countdown in real time.
    pub fn new_with_interval(
        duration: Duration,
        mode: Mode,
        interval: StdDuration,
    ) -> Option<Self> {
        if duration.is_zero() {
            return None;
        }
        Some(Self::with_total(duration.total_seconds(), mode, interval))
    }

    /// Builds an engine from a known non-zero total. Callers are
    /// responsible for the zero gate.
    fn with_total(total: u64, mode: Mode, interval: StdDuration) -> Self {
        Self {
            remaining: total,
            status: match mode {
                Mode::Live => Status::Running,
                Mode::Preview => Status::Idle,
            },
            mode,
            interval,
            id: next_id(),
            tag: 0,
            styles: Styles::default(),
        }
    }

    /// Sets the styles used by [`view`](Model::view).
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Returns the unique identifier of this engine instance.
    ///
    /// Use it to match [`CompletedMsg`] and [`ResetMsg`] to the engine that
    /// produced them when several countdowns run side by side.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the engine's fixed mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the current lifecycle status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the remaining time in whole seconds.
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining
    }

    /// Returns whether the engine is actively counting down.
    pub fn running(&self) -> bool {
        self.status == Status::Running
    }

    /// Returns whether the engine is paused with time remaining.
    pub fn paused(&self) -> bool {
        self.status == Status::Paused
    }

    /// Returns whether the countdown has reached zero.
    pub fn completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Returns a read-only snapshot of the current state.
    ///
    /// Pure and side-effect free; the hours/minutes/seconds triple is
    /// recomputed from the remaining-seconds counter on every call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countdown_widgets::countdown::{Model, Mode};
    /// use countdown_widgets::duration::Duration;
    ///
    /// let engine = Model::new(Duration::new(1, 1, 5), Mode::Preview).unwrap();
    /// let snap = engine.snapshot();
    /// assert_eq!((snap.hours, snap.minutes, snap.seconds), (1, 1, 5));
    /// ```
    pub fn snapshot(&self) -> Snapshot {
        let (hours, minutes, seconds) = hms(self.remaining);
        Snapshot {
            hours,
            minutes,
            seconds,
            status: self.status,
            mode: self.mode,
        }
    }

    /// Builds a tick message addressed to this engine.
    ///
    /// Useful for driving the engine without the runtime, e.g. in tests.
    /// The message carries the current scheduling tag, so it is only valid
    /// until the next accepted tick or pause.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Schedules the next tick after `interval`.
    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let interval = self.interval;

        bubbletea_tick(interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Emits a [`CompletedMsg`] for this engine.
    fn completed_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(StdDuration::from_nanos(1), move |_| {
            Box::new(CompletedMsg { id }) as Msg
        })
    }

    /// Arms the first tick of a live engine.
    ///
    /// Returns `None` for preview engines, which never tick. Call once when
    /// the engine is created and hand the command to the runtime.
    pub fn init(&self) -> Option<Cmd> {
        if self.status == Status::Running {
            Some(self.tick())
        } else {
            None
        }
    }

    /// Suspends the countdown.
    ///
    /// Valid only while running; in any other state (paused, completed, or
    /// a preview that never ran) this is a silent no-op. The pending
    /// scheduled tick is invalidated in the same call, so a tick already in
    /// flight cannot land after the pause.
    pub fn pause(&mut self) {
        if self.status == Status::Running {
            self.status = Status::Paused;
            self.tag += 1;
        }
    }

    /// Resumes a paused countdown and re-arms its tick.
    ///
    /// Valid only while paused with time remaining; otherwise a no-op
    /// returning `None`. Pausing and resuming never costs or skips a
    /// decrement — scheduling is suspended, the counter is untouched.
    pub fn resume(&mut self) -> Option<Cmd> {
        if self.status == Status::Paused && self.remaining > 0 {
            self.status = Status::Running;
            return Some(self.tick());
        }
        None
    }

    /// Asks the owning application to discard this engine.
    ///
    /// Returns a command emitting [`ResetMsg`]; the engine itself is left
    /// untouched and is expected to be dropped by the owner, returning the
    /// application to duration input. A fresh engine built from the same
    /// duration starts from the full initial time.
    pub fn reset(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(StdDuration::from_nanos(1), move |_| {
            Box::new(ResetMsg { id }) as Msg
        })
    }

    /// Processes messages and advances the countdown.
    ///
    /// Handles [`TickMsg`] only; all other messages are ignored with
    /// `None`. A tick is accepted when it carries this engine's ID and its
    /// current tag and the engine is running. An accepted tick either
    /// decrements the counter by one and schedules the next tick, or — when
    /// one second or less remains — snaps the counter to zero, transitions
    /// to [`Status::Completed`] and emits a [`CompletedMsg`] instead. There
    /// is no intermediate "zero remaining, still running" frame.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if tick_msg.id != self.id {
                return None;
            }
            if self.status != Status::Running {
                return None;
            }
            // A stale tag means this tick was scheduled before a pause or an
            // earlier accepted tick. Rejecting it keeps cancellation total.
            if tick_msg.tag != self.tag {
                return None;
            }

            self.tag += 1;

            if self.remaining <= 1 {
                self.remaining = 0;
                self.status = Status::Completed;
                return Some(self.completed_cmd());
            }

            self.remaining -= 1;
            return Some(self.tick());
        }

        None
    }

    /// Renders the countdown as a styled `HH:MM:SS` string.
    ///
    /// Each component is fixed two-digit zero-padded. Preview engines get a
    /// leading badge; completed engines get a trailing flag. No other
    /// alerting is produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countdown_widgets::countdown::{Model, Mode};
    /// use countdown_widgets::duration::Duration;
    ///
    /// let engine = Model::new(Duration::new(0, 5, 3), Mode::Live).unwrap();
    /// assert!(engine.view().contains("00:05:03"));
    /// ```
    pub fn view(&self) -> String {
        let snap = self.snapshot();
        let time = self.styles.time.render(&format!(
            "{:02}:{:02}:{:02}",
            snap.hours, snap.minutes, snap.seconds
        ));

        match (self.mode, self.status) {
            (Mode::Preview, _) => {
                format!("{} {}", self.styles.preview_badge.render("PREVIEW"), time)
            }
            (Mode::Live, Status::Completed) => {
                format!("{} {}", time, self.styles.completed_flag.render("TIME'S UP"))
            }
            _ => time,
        }
    }
}

impl BubbleTeaModel for Model {
    /// Creates a default one-minute live countdown for standalone use.
    ///
    /// Most applications will construct engines from user input via
    /// [`Model::new`] instead.
    fn init() -> (Self, Option<Cmd>) {
        let model = Model::with_total(60, Mode::Live, StdDuration::from_secs(1));
        let cmd = model.init();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(h: u64, m: u64, s: u64) -> Model {
        Model::new(Duration::new(h, m, s), Mode::Live).unwrap()
    }

    /// Drives one tick with a correctly addressed, current-tag message.
    fn step(engine: &mut Model) -> Option<Cmd> {
        let msg = engine.tick_msg();
        engine.update(Box::new(msg))
    }

    #[test]
    fn test_new_normalizes_to_total_seconds() {
        let engine = live(1, 1, 1);
        assert_eq!(engine.remaining_seconds(), 3661);
        assert_eq!(engine.status(), Status::Running);
        assert_eq!(engine.mode(), Mode::Live);
        assert!(engine.id() > 0);
    }

    #[test]
    fn test_zero_duration_is_suppressed() {
        assert!(Model::new(Duration::ZERO, Mode::Live).is_none());
        assert!(Model::new(Duration::ZERO, Mode::Preview).is_none());
    }

    #[test]
    fn test_unique_ids() {
        let a = live(0, 0, 5);
        let b = live(0, 0, 5);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_live_starts_running_preview_starts_idle() {
        assert_eq!(live(0, 0, 5).status(), Status::Running);

        let preview = Model::new(Duration::new(0, 0, 5), Mode::Preview).unwrap();
        assert_eq!(preview.status(), Status::Idle);
        assert!(preview.init().is_none());
    }

    #[test]
    fn test_tick_decrements_one_second() {
        let mut engine = live(0, 0, 10);
        let cmd = step(&mut engine);
        assert!(cmd.is_some());
        assert_eq!(engine.remaining_seconds(), 9);
        assert_eq!(engine.status(), Status::Running);
    }

    #[test]
    fn test_two_second_countdown_boundary() {
        // {0,0,2}: tick one -> 1/Running, tick two -> 0/Completed.
        let mut engine = live(0, 0, 2);

        step(&mut engine);
        assert_eq!(engine.remaining_seconds(), 1);
        assert_eq!(engine.status(), Status::Running);

        step(&mut engine);
        assert_eq!(engine.remaining_seconds(), 0);
        assert_eq!(engine.status(), Status::Completed);
    }

    #[test]
    fn test_completion_takes_exactly_total_ticks() {
        let duration = Duration::new(0, 2, 5);
        let total = duration.total_seconds();
        let mut engine = Model::new(duration, Mode::Live).unwrap();

        for i in 0..total {
            assert_eq!(engine.status(), Status::Running, "tick {}", i);
            step(&mut engine);
        }

        assert_eq!(engine.status(), Status::Completed);
        assert_eq!(engine.remaining_seconds(), 0);
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut engine = live(0, 0, 1);
        step(&mut engine);
        assert_eq!(engine.status(), Status::Completed);

        // Further ticks, pauses and resumes all bounce off.
        assert!(step(&mut engine).is_none());
        engine.pause();
        assert_eq!(engine.status(), Status::Completed);
        assert!(engine.resume().is_none());
        assert_eq!(engine.snapshot().status, Status::Completed);
        assert_eq!(engine.remaining_seconds(), 0);
    }

    #[test]
    fn test_pause_resume_cycle() {
        let mut engine = live(0, 0, 10);
        step(&mut engine);

        engine.pause();
        assert_eq!(engine.status(), Status::Paused);
        assert_eq!(engine.remaining_seconds(), 9);

        let cmd = engine.resume();
        assert!(cmd.is_some());
        assert_eq!(engine.status(), Status::Running);
        assert_eq!(engine.remaining_seconds(), 9);
    }

    #[test]
    fn test_pause_is_tick_neutral() {
        // Pausing and resuming n times never changes the number of ticks
        // needed to finish.
        let duration = Duration::new(0, 0, 6);
        let total = duration.total_seconds();

        let mut engine = Model::new(duration, Mode::Live).unwrap();
        let mut ticks = 0;
        while engine.status() != Status::Completed {
            engine.pause();
            engine.resume();
            step(&mut engine);
            ticks += 1;
        }
        assert_eq!(ticks, total);
    }

    #[test]
    fn test_pause_invalidates_pending_tick() {
        let mut engine = live(0, 0, 10);

        // A tick scheduled while running...
        let stale = engine.tick_msg();
        engine.pause();
        engine.resume();

        // ...carries a stale tag after the pause and must not fire.
        assert!(engine.update(Box::new(stale)).is_none());
        assert_eq!(engine.remaining_seconds(), 10);
    }

    #[test]
    fn test_stale_tag_rejected_after_accepted_tick() {
        let mut engine = live(0, 0, 10);
        let first = engine.tick_msg();
        let duplicate = engine.tick_msg();

        assert!(engine.update(Box::new(first)).is_some());
        // Same generation delivered twice must not double-decrement.
        assert!(engine.update(Box::new(duplicate)).is_none());
        assert_eq!(engine.remaining_seconds(), 9);
    }

    #[test]
    fn test_foreign_id_rejected() {
        let mut engine = live(0, 0, 10);
        let other = live(0, 0, 10);

        assert!(engine.update(Box::new(other.tick_msg())).is_none());
        assert_eq!(engine.remaining_seconds(), 10);
    }

    #[test]
    fn test_pause_noop_outside_running() {
        let mut preview = Model::new(Duration::new(0, 0, 5), Mode::Preview).unwrap();
        preview.pause();
        assert_eq!(preview.status(), Status::Idle);

        let mut engine = live(0, 0, 5);
        engine.pause();
        engine.pause(); // second pause is a no-op
        assert_eq!(engine.status(), Status::Paused);
    }

    #[test]
    fn test_resume_noop_unless_paused() {
        let mut engine = live(0, 0, 5);
        assert!(engine.resume().is_none()); // already running
        assert_eq!(engine.status(), Status::Running);

        let mut preview = Model::new(Duration::new(0, 0, 5), Mode::Preview).unwrap();
        assert!(preview.resume().is_none());
        assert_eq!(preview.status(), Status::Idle);
    }

    #[test]
    fn test_preview_never_advances() {
        let mut preview = Model::new(Duration::new(0, 10, 0), Mode::Preview).unwrap();

        for _ in 0..100 {
            let msg = preview.tick_msg();
            assert!(preview.update(Box::new(msg)).is_none());
        }

        assert_eq!(preview.status(), Status::Idle);
        assert_eq!(preview.remaining_seconds(), 600);
    }

    #[test]
    fn test_snapshot_derivation_round_trip() {
        for remaining in [0u64, 1, 59, 60, 61, 3599, 3600, 3661, 86399] {
            let (h, m, s) = hms(remaining);
            assert_eq!(h * 3600 + m * 60 + s, remaining);
            assert!(m < 60);
            assert!(s < 60);
        }
    }

    #[test]
    fn test_snapshot_reflects_remaining() {
        let mut engine = live(1, 0, 1);
        step(&mut engine);

        let snap = engine.snapshot();
        assert_eq!((snap.hours, snap.minutes, snap.seconds), (1, 0, 0));
        assert_eq!(snap.status, Status::Running);
        assert_eq!(snap.mode, Mode::Live);
    }

    #[test]
    fn test_fresh_engine_has_no_residual_state() {
        let duration = Duration::new(0, 0, 30);

        let mut first = Model::new(duration, Mode::Live).unwrap();
        for _ in 0..10 {
            step(&mut first);
        }
        drop(first);

        let second = Model::new(duration, Mode::Live).unwrap();
        assert_eq!(second.remaining_seconds(), 30);
        assert_eq!(second.status(), Status::Running);
    }

    #[test]
    fn test_reset_does_not_mutate() {
        let mut engine = live(0, 0, 10);
        step(&mut engine);

        let _cmd = engine.reset();
        assert_eq!(engine.remaining_seconds(), 9);
        assert_eq!(engine.status(), Status::Running);
    }

    #[test]
    fn test_independent_engines() {
        let mut a = live(0, 0, 10);
        let mut b = live(0, 0, 10);

        step(&mut a);
        step(&mut a);
        step(&mut b);

        assert_eq!(a.remaining_seconds(), 8);
        assert_eq!(b.remaining_seconds(), 9);
    }

    #[test]
    fn test_view_zero_pads() {
        let engine = live(5, 3, 9);
        assert!(engine.view().contains("05:03:09"));
    }

    #[test]
    fn test_view_preview_badge_and_completed_flag() {
        let preview = Model::new(Duration::new(0, 1, 0), Mode::Preview).unwrap();
        assert!(preview.view().contains("PREVIEW"));

        let mut engine = live(0, 0, 1);
        assert!(!engine.view().contains("TIME'S UP"));
        step(&mut engine);
        assert!(engine.view().contains("TIME'S UP"));
        assert!(engine.view().contains("00:00:00"));
    }

    #[test]
    fn test_standalone_default_is_one_minute_live() {
        let (model, cmd) = <Model as BubbleTeaModel>::init();
        assert_eq!(model.remaining_seconds(), 60);
        assert_eq!(model.status(), Status::Running);
        assert_eq!(model.mode(), Mode::Live);
        assert!(cmd.is_some());
    }

    #[test]
    fn test_non_tick_messages_ignored() {
        let mut engine = live(0, 0, 10);
        let result = engine.update(Box::new(CompletedMsg { id: engine.id() }));
        assert!(result.is_none());
        assert_eq!(engine.remaining_seconds(), 10);
    }
}
