#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/countdown-widgets/")]

//! # countdown-widgets
//!
//! Countdown timer components for building terminal applications with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The crate provides two widgets plus a ready-made shell that composes
//! them. Each widget follows the Elm Architecture pattern with `init()`,
//! `update()`, and `view()` methods:
//!
//! - [`input::Model`] — collects a countdown duration as three bounded
//!   hours/minutes/seconds fields. Edits are clamped, never rejected; only
//!   a non-zero total may be submitted.
//! - [`countdown::Model`] — the countdown engine. Owns a single
//!   remaining-seconds counter and the running/paused/completed state
//!   machine, ticking once per second while running. Supports pause,
//!   resume, reset, and a non-advancing preview mode.
//! - [`app::App`] — a thin screen-selection shell wiring the two together
//!   with crossterm key bindings.
//!
//! ## Quick Start
//!
//! ```rust
//! use countdown_widgets::prelude::*;
//!
//! let mut input = DurationInput::new();
//! input.set_field(Field::Minutes, "5");
//!
//! // Hand the duration to a live engine; arm its first tick.
//! let engine: Countdown = input.submit_start().unwrap();
//! let _first_tick = engine.init();
//!
//! let snap = engine.snapshot();
//! assert_eq!((snap.hours, snap.minutes, snap.seconds), (0, 5, 0));
//! ```
//!
//! ## Design Notes
//!
//! The engine never stores hours, minutes and seconds separately: the
//! display triple is recomputed from the remaining-seconds counter on
//! every read, so no drift can accumulate across ticks. Scheduling uses
//! bubbletea-rs `tick` commands filtered by instance ID and a generation
//! tag; pausing bumps the tag, which synchronously invalidates any tick
//! already in flight. Several engines can run side by side with no shared
//! state.

pub mod app;
pub mod countdown;
pub mod duration;
pub mod input;

pub use app::App;
pub use countdown::{
    CompletedMsg as CountdownCompletedMsg, Mode, Model as Countdown,
    ResetMsg as CountdownResetMsg, Snapshot, Status, TickMsg as CountdownTickMsg,
};
pub use duration::{Duration, Field};
pub use input::Model as DurationInput;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use countdown_widgets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::App;
    pub use crate::countdown::{
        CompletedMsg as CountdownCompletedMsg, Mode, Model as Countdown,
        ResetMsg as CountdownResetMsg, Snapshot, Status, TickMsg as CountdownTickMsg,
    };
    pub use crate::duration::{Duration, Field};
    pub use crate::input::Model as DurationInput;
}
