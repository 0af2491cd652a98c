//! Duration input component for Bubble Tea applications.
//!
//! Collects a candidate countdown duration as three bounded numeric fields
//! (hours 0–23, minutes 0–59, seconds 0–59). The widget never rejects an
//! edit: raw input is coerced into range, non-numeric input becomes zero.
//! Its only gate is on submission — a zero total cannot start a countdown.
//!
//! # Examples
//!
//! ```rust
//! use countdown_widgets::duration::Field;
//! use countdown_widgets::input::Model;
//!
//! let mut input = Model::new();
//! input.set_field(Field::Hours, "99");   // clamped to 23
//! input.set_field(Field::Minutes, "abc"); // coerced to 0
//! assert_eq!(input.duration().hours, 23);
//! assert!(input.can_submit());
//!
//! let engine = input.submit_start().unwrap();
//! assert_eq!(engine.remaining_seconds(), 23 * 3600);
//! ```

use crate::countdown;
use crate::duration::{Duration, Field};
use lipgloss_extras::prelude::*;

/// Styles used when rendering the input form.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of the currently focused field value.
    pub focused_field: Style,
    /// Style of the other field values.
    pub field: Style,
    /// Style of the `Hours`/`Minutes`/`Seconds` captions.
    pub label: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            focused_field: Style::new().bold(true).foreground(Color::from("205")),
            field: Style::new(),
            label: Style::new().foreground(Color::from("240")),
        }
    }
}

/// Duration input widget.
///
/// Holds the three current field values and a focus marker for keyboard
/// editing; there is no other hidden state. It is purely a validated data
/// source: [`submit_start`](Model::submit_start) and
/// [`submit_preview`](Model::submit_preview) hand the duration to a fresh
/// [`countdown::Model`], or return `None` when the total is zero.
#[derive(Debug, Clone)]
pub struct Model {
    duration: Duration,
    focus: Field,
    styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            duration: Duration::ZERO,
            focus: Field::Hours,
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates an empty input with the hours field focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input pre-filled with `duration`.
    ///
    /// Useful when returning from a countdown so the user can tweak the
    /// previous value instead of retyping it.
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Sets the styles used by [`view`](Model::view).
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Returns the current duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the currently focused field.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Moves focus to the next field, wrapping from seconds back to hours.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Field::Hours => Field::Minutes,
            Field::Minutes => Field::Seconds,
            Field::Seconds => Field::Hours,
        };
    }

    /// Moves focus to the previous field, wrapping from hours to seconds.
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Field::Hours => Field::Seconds,
            Field::Minutes => Field::Hours,
            Field::Seconds => Field::Minutes,
        };
    }

    /// Applies raw user input to one field and returns the new duration.
    ///
    /// Never fails: the raw value is parsed as a non-negative integer
    /// (anything unparseable, including negative numbers, becomes 0) and
    /// clamped into the field's range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countdown_widgets::duration::Field;
    /// use countdown_widgets::input::Model;
    ///
    /// let mut input = Model::new();
    /// assert_eq!(input.set_field(Field::Seconds, "75").seconds, 59);
    /// assert_eq!(input.set_field(Field::Seconds, "-3").seconds, 0);
    /// assert_eq!(input.set_field(Field::Seconds, "30").seconds, 30);
    /// ```
    pub fn set_field(&mut self, field: Field, raw: &str) -> Duration {
        let value = raw.trim().parse::<u64>().unwrap_or(0);
        self.duration = self.duration.with(field, value);
        self.duration
    }

    /// Adjusts the focused field by `delta`, saturating at the field bounds.
    ///
    /// Drives the up/down arrow editing in the application shell.
    pub fn adjust(&mut self, delta: i64) -> Duration {
        let field = self.focus;
        let current = self.duration.get(field) as i64;
        let value = (current + delta).clamp(0, field.max() as i64) as u64;
        self.duration = self.duration.with(field, value);
        self.duration
    }

    /// Returns whether the current duration can start a countdown.
    ///
    /// True iff the total of the three fields is greater than zero.
    pub fn can_submit(&self) -> bool {
        !self.duration.is_zero()
    }

    /// Hands the duration to a fresh live countdown engine.
    ///
    /// Suppressed (returns `None`, no engine created) when
    /// [`can_submit`](Model::can_submit) is false. The caller arms the
    /// engine with [`countdown::Model::init`].
    pub fn submit_start(&self) -> Option<countdown::Model> {
        self.submit(countdown::Mode::Live)
    }

    /// Hands the duration to a fresh preview engine.
    ///
    /// Suppressed when [`can_submit`](Model::can_submit) is false. The
    /// preview renders the duration without ever advancing.
    pub fn submit_preview(&self) -> Option<countdown::Model> {
        self.submit(countdown::Mode::Preview)
    }

    fn submit(&self, mode: countdown::Mode) -> Option<countdown::Model> {
        if !self.can_submit() {
            return None;
        }
        countdown::Model::new(self.duration, mode)
    }

    /// Renders the three fields as `HH : MM : SS` with captions.
    pub fn view(&self) -> String {
        let render = |field: Field, label: &str| {
            let style = if self.focus == field {
                &self.styles.focused_field
            } else {
                &self.styles.field
            };
            format!(
                "{} {}",
                style.render(&format!("{:02}", self.duration.get(field))),
                self.styles.label.render(label)
            )
        };

        format!(
            "{} : {} : {}",
            render(Field::Hours, "Hours"),
            render(Field::Minutes, "Minutes"),
            render(Field::Seconds, "Seconds")
        )
    }
}
