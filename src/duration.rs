//! Countdown duration expressed as hours, minutes and seconds.
//!
//! A [`Duration`] is the value a user builds up in the input widget before a
//! countdown starts. Each field is bounded (hours 0–23, minutes and seconds
//! 0–59) and values are clamped rather than rejected, so a `Duration` is
//! always valid by construction. The countdown engine itself works in a
//! normalized total-seconds form; see [`Duration::total_seconds`].

use std::fmt;

/// One of the three editable duration fields.
///
/// Used by the input widget to address a field when applying raw user input
/// or keyboard adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The hours field, bounded to 0–23.
    Hours,
    /// The minutes field, bounded to 0–59.
    Minutes,
    /// The seconds field, bounded to 0–59.
    Seconds,
}

impl Field {
    /// Returns the inclusive upper bound for this field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countdown_widgets::duration::Field;
    ///
    /// assert_eq!(Field::Hours.max(), 23);
    /// assert_eq!(Field::Minutes.max(), 59);
    /// assert_eq!(Field::Seconds.max(), 59);
    /// ```
    pub fn max(&self) -> u64 {
        match self {
            Field::Hours => 23,
            Field::Minutes | Field::Seconds => 59,
        }
    }
}

/// A countdown duration as an immutable hours/minutes/seconds triple.
///
/// Construct one with [`Duration::new`], which clamps each component into
/// its valid range so the result is always well-formed. A duration with all
/// three components zero cannot start a countdown; see [`Duration::is_zero`].
///
/// # Examples
///
/// ```rust
/// use countdown_widgets::duration::Duration;
///
/// let d = Duration::new(0, 5, 30);
/// assert_eq!(d.total_seconds(), 330);
///
/// // Out-of-range components clamp to the field bound.
/// let d = Duration::new(99, 0, 0);
/// assert_eq!(d.hours, 23);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration {
    /// Hours component, 0–23.
    pub hours: u64,
    /// Minutes component, 0–59.
    pub minutes: u64,
    /// Seconds component, 0–59.
    pub seconds: u64,
}

impl Duration {
    /// The zero duration. Cannot start a countdown.
    pub const ZERO: Duration = Duration {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Creates a duration, clamping each component into its field bound.
    ///
    /// Clamping never fails: `new(99, 75, 200)` yields `23:59:59`.
    pub fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            hours: hours.min(Field::Hours.max()),
            minutes: minutes.min(Field::Minutes.max()),
            seconds: seconds.min(Field::Seconds.max()),
        }
    }

    /// Returns the value of one field.
    pub fn get(&self, field: Field) -> u64 {
        match field {
            Field::Hours => self.hours,
            Field::Minutes => self.minutes,
            Field::Seconds => self.seconds,
        }
    }

    /// Returns a copy with one field replaced by `value`, clamped into the
    /// field's bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use countdown_widgets::duration::{Duration, Field};
    ///
    /// let d = Duration::ZERO.with(Field::Minutes, 90);
    /// assert_eq!(d.minutes, 59);
    /// ```
    pub fn with(&self, field: Field, value: u64) -> Self {
        let value = value.min(field.max());
        let mut d = *self;
        match field {
            Field::Hours => d.hours = value,
            Field::Minutes => d.minutes = value,
            Field::Seconds => d.seconds = value,
        }
        d
    }

    /// Returns the duration normalized to total seconds.
    ///
    /// This is the form the countdown engine stores; the triple is derived
    /// back from it for display.
    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// Returns whether all three components are zero.
    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }
}

impl fmt::Display for Duration {
    /// Formats as fixed two-digit `HH:MM:SS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
