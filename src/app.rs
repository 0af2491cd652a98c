//! A ready-made shell composing the input and countdown widgets.
//!
//! [`App`] is the thin screen-selection layer around the two components:
//! it shows the duration input, swaps in a countdown engine on submit, and
//! swaps back when the engine is reset. All countdown semantics live in
//! [`crate::countdown`]; this module only routes key events and owns which
//! screen is visible.
//!
//! # Key Bindings
//!
//! On the input screen:
//! - `tab`/`right` and `shift-tab`/`left` move between fields
//! - `up`/`down` adjust the focused field
//! - `enter` or `s` starts a live countdown
//! - `v` shows a non-advancing preview
//!
//! On the countdown screen:
//! - `space` toggles pause/resume (live countdowns only)
//! - `r` or `esc` discards the engine and returns to input

use crate::countdown;
use crate::duration::Duration;
use crate::input;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;

/// Which component is currently on screen.
enum Screen {
    Input(input::Model),
    Countdown(countdown::Model),
}

/// Countdown application shell.
///
/// # Examples
///
/// ```rust
/// use countdown_widgets::app::App;
/// use bubbletea_rs::Model as BubbleTeaModel;
///
/// let (app, cmd) = App::init();
/// assert!(cmd.is_none()); // nothing ticks until a countdown starts
/// assert!(app.view().contains("Hours"));
/// ```
pub struct App {
    screen: Screen,
    /// Last submitted duration, used to pre-fill the input after a reset.
    last: Duration,
}

impl App {
    /// Returns the countdown engine if one is currently on screen.
    pub fn countdown(&self) -> Option<&countdown::Model> {
        match &self.screen {
            Screen::Countdown(engine) => Some(engine),
            Screen::Input(_) => None,
        }
    }

    fn update_input(&mut self, msg: Msg) -> Option<Cmd> {
        let key = msg.downcast_ref::<KeyMsg>()?.key;
        let Screen::Input(input) = &mut self.screen else {
            return None;
        };

        match key {
            KeyCode::Tab | KeyCode::Right => input.focus_next(),
            KeyCode::BackTab | KeyCode::Left => input.focus_prev(),
            KeyCode::Up => {
                input.adjust(1);
            }
            KeyCode::Down => {
                input.adjust(-1);
            }
            KeyCode::Enter | KeyCode::Char('s') => {
                // Suppressed for a zero duration; the input stays up.
                if let Some(engine) = input.submit_start() {
                    self.last = input.duration();
                    let cmd = engine.init();
                    self.screen = Screen::Countdown(engine);
                    return cmd;
                }
            }
            KeyCode::Char('v') => {
                if let Some(engine) = input.submit_preview() {
                    self.last = input.duration();
                    self.screen = Screen::Countdown(engine);
                }
            }
            _ => {}
        }
        None
    }

    fn update_countdown(&mut self, msg: Msg) -> Option<Cmd> {
        let Screen::Countdown(engine) = &mut self.screen else {
            return None;
        };

        if let Some(reset) = msg.downcast_ref::<countdown::ResetMsg>() {
            if reset.id == engine.id() {
                self.screen = Screen::Input(input::Model::with_duration(self.last));
            }
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match key.key {
                KeyCode::Char(' ') => {
                    if engine.running() {
                        engine.pause();
                        return None;
                    }
                    return engine.resume();
                }
                KeyCode::Char('r') | KeyCode::Esc => {
                    return Some(engine.reset());
                }
                _ => return None,
            }
        }

        // Tick and completion messages flow through to the engine.
        engine.update(msg)
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let app = App {
            screen: Screen::Input(input::Model::new()),
            last: Duration::ZERO,
        };
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        match self.screen {
            Screen::Input(_) => self.update_input(msg),
            Screen::Countdown(_) => self.update_countdown(msg),
        }
    }

    fn view(&self) -> String {
        match &self.screen {
            Screen::Input(input) => input.view(),
            Screen::Countdown(engine) => engine.view(),
        }
    }
}
