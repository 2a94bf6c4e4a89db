// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Session state
//!
//! A [`Session`] holds the three observable UI cells: whether the location
//! dropdown is open, the selected [`Location`] and the display string. It
//! also owns the identity of the refresh loop: each change of selection issues
//! a new [`TickToken`] and ticks presenting any other token are ignored. The
//! caller is responsible for scheduling ticks (e.g. with a toolkit timer).

use crate::clock::{Clock, time_at};
use crate::registry::Location;

/// Display text while no location is selected
pub const PLACEHOLDER: &str = "No location selected";

/// Identity of a refresh loop
///
/// Tokens are issued by [`Session::select`]. A token is *active* until the
/// next token is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickToken(u64);

impl TickToken {
    /// Generation number (starts at 1, increments per new selection)
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Selection state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// No location selected
    Idle,
    /// A refresh loop is active for this location
    Tracking(&'static Location),
}

/// Result of [`Session::tick`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Tick {
    /// The display string was recomputed; schedule the next tick
    Updated,
    /// The token is not (or no longer) active; do not reschedule
    Superseded,
}

/// UI controller state
#[derive(Clone, Debug)]
pub struct Session {
    dropdown_open: bool,
    selected: Option<&'static Location>,
    display: String,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    /// Construct: idle, dropdown closed, showing [`PLACEHOLDER`]
    pub fn new() -> Self {
        Session {
            dropdown_open: false,
            selected: None,
            display: PLACEHOLDER.to_string(),
            generation: 0,
        }
    }

    /// Current selection state
    pub fn state(&self) -> State {
        match self.selected {
            None => State::Idle,
            Some(loc) => State::Tracking(loc),
        }
    }

    /// The selected location, if any
    #[inline]
    pub fn selected(&self) -> Option<&'static Location> {
        self.selected
    }

    /// Whether the dropdown is open
    #[inline]
    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// The text to display
    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Token of the active refresh loop, if any
    pub fn active_token(&self) -> Option<TickToken> {
        self.selected.map(|_| TickToken(self.generation))
    }

    /// Toggle the dropdown, returning the new visibility
    pub fn toggle_dropdown(&mut self) -> bool {
        self.dropdown_open = !self.dropdown_open;
        log::debug!("Session::toggle_dropdown: open={}", self.dropdown_open);
        self.dropdown_open
    }

    /// Close the dropdown without selecting
    pub fn dismiss_dropdown(&mut self) {
        if self.dropdown_open {
            log::debug!("Session::dismiss_dropdown");
            self.dropdown_open = false;
        }
    }

    /// Handle a press of the dropdown toggle, returning the new visibility
    ///
    /// `shown` is whether the dropdown is currently on screen. A toolkit may
    /// close popups as a press starts, before the press is reported; if the
    /// flag is set but the dropdown is no longer shown, this press is taken as
    /// the close and the dropdown stays closed.
    pub fn press_dropdown(&mut self, shown: bool) -> bool {
        if self.dropdown_open && !shown {
            self.dismiss_dropdown();
            return false;
        }
        self.toggle_dropdown()
    }

    /// Clear the flag if the dropdown is no longer `shown`
    pub fn sync_dropdown(&mut self, shown: bool) {
        if !shown {
            self.dismiss_dropdown();
        }
    }

    /// Select `location` and close the dropdown
    ///
    /// Returns a new token if the selection changed: the previous loop (if
    /// any) is superseded before this returns, so the caller may arm a timer
    /// for the new token immediately. Re-selecting the current location
    /// returns `None` and leaves the running loop untouched.
    ///
    /// The display string is not reset; it keeps its previous value until the
    /// first tick of the new loop.
    pub fn select(&mut self, location: &'static Location) -> Option<TickToken> {
        self.dropdown_open = false;
        if self.selected == Some(location) {
            log::debug!("Session::select: {location} already selected");
            return None;
        }

        self.generation += 1;
        self.selected = Some(location);
        log::debug!(
            "Session::select: tracking {location} ({}), token {}",
            location.zone_id(),
            self.generation
        );
        Some(TickToken(self.generation))
    }

    /// Recompute the display string for the loop identified by `token`
    ///
    /// Ticks for superseded tokens do not write.
    pub fn tick(&mut self, token: TickToken, clock: &impl Clock) -> Tick {
        match self.selected {
            Some(loc) if token.0 == self.generation => {
                self.display = time_at(loc.name(), loc.zone(), clock.now());
                log::trace!("Session::tick: {}", self.display);
                Tick::Updated
            }
            _ => {
                log::trace!("Session::tick: dropping superseded token {}", token.0);
                Tick::Superseded
            }
        }
    }
}
