// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The world clock widget

use kas::event::TimerHandle;
use kas::layout::AlignHints;
use kas::prelude::*;
use kas::widgets::{AccessLabel, Button, Column, Label};
use kas::window::Popup;
use std::time::Duration;
use world_clock_core::{Location, Session, SystemClock, Tick, TickToken, locations};

/// Message: toggle the location dropdown
#[derive(Clone, Debug)]
struct ToggleLocations;

/// Message: pick the location at this registry index
#[derive(Clone, Debug)]
struct PickLocation(usize);

/// Dropdown content: one button per registry entry
type LocationList = Column<Vec<Button<AccessLabel>>>;

/// The timer handle used for the refresh loop identified by `token`
///
/// Each loop gets its own handle, hence a timer armed for a superseded loop can
/// never be merged with (or mistaken for) that of the active loop.
pub fn timer_handle(token: TickToken) -> TimerHandle {
    TimerHandle::new(token.get().cast(), true)
}

/// The refresh loop a timer armed with `handle` belongs to, if still active
///
/// Timers for superseded loops yield `None`: they must be dropped and not
/// re-armed.
pub fn loop_token(session: &Session, handle: TimerHandle) -> Option<TickToken> {
    session
        .active_token()
        .filter(|token| timer_handle(*token) == handle)
}

fn location_list() -> LocationList {
    Column::new(
        locations()
            .iter()
            .enumerate()
            .map(|(index, loc)| Button::label_msg(loc.name(), PickLocation(index)))
            .collect(),
    )
}

#[impl_self]
mod WorldClock {
    /// Shows the time at a location chosen from a dropdown
    ///
    /// The label shows a placeholder until a location is picked, then the
    /// current time at that location, refreshed once per tick interval.
    #[widget]
    #[layout(column![
        self.label.align(AlignHints::CENTER),
        self.button.align(AlignHints::CENTER),
    ])]
    pub struct WorldClock {
        core: widget_core!(),
        #[widget]
        label: Label<String>,
        #[widget]
        button: Button<AccessLabel>,
        #[widget]
        dropdown: Popup<LocationList>,
        session: Session,
        clock: SystemClock,
        interval: Duration,
        initial: Option<&'static Location>,
    }

    impl Self {
        /// Construct, refreshing the time every `interval`
        pub fn new(interval: Duration) -> Self {
            let session = Session::new();
            WorldClock {
                core: Default::default(),
                label: Label::new(session.display().to_string()),
                button: Button::label_msg("Select Location", ToggleLocations),
                dropdown: Popup::new(location_list(), Direction::Down),
                session,
                clock: SystemClock,
                interval,
                initial: None,
            }
        }

        /// Select `location` once configured
        pub fn with_initial_location(mut self, location: Option<&'static Location>) -> Self {
            self.initial = location;
            self
        }

        /// Access the session state
        ///
        /// The dropdown flag is resynchronised with the popup on each event
        /// this widget handles; see also [`Self::is_dropdown_open`].
        pub fn session(&self) -> &Session {
            &self.session
        }

        /// Whether the location list is on screen
        pub fn is_dropdown_open(&self) -> bool {
            self.dropdown.is_open()
        }

        /// The popup may close itself (e.g. on a click elsewhere)
        fn sync_dropdown(&mut self) {
            self.session.sync_dropdown(self.dropdown.is_open());
        }

        // Not preceded by a sync: a mouse press on the button closes the popup
        // before the button reports the click.
        fn toggle_dropdown(&mut self, cx: &mut EventCx) {
            if self.session.press_dropdown(self.dropdown.is_open()) {
                self.dropdown.open(cx, &(), self.button.id(), true);
            } else {
                self.dropdown.close(cx);
            }
        }

        fn select(&mut self, cx: &mut EventState, location: &'static Location) {
            if let Some(token) = self.session.select(location) {
                log::info!("WorldClock: showing time in {location} ({})", location.zone_id());
                // The first tick is immediate; the label keeps its old text until then.
                cx.request_timer(self.id(), timer_handle(token), Duration::ZERO);
            }
        }

        fn tick(&mut self, cx: &mut EventCx, handle: TimerHandle) {
            let Some(token) = loop_token(&self.session, handle) else {
                log::trace!("WorldClock::tick: dropping timer {handle:?}");
                return;
            };

            match self.session.tick(token, &self.clock) {
                Tick::Updated => {
                    self.label.set_string(cx, self.session.display().to_string());
                    cx.request_timer(self.id(), handle, self.interval);
                }
                Tick::Superseded => (),
            }
        }
    }

    impl Events for Self {
        type Data = ();

        fn configure(&mut self, cx: &mut ConfigCx) {
            if let Some(location) = self.initial {
                self.select(cx, location);
            }
        }

        fn handle_event(&mut self, cx: &mut EventCx, _: &(), event: Event) -> IsUsed {
            self.sync_dropdown();
            match event {
                Event::Timer(handle) => {
                    self.tick(cx, handle);
                    Used
                }
                _ => Unused,
            }
        }

        fn handle_messages(&mut self, cx: &mut EventCx, _: &()) {
            if let Some(ToggleLocations) = cx.try_pop() {
                self.toggle_dropdown(cx);
            } else if let Some(PickLocation(index)) = cx.try_pop() {
                self.dropdown.close(cx);
                match locations().get(index) {
                    Some(location) => self.select(cx, location),
                    None => log::warn!("WorldClock: no location at index {index}"),
                }
            }
        }
    }
}
