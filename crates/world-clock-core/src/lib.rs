// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! World Clock core
//!
//! This crate holds everything which does not depend on the GUI toolkit:
//!
//! -   [`registry`]: the fixed list of selectable [`Location`]s
//! -   [`clock`]: clock sources and the time formatter
//! -   [`session`]: the UI controller state ([`Session`])
//!
//! The `world-clock` crate renders a [`Session`] using KAS widgets.

pub extern crate chrono;
pub extern crate chrono_tz;

pub mod clock;
pub mod registry;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock, current_time_at, time_at};
pub use registry::{LOCATIONS, Location, locations};
pub use session::{PLACEHOLDER, Session, State, Tick, TickToken};
