// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! World Clock
//!
//! A small KAS application: pick a country from a fixed list and see the
//! current time there, refreshed once per second.
//!
//! This crate is a thin layer over other crates:
//!
//! -   [`world_clock_core`] provides the location registry, time formatting and
//!     session state; all its items are re-exported from this crate
//! -   [`ui`] renders a session with KAS widgets
//! -   [`config`] loads optional configuration

pub mod config;
pub mod ui;

pub use world_clock_core::*;

#[doc(inline)] pub use ui::WorldClock;
