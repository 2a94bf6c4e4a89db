// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Location registry

use chrono_tz::{Africa, America, Asia, Europe, Tz};
use std::fmt;

/// A selectable location: a display name and its timezone
///
/// All instances live in [`LOCATIONS`]; there is no public constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    name: &'static str,
    zone: Tz,
}

/// All selectable locations, in display order
pub static LOCATIONS: [Location; 5] = [
    Location::new("Japan 🇯🇵", Asia::Tokyo),
    Location::new("France 🇫🇷", Europe::Paris),
    Location::new("Mexico 🇲🇽", America::Mexico_City),
    Location::new("Indonesia 🇮🇩", Asia::Jakarta),
    Location::new("Egypt 🇪🇬", Africa::Cairo),
];

/// Access the registry as a slice
#[inline]
pub fn locations() -> &'static [Location] {
    &LOCATIONS
}

impl Location {
    const fn new(name: &'static str, zone: Tz) -> Self {
        Location { name, zone }
    }

    /// Display name (may contain emoji)
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Timezone
    #[inline]
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// IANA identifier of the timezone, e.g. `"Asia/Tokyo"`
    #[inline]
    pub fn zone_id(&self) -> &'static str {
        self.zone.name()
    }

    /// Find a registry entry by display name
    pub fn find(name: &str) -> Option<&'static Location> {
        LOCATIONS.iter().find(|loc| loc.name == name)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
