// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! World clock application

use kas::window::Window;
use world_clock::WorldClock;
use world_clock::config::{Config, Options, warn_about_error};

fn main() -> kas::runner::Result<()> {
    env_logger::init();

    let options = Options::from_env();
    let config = options.read_config().unwrap_or_else(|error| {
        warn_about_error("failed to read config", &error);
        Config::default()
    });
    log::info!("Starting \"{}\" with {config:?}", config.title);

    let ui = WorldClock::new(config.tick_interval())
        .with_initial_location(config.initial_location());
    let window = Window::new(ui, config.title.clone()).escapable();

    let theme = kas::theme::FlatTheme::new();
    let mut runner = kas::runner::Runner::with_theme(theme).build(())?;
    let _ = runner.config_mut().font.set_size(config.font_size);
    if let Some(scheme) = config.color_scheme.as_deref() {
        let _ = runner.config_mut().theme.set_active_scheme(scheme);
    }
    runner.with(window).run()
}
