//! memgrid headless demo.
//!
//! Mounts a grid view on an input router, replays a scripted input
//! session (built in, or JSON from `MEMGRID_SESSION`) and prints a text
//! frame after every event that changed what is on screen.
//! The grid config comes from the first CLI argument or `MEMGRID_CONFIG`.

mod render;
mod session;

use std::path::Path;

use anyhow::{Context, Result};

use memgrid_core::config::GridConfig;
use memgrid_core::drag::Track;
use memgrid_core::{GridView, InputRouter, MountedGrid};

/// Screen placement of the two slider tracks.
const CATEGORY_TRACK: (f32, f32, f32, f32) = (0.0, 0.0, 24.0, 200.0);
const ITEM_TRACK: (f32, f32, f32, f32) = (40.0, 220.0, 300.0, 24.0);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = resolve_config();
    let mut view = GridView::mount(&config).context("invalid grid configuration")?;
    let (x, y, w, h) = CATEGORY_TRACK;
    let category_track = Track::vertical(x, y, w, h);
    let (x, y, w, h) = ITEM_TRACK;
    view.set_tracks(category_track, Track::horizontal(x, y, w, h));

    let events = match std::env::var("MEMGRID_SESSION") {
        Ok(path) => session::load(Path::new(&path))?,
        Err(_) => session::demo(),
    };
    log::info!("Replaying {} input events", events.len());

    let router = InputRouter::new();
    let mounted = MountedGrid::mount(&router, view);
    println!("{}", render::frame(&mounted.view()));

    for event in &events {
        let before = mounted.view().cursor();
        let was_open = mounted.view().overlay().is_open();
        let consumed = router.dispatch(event);
        log::debug!("{event:?} consumed={consumed}");

        let view = mounted.view();
        if view.cursor() != before || view.overlay().is_open() != was_open {
            println!("{}", render::frame(&view));
        }
    }

    let view = mounted.view();
    log::info!(
        "Session finished at {:?} with {} filled memories",
        view.cursor(),
        view.store().filled_count(),
    );
    Ok(())
}

/// Config from CLI arg or `MEMGRID_CONFIG`, else defaults.
fn resolve_config() -> GridConfig {
    let Some(path) = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("MEMGRID_CONFIG").ok())
    else {
        return GridConfig::default();
    };
    match GridConfig::load(Path::new(&path)) {
        Ok(config) => {
            log::info!("Loaded grid config: {path}");
            config
        },
        Err(e) => {
            log::warn!("Failed to load grid config '{path}': {e}, using defaults");
            GridConfig::default()
        },
    }
}
