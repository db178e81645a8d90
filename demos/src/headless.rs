// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless flipbook driver.
//!
//! Loads a document from `pages.json` and `companies.json`, opens a spread and
//! turns pages, playing the part of the host: it answers fetches from the
//! document, routes pushed locations and delivers frames on a simulated
//! clock. Run with `RUST_LOG` unset to see the navigator's own logging.

use std::collections::VecDeque;
use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use flipbook_nav::{Command, FetchError, Navigator, NavigatorConfig, SpreadLayout};
use flipbook_pagination::Direction;
use flipbook_spread::{Document, PAGE_ASPECT_RATIO, ROUTE_PREFIX, Route, SpreadPayload};
use flipbook_timing::Millis;
use kurbo::{Rect, Size};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "flipbook_headless",
    version,
    about = "Drive a flipbook navigator without a UI"
)]
struct Args {
    /// Directory holding `pages.json` and `companies.json`.
    #[arg(long, default_value = "demos/data")]
    data: PathBuf,
    /// Label of the spread to open.
    #[arg(long, default_value = "0")]
    start: String,
    /// Which way to turn.
    #[arg(long, value_enum, default_value_t = Way::Next)]
    direction: Way,
    /// How many turns to make; stops early at the end of the document.
    #[arg(long, default_value_t = 3)]
    turns: usize,
    /// Simulated time between animation frames, in milliseconds.
    #[arg(long, default_value_t = 16)]
    frame_ms: Millis,
    /// Zoom in before turning, to show that turns wait for the reset.
    #[arg(long)]
    zoom_first: bool,
    /// JSON navigator configuration.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Way {
    Next,
    Prev,
}

impl From<Way> for Direction {
    fn from(way: Way) -> Self {
        match way {
            Way::Next => Self::Next,
            Way::Prev => Self::Prev,
        }
    }
}

/// Plays the host side of the navigator contract.
struct Host {
    doc: Document,
    nav: Navigator,
    now: Millis,
    frame_ms: Millis,
}

impl Host {
    /// Carries out `commands` and everything they lead to.
    fn run(&mut self, commands: Vec<Command>) -> Result<(), Box<dyn Error>> {
        let mut queue = VecDeque::from(commands);
        while let Some(command) = queue.pop_front() {
            match command {
                Command::Fetch(label) => {
                    self.now += self.frame_ms;
                    let result = self.doc.spread(label.as_str()).map_err(FetchError::from);
                    queue.extend(self.nav.fetch_resolved(&label, result, self.now));
                }
                Command::RequestFrame(token) => {
                    self.now += self.frame_ms;
                    queue.extend(self.nav.frame(token, self.now));
                    if let Some(scene) = self.nav.turn_scene() {
                        debug!(
                            progress = scene.progress,
                            angle = scene.pose.angle,
                            mirrored = scene.pose.mirrored,
                            "turn frame"
                        );
                    }
                }
                Command::CancelFrame(token) => debug!(token = token.id(), "frame cancelled"),
                Command::Push(location) => match self.doc.resolve(&location) {
                    Route::Show(payload) => queue.extend(self.nav.show(*payload)),
                    Route::Redirect(to) => queue.push_back(Command::Push(to)),
                    Route::NotFound => return Err(format!("no spread at {location}").into()),
                },
            }
        }
        Ok(())
    }
}

/// Opens `label`, following a canonical redirect if there is one.
fn open(doc: &Document, label: &str) -> Result<SpreadPayload, Box<dyn Error>> {
    let mut location = format!("{ROUTE_PREFIX}{label}");
    loop {
        match doc.resolve(&location) {
            Route::Show(payload) => return Ok(*payload),
            Route::Redirect(to) => {
                info!(from = %location, %to, "redirected");
                location = to;
            }
            Route::NotFound => return Err(format!("no spread labelled {label:?}").into()),
        }
    }
}

/// Two pages side by side, centered in `viewport` with a small margin.
fn layout_for(viewport: Size, payload: &SpreadPayload) -> SpreadLayout {
    let height = viewport.height * 0.85;
    let width = height * PAGE_ASPECT_RATIO;
    let top = (viewport.height - height) / 2.0;
    let spine = viewport.width / 2.0;
    let sides = payload.sides();
    SpreadLayout {
        viewport,
        content: viewport,
        left: sides
            .left
            .map(|_| Rect::new(spine - width, top, spine, top + height)),
        right: sides
            .right
            .map(|_| Rect::new(spine, top, spine + width, top + height)),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("flipbook_nav=debug,flipbook_spread=debug,info")
        .init();

    let args = Args::parse();
    let pages = std::fs::read_to_string(args.data.join("pages.json"))?;
    let companies = std::fs::read_to_string(args.data.join("companies.json"))?;
    let doc = Document::from_json(&pages, &companies)?;
    let config = match &args.config {
        Some(path) => NavigatorConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => NavigatorConfig::default(),
    };

    let viewport = Size::new(1280.0, 800.0);
    let initial = open(&doc, &args.start)?;
    let layout = layout_for(viewport, &initial);
    let mut nav = Navigator::new(config, initial);
    nav.set_layout(layout);
    let mut host = Host {
        doc,
        nav,
        now: 0,
        frame_ms: args.frame_ms,
    };
    println!("{} ({})", host.nav.current().label, host.nav.position_text());

    if args.zoom_first {
        let commands = host.nav.double_click(host.now);
        host.run(commands)?;
        println!("zoomed to {}%", host.nav.zoom_percent());
        let blocked = host.nav.request_navigate(args.direction.into(), host.now);
        if blocked.is_empty() {
            warn!("turn refused while zoomed in");
        }
        let commands = host.nav.key(flipbook_nav::Key::Escape, host.now);
        host.run(commands)?;
        println!("zoom reset to {}%", host.nav.zoom_percent());
    }

    for _ in 0..args.turns {
        let started = host.now;
        let commands = host.nav.request_navigate(args.direction.into(), host.now);
        if commands.is_empty() {
            info!("no spread further in that direction");
            break;
        }
        host.run(commands)?;
        let layout = layout_for(viewport, host.nav.current());
        host.nav.set_layout(layout);
        println!(
            "{} ({}) after {} ms",
            host.nav.current().label,
            host.nav.position_text(),
            host.now - started
        );
    }

    let commands = host.nav.teardown();
    host.run(commands)?;
    Ok(())
}
