// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flipbook Nav: the navigation controller of a flipbook view.
//!
//! [`Navigator`] ties the other flipbook crates together. It takes keyboard,
//! button and pointer input, decides whether a page turn, a zoom animation or
//! a plain jump should happen, and answers with [`Command`]s for the host:
//! fetch a spread, push a location, request or cancel an animation frame.
//!
//! Nothing here touches the network, the router or a clock. The host passes
//! monotonic millisecond timestamps in and carries commands out, which keeps
//! every transition reproducible in tests.
//!
//! Tunables live in [`NavigatorConfig`], which can be read from JSON.
//!
//! ## Minimal example
//!
//! ```rust
//! use flipbook_nav::{Command, Key, Navigator, NavigatorConfig, SpreadLayout};
//! use flipbook_spread::Document;
//! use kurbo::{Rect, Size};
//!
//! let pages = r#"[
//!     {"id": "cover", "number": 0, "kind": "cover", "side": "cover"},
//!     {"id": "a1", "number": 1, "kind": "article", "side": "left"},
//!     {"id": "a2", "number": 2, "kind": "article", "side": "right"},
//!     {"id": "back", "number": 3, "kind": "backCover", "side": "end"}
//! ]"#;
//! let doc = Document::from_json(pages, "[]").unwrap();
//!
//! let mut nav = Navigator::new(NavigatorConfig::default(), doc.spread("0").unwrap());
//! nav.set_layout(SpreadLayout {
//!     viewport: Size::new(800.0, 600.0),
//!     content: Size::new(800.0, 600.0),
//!     left: None,
//!     right: Some(Rect::new(400.0, 50.0, 760.0, 520.0)),
//! });
//!
//! // The destination is not cached yet, so the turn waits for a fetch.
//! let commands = nav.key(Key::ArrowRight, 0);
//! let [Command::Fetch(label)] = commands.as_slice() else { panic!() };
//! let label = label.clone();
//! let commands = nav.fetch_resolved(&label, Ok(doc.spread(label.as_str()).unwrap()), 5);
//! let [Command::RequestFrame(token)] = commands.as_slice() else { panic!() };
//!
//! // Once the turn lands, the host is asked to route to the new spread.
//! let landed = nav.frame(*token, 5 + 1400);
//! assert_eq!(landed, vec![Command::Push("/flipbook/1_2".into())]);
//! nav.show(doc.spread("1_2").unwrap());
//! assert!(!nav.is_turning());
//! assert_eq!(nav.position_text(), "2 / 3");
//! ```

mod command;
mod config;
mod layout;
mod navigator;

pub use command::{Command, FetchError, Key, NavButton};
pub use config::{ConfigError, HitZoneConfig, NavigatorConfig};
pub use layout::SpreadLayout;
pub use navigator::Navigator;
