// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end navigation flows against an in-memory document.

use flipbook_nav::{Command, FetchError, Key, Navigator, NavigatorConfig, SpreadLayout};
use flipbook_pagination::{Page, PageKind, PageSide};
use flipbook_spread::{Document, Route};
use flipbook_timing::{FrameToken, Millis};
use flipbook_turn::TurnPhase;
use flipbook_view::Cursor;
use kurbo::{Point, Rect, Size};

const FRAME: Millis = 16;

fn document() -> Document {
    let pages = (0..16)
        .map(|n| {
            let (kind, side) = match n {
                0 => (PageKind::Cover, PageSide::Cover),
                15 => (PageKind::BackCover, PageSide::End),
                n if n % 2 == 1 => (PageKind::Article, PageSide::Left),
                _ => (PageKind::Article, PageSide::Right),
            };
            Page::new(format!("page-{n}"), n, kind, side)
        })
        .collect();
    Document::new(pages, Vec::new()).unwrap()
}

fn layout() -> SpreadLayout {
    SpreadLayout {
        viewport: Size::new(1000.0, 700.0),
        content: Size::new(1000.0, 700.0),
        left: Some(Rect::new(100.0, 50.0, 450.0, 505.0)),
        right: Some(Rect::new(450.0, 50.0, 800.0, 505.0)),
    }
}

fn navigator_at(doc: &Document, label: &str, config: NavigatorConfig) -> Navigator {
    let mut nav = Navigator::new(config, doc.spread(label).unwrap());
    nav.set_layout(layout());
    nav
}

fn frame_request(commands: &[Command]) -> Option<FrameToken> {
    commands.iter().rev().find_map(|c| match c {
        Command::RequestFrame(token) => Some(*token),
        _ => None,
    })
}

/// Delivers frames every `FRAME` ms until no new frame is requested.
///
/// Returns the commands of the final frame and the time it ran at.
fn run_frames(nav: &mut Navigator, mut token: FrameToken, mut now: Millis) -> (Vec<Command>, Millis) {
    loop {
        now += FRAME;
        let commands = nav.frame(token, now);
        match frame_request(&commands) {
            Some(next) => token = next,
            None => return (commands, now),
        }
    }
}

/// Acts as the router: follows a pushed location and shows the spread.
fn follow(nav: &mut Navigator, doc: &Document, commands: &[Command]) -> String {
    let [Command::Push(location)] = commands else {
        panic!("expected a single push, got {commands:?}");
    };
    match doc.resolve(location) {
        Route::Show(payload) => {
            assert!(nav.show(*payload).is_empty());
        }
        other => panic!("{location} did not resolve: {other:?}"),
    }
    location.clone()
}

#[test]
fn click_on_outer_edge_turns_forward() {
    let doc = document();
    let mut nav = navigator_at(&doc, "1_2", NavigatorConfig::default());

    let commands = nav.click(Point::new(850.0, 300.0), 0);
    let [Command::Fetch(label)] = commands.as_slice() else {
        panic!("expected a fetch, got {commands:?}");
    };
    assert_eq!(label.as_str(), "3_4");
    assert_eq!(nav.turn_phase(), TurnPhase::Loading);
    assert_eq!(nav.cursor(), Cursor::Default);

    let label = label.clone();
    let started = nav.fetch_resolved(&label, Ok(doc.spread("3_4").unwrap()), 40);
    let token = frame_request(&started).unwrap();
    assert_eq!(nav.turn_phase(), TurnPhase::Animating);

    let (last, landed_at) = run_frames(&mut nav, token, 40);
    assert!(landed_at >= 40 + 1400);
    assert_eq!(nav.turn_phase(), TurnPhase::Settling);
    assert_eq!(follow(&mut nav, &doc, &last), "/flipbook/3_4");

    assert_eq!(nav.turn_phase(), TurnPhase::Idle);
    assert_eq!(nav.current().label.as_str(), "3_4");
    assert_eq!(nav.position_text(), "3 / 9");
    assert!(!nav.viewport().is_interaction_suspended());
}

#[test]
fn click_on_inner_edge_does_nothing() {
    let doc = document();
    let mut nav = navigator_at(&doc, "1_2", NavigatorConfig::default());
    assert!(nav.click(Point::new(455.0, 300.0), 0).is_empty());
    assert!(nav.click(Point::new(850.0, 600.0), 0).is_empty());
    assert!(!nav.is_turning());
}

#[test]
fn left_edge_turns_back_to_a_cached_spread() {
    let doc = document();
    let mut nav = navigator_at(&doc, "3_4", NavigatorConfig::default());
    nav.show(doc.spread("1_2").unwrap());
    nav.show(doc.spread("3_4").unwrap());

    let commands = nav.click(Point::new(60.0, 300.0), 0);
    let token = frame_request(&commands).expect("cached spread starts at once");
    let (last, _) = run_frames(&mut nav, token, 0);
    assert_eq!(follow(&mut nav, &doc, &last), "/flipbook/1_2");
}

#[test]
fn failed_fetch_falls_back_to_plain_navigation() {
    let doc = document();
    let mut nav = navigator_at(&doc, "1_2", NavigatorConfig::default());

    let commands = nav.key(Key::ArrowRight, 0);
    let [Command::Fetch(label)] = commands.as_slice() else {
        panic!("expected a fetch, got {commands:?}");
    };
    let label = label.clone();
    let fallback = nav.fetch_resolved(&label, Err(FetchError::Transport("offline".into())), 30);
    assert_eq!(fallback, vec![Command::Push("/flipbook/3_4".into())]);
    assert_eq!(nav.turn_phase(), TurnPhase::Idle);
    assert_eq!(nav.current().label.as_str(), "1_2");
    assert!(!nav.viewport().is_interaction_suspended());

    // A late failure for a turn nobody waits for changes nothing.
    assert!(nav.fetch_resolved(&label, Err(FetchError::Decode("late".into())), 60).is_empty());
}

#[test]
fn reduced_motion_pushes_without_turning() {
    let doc = document();
    let config = NavigatorConfig {
        reduced_motion: true,
        ..NavigatorConfig::default()
    };
    let mut nav = navigator_at(&doc, "5_6", config);
    assert_eq!(
        nav.key(Key::ArrowLeft, 0),
        vec![Command::Push("/flipbook/3_4".into())]
    );
    assert!(!nav.is_turning());
}

#[test]
fn second_request_during_a_turn_is_ignored() {
    let doc = document();
    let mut nav = navigator_at(&doc, "1_2", NavigatorConfig::default());
    assert_eq!(nav.key(Key::ArrowRight, 0).len(), 1);
    assert!(nav.key(Key::ArrowRight, 5).is_empty());
    assert!(nav.key(Key::ArrowLeft, 5).is_empty());
    assert!(nav.click(Point::new(850.0, 300.0), 5).is_empty());
    assert!(nav.double_click(5).is_empty());
}

#[test]
fn no_turn_past_either_end() {
    let doc = document();
    let mut nav = navigator_at(&doc, "0", NavigatorConfig::default());
    assert!(nav.key(Key::ArrowLeft, 0).is_empty());

    let mut nav = navigator_at(&doc, "15", NavigatorConfig::default());
    assert!(nav.key(Key::ArrowRight, 0).is_empty());
    assert!(nav.click(Point::new(850.0, 300.0), 0).is_empty());
}

#[test]
fn zoomed_view_blocks_navigation_until_reset() {
    let doc = document();
    let mut nav = navigator_at(&doc, "1_2", NavigatorConfig::default());

    let token = frame_request(&nav.double_click(0)).unwrap();
    assert!(nav.key(Key::ArrowRight, 10).is_empty(), "animating zoom blocks turns");
    let (_, now) = run_frames(&mut nav, token, 0);
    assert_eq!(nav.zoom_percent(), 150);
    assert_eq!(nav.cursor(), Cursor::Grab);
    assert!(nav.key(Key::ArrowRight, now).is_empty());
    assert!(nav.click(Point::new(850.0, 300.0), now).is_empty());

    nav.pointer_down(Point::new(500.0, 300.0));
    assert_eq!(nav.cursor(), Cursor::Grabbing);
    nav.pointer_move(Point::new(450.0, 280.0));
    nav.pointer_up();
    assert_eq!(nav.cursor(), Cursor::Grab);

    let token = frame_request(&nav.key(Key::Escape, now)).unwrap();
    let (_, now) = run_frames(&mut nav, token, now);
    assert_eq!(nav.zoom_percent(), 100);
    assert!(nav.viewport().is_at_rest());
    assert!(nav.key(Key::Escape, now).is_empty(), "already at rest");
    assert_eq!(nav.key(Key::ArrowRight, now).len(), 1);
}

#[test]
fn hover_over_outer_edge_shows_pointer() {
    let doc = document();
    let mut nav = navigator_at(&doc, "1_2", NavigatorConfig::default());
    nav.pointer_move(Point::new(780.0, 300.0));
    assert_eq!(nav.cursor(), Cursor::Pointer);
    nav.pointer_move(Point::new(460.0, 300.0));
    assert_eq!(nav.cursor(), Cursor::Default);
    nav.pointer_move(Point::new(120.0, 60.0));
    assert_eq!(nav.cursor(), Cursor::Pointer);
    nav.pointer_leave();
    assert_eq!(nav.cursor(), Cursor::Default);
}

#[test]
fn routing_elsewhere_abandons_the_turn() {
    let doc = document();
    let mut nav = navigator_at(&doc, "1_2", NavigatorConfig::default());
    nav.show(doc.spread("3_4").unwrap());
    nav.show(doc.spread("1_2").unwrap());

    let token = frame_request(&nav.key(Key::ArrowRight, 0)).unwrap();
    assert_eq!(nav.turn_phase(), TurnPhase::Animating);

    let commands = nav.show(doc.spread("9_10").unwrap());
    assert_eq!(commands, vec![Command::CancelFrame(token)]);
    assert!(!nav.is_turning());
    assert_eq!(nav.current().label.as_str(), "9_10");
    assert!(nav.frame(token, 100).is_empty());
}
