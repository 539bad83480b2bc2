use bevy::prelude::*;

use super::{CursorWorld, MirrorReleased, MirrorStroke};
use crate::common::test_utils::{drain_messages, ensure_messages, run_system_once};
use crate::geometry::Line;
use crate::plugins::player::Player;

#[test]
fn stroke_needs_two_distinct_points() {
    let mut stroke = MirrorStroke::default();
    assert!(!stroke.is_drawing());

    stroke.start_at(Vec2::new(1.0, 1.0));
    assert!(stroke.is_drawing());
    assert!(!stroke.was_drawn());

    stroke.draw_to(Vec2::new(4.0, 5.0));
    assert!(stroke.was_drawn());
    assert_eq!(stroke.line(), Some(Line::new(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0))));

    assert!(stroke.finish().is_some());
    assert!(!stroke.is_drawing());
}

#[test]
fn draw_to_without_start_is_ignored() {
    let mut stroke = MirrorStroke::default();
    stroke.draw_to(Vec2::ONE);
    assert_eq!(stroke.line(), None);
}

#[test]
fn finish_drops_clicks_and_keeps_lines() {
    let mut stroke = MirrorStroke::default();
    stroke.start_at(Vec2::ZERO);
    assert_eq!(stroke.finish(), None);
    assert!(!stroke.is_drawing());

    stroke.start_at(Vec2::ZERO);
    stroke.draw_to(Vec2::X);
    assert_eq!(stroke.finish(), Some(Line::new(Vec2::ZERO, Vec2::X)));
    assert!(!stroke.is_drawing());
}

fn mouse_world(cursor: Option<Vec2>) -> World {
    let mut world = World::new();
    world.insert_resource(CursorWorld(cursor));
    world.insert_resource(MirrorStroke::default());
    world.insert_resource(ButtonInput::<MouseButton>::default());
    ensure_messages::<MirrorReleased>(&mut world);
    world
}

#[test]
fn press_drag_release_emits_line() {
    let mut world = mouse_world(Some(Vec2::new(10.0, 10.0)));

    world.resource_mut::<ButtonInput<MouseButton>>().press(MouseButton::Left);
    run_system_once(&mut world, super::track_stroke);

    {
        let mut buttons = world.resource_mut::<ButtonInput<MouseButton>>();
        buttons.clear();
    }
    world.resource_mut::<CursorWorld>().0 = Some(Vec2::new(10.0, 50.0));
    run_system_once(&mut world, super::track_stroke);
    assert!(world.resource::<MirrorStroke>().was_drawn());

    world.resource_mut::<ButtonInput<MouseButton>>().release(MouseButton::Left);
    run_system_once(&mut world, super::track_stroke);

    let msgs = drain_messages::<MirrorReleased>(&mut world);
    assert_eq!(
        msgs,
        vec![MirrorReleased { line: Line::new(Vec2::new(10.0, 10.0), Vec2::new(10.0, 50.0)) }]
    );
    assert!(!world.resource::<MirrorStroke>().is_drawing());
}

#[test]
fn click_without_drag_emits_nothing() {
    let mut world = mouse_world(Some(Vec2::new(3.0, 3.0)));

    world.resource_mut::<ButtonInput<MouseButton>>().press(MouseButton::Left);
    run_system_once(&mut world, super::track_stroke);
    world.resource_mut::<ButtonInput<MouseButton>>().release(MouseButton::Left);
    run_system_once(&mut world, super::track_stroke);

    assert!(drain_messages::<MirrorReleased>(&mut world).is_empty());
}

#[test]
fn track_stroke_without_mouse_is_a_no_op() {
    let mut world = World::new();
    world.insert_resource(CursorWorld(Some(Vec2::ONE)));
    world.insert_resource(MirrorStroke::default());
    ensure_messages::<MirrorReleased>(&mut world);

    run_system_once(&mut world, super::track_stroke);

    assert!(!world.resource::<MirrorStroke>().is_drawing());
}

#[test]
fn release_teleports_player_to_reflection() {
    let mut world = World::new();
    ensure_messages::<MirrorReleased>(&mut world);
    let player = world.spawn((Player, Transform::from_xyz(0.0, 0.0, 1.0))).id();

    world.write_message(MirrorReleased {
        line: Line::new(Vec2::new(5.0, 0.0), Vec2::new(5.0, 10.0)),
    });
    run_system_once(&mut world, super::apply_reflection);

    let tf = world.get::<Transform>(player).unwrap();
    assert!(tf.translation.truncate().abs_diff_eq(Vec2::new(10.0, 0.0), 1e-4));
    assert_eq!(tf.translation.z, 1.0);
}

#[test]
fn degenerate_line_leaves_player_in_place() {
    let mut world = World::new();
    ensure_messages::<MirrorReleased>(&mut world);
    let player = world.spawn((Player, Transform::from_xyz(7.0, -2.0, 1.0))).id();

    world.write_message(MirrorReleased { line: Line::new(Vec2::ONE, Vec2::ONE) });
    run_system_once(&mut world, super::apply_reflection);

    let tf = world.get::<Transform>(player).unwrap();
    assert_eq!(tf.translation, Vec3::new(7.0, -2.0, 1.0));
}

#[test]
fn cursor_is_none_without_window() {
    let mut world = World::new();
    world.insert_resource(CursorWorld(Some(Vec2::ONE)));

    run_system_once(&mut world, super::update_cursor_world);

    assert_eq!(world.resource::<CursorWorld>().0, None);
}
