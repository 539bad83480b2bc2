use bevy::prelude::*;

use crate::common::test_utils::{ensure_messages, run_system_once};
use crate::plugins::enemies::GameOver;

fn labels(world: &mut World) -> usize {
    world.query::<&super::GameOverLabel>().iter(world).count()
}

#[test]
fn label_appears_once_on_game_over() {
    let mut world = World::new();
    ensure_messages::<GameOver>(&mut world);

    run_system_once(&mut world, super::show_game_over);
    assert_eq!(labels(&mut world), 0);

    let player = world.spawn_empty().id();
    let enemy = world.spawn_empty().id();
    world.write_message(GameOver { player, enemy });
    run_system_once(&mut world, super::show_game_over);
    assert_eq!(labels(&mut world), 1);

    // A repeated signal does not stack labels.
    world.write_message(GameOver { player, enemy });
    run_system_once(&mut world, super::show_game_over);
    assert_eq!(labels(&mut world), 1);
}
