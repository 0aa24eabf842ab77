//! End-to-end gameplay scenarios through the public API

use glam::Vec3;
use island_royale::consts::SIM_DT;
use island_royale::sim::{
    EnemySpawn, GameEvent, GamePhase, LootContents, LootSpawn, TickInput, Weapon, WorldSetup,
    WorldState, tick,
};
use island_royale::{Session, Tuning};
use proptest::prelude::*;

/// Flat open ground with nothing on it
fn empty_setup() -> WorldSetup {
    WorldSetup {
        obstacles: Vec::new(),
        enemies: Vec::new(),
        loot: Vec::new(),
        ..Default::default()
    }
}

fn loot_at(name: &str, x: f32, z: f32, contents: LootContents) -> LootSpawn {
    LootSpawn {
        name: name.to_string(),
        pos: [x, 0.5, z],
        contents,
    }
}

fn frames(session: &mut Session, count: usize) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..count {
        session.advance(SIM_DT);
        events.extend(session.snapshot().events.iter().cloned());
    }
    events
}

#[test]
fn pistol_kills_enemy_in_seven_hits() {
    let setup = WorldSetup {
        enemies: vec![EnemySpawn {
            pos: [10.0, 0.0, 0.0],
            health: 100,
        }],
        ..empty_setup()
    };
    let mut session = Session::with_config(1, Tuning::default(), setup).expect("valid config");
    session.start();
    frames(&mut session, 1);

    // Torso sits at (10, 1, 0); the eye is at (0, 2, 0)
    session.input_mut().aim = Vec3::new(10.0, -1.0, 0.0).normalize();
    session.input_mut().shoot = true;

    frames(&mut session, 1);
    assert_eq!(session.snapshot().enemies[0].health, 85);

    // Six more shots at 400 ms intervals
    let events = frames(&mut session, 60 * 3);
    let enemy = &session.snapshot().enemies[0];
    assert!(enemy.is_dead);
    assert_eq!(enemy.health, 0);
    assert_eq!(session.snapshot().player.score, 1);
    let kills = events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemyEliminated { .. }))
        .count();
    assert_eq!(kills, 1);

    // Shots keep firing but can no longer hit the corpse
    let events = frames(&mut session, 60);
    assert!(events.contains(&GameEvent::ShotFired { hit: None }));
    assert_eq!(session.snapshot().player.score, 1);
}

#[test]
fn zone_exposure_ends_in_one_game_over() {
    let tuning = Tuning {
        zone_damage_chance: 1.0,
        ..Default::default()
    };
    let setup = WorldSetup {
        player_spawn: [120.0, 2.0, 0.0],
        enemies: vec![EnemySpawn {
            pos: [-120.0, 0.0, 0.0],
            health: 100,
        }],
        ..empty_setup()
    };
    let mut session = Session::with_config(9, tuning, setup).expect("valid config");
    session.start();

    let events = frames(&mut session, 1);
    assert_eq!(session.snapshot().player.health, 99);
    assert_eq!(session.snapshot().enemies[0].health, 98);
    assert!(events.contains(&GameEvent::ZoneDamage {
        player_hit: true,
        enemies_hit: 1,
    }));

    let events = frames(&mut session, 200);
    let state = session.snapshot();
    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.player.health, 0);
    // Zone kills count toward the score
    assert!(state.enemies[0].is_dead);
    assert_eq!(state.player.score, 1);
    let overs = events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .count();
    assert_eq!(overs, 1);

    // The world is frozen until restart
    let ticks = state.time_ticks;
    frames(&mut session, 30);
    assert_eq!(session.snapshot().time_ticks, ticks);

    session.restart();
    assert_eq!(session.snapshot().phase, GamePhase::Ready);
    assert_eq!(session.snapshot().player.health, 100);
}

#[test]
fn medkit_heals_to_max() {
    let setup = WorldSetup {
        loot: vec![loot_at("Medkit", 1.0, 0.0, LootContents::Medkit { amount: 50 })],
        ..empty_setup()
    };
    let mut state = WorldState::with_config(1, Tuning::default(), setup);
    state.start();
    state.player.health = 80;

    let input = TickInput {
        interact: true,
        aim: Vec3::new(1.0, -1.5, 0.0),
        ..Default::default()
    };
    tick(&mut state, &input, SIM_DT);
    assert_eq!(state.player.health, 100);
    assert!(state.loot.is_empty());
    assert_eq!(
        state.messages.last().map(|m| m.text.as_str()),
        Some("Used Medkit")
    );
}

#[test]
fn weapon_pickup_appends_and_equips() {
    let setup = WorldSetup {
        loot: vec![loot_at("AK-47", 1.0, 0.0, LootContents::Weapon(Weapon::rifle()))],
        ..empty_setup()
    };
    let mut state = WorldState::with_config(1, Tuning::default(), setup);
    state.start();

    let shoot = TickInput {
        shoot: true,
        aim: Vec3::Y,
        ..Default::default()
    };
    tick(&mut state, &shoot, SIM_DT);
    assert_eq!(state.player.loadout.ammo(), 14);

    let pick = TickInput {
        interact: true,
        aim: Vec3::new(1.0, -1.5, 0.0),
        ..Default::default()
    };
    tick(&mut state, &pick, SIM_DT);
    let loadout = &state.player.loadout;
    assert_eq!(loadout.inventory().len(), 2);
    assert_eq!(loadout.current_index(), 1);
    assert_eq!(loadout.current().name, "AK-47");
    assert_eq!(loadout.ammo(), 30);
    assert!(state.events.iter().any(|e| matches!(e, GameEvent::LootPicked { .. })));
}

#[test]
fn same_seed_same_run() {
    let tuning = Tuning {
        zone_damage_chance: 0.3,
        ..Default::default()
    };
    let run = || {
        let setup = WorldSetup {
            player_spawn: [80.0, 2.0, 0.0],
            ..WorldSetup::default()
        };
        let mut session = Session::with_config(4242, tuning.clone(), setup).expect("valid config");
        session.start();
        session.input_mut().movement.right = true;
        session.input_mut().shoot = true;
        frames(&mut session, 600);
        session.snapshot_json().expect("serializes")
    };
    assert_eq!(run(), run());
}

/// One scripted step: which control to use and for how many ticks
#[derive(Debug, Clone)]
enum Step {
    Fire(usize),
    Reload,
    Select(usize),
    Refill,
    Wait(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (1usize..120).prop_map(Step::Fire),
        Just(Step::Reload),
        (0usize..3).prop_map(Step::Select),
        Just(Step::Refill),
        (1usize..200).prop_map(Step::Wait),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ammo_stays_within_magazine(steps in prop::collection::vec(step_strategy(), 1..25)) {
        let mut state = WorldState::with_config(3, Tuning::default(), empty_setup());
        state.start();
        state.player.loadout.equip(Weapon::rifle());

        for step in steps {
            let (input, ticks) = match step {
                Step::Fire(n) => (TickInput { shoot: true, aim: Vec3::Y, ..Default::default() }, n),
                Step::Reload => (TickInput { reload: true, ..Default::default() }, 1),
                Step::Select(i) => (TickInput { select_weapon: Some(i), ..Default::default() }, 1),
                Step::Refill => {
                    state.player.loadout.refill();
                    (TickInput::default(), 1)
                }
                Step::Wait(n) => (TickInput::default(), n),
            };
            for _ in 0..ticks {
                tick(&mut state, &input, SIM_DT);
                let loadout = &state.player.loadout;
                prop_assert!(loadout.ammo() <= loadout.current().ammo_capacity);
            }
        }
    }
}
