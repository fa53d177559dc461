use super::*;
use crate::core::Vec2;
use crate::domain::Weapon;
use crate::entities::Ballistic;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

// 10m x 10m, one cell per metre, rock in the bottom row
fn floor_map() -> TerrainMap {
    let mut text = String::new();
    for _ in 0..9 {
        text.push_str("..........\n");
    }
    text.push_str("##########\n");
    TerrainMap::from_ascii(10.0, 10.0, &text).unwrap()
}

fn open_game(width: f64, height: f64) -> GameCore {
    GameCore::new(TerrainMap::open(width, height, 10, 10).unwrap(), GameSettings::default())
}

// === Handles ===

#[test]
fn unknown_and_removed_handles_are_rejected() {
    let mut game = open_game(10.0, 10.0);
    let id = game.add_worm(Vec2::new(5.0, 5.0), 0.0, 0.5, "Ann").unwrap();

    assert_eq!(game.worm(7).unwrap_err(), ModelError::UnknownWorm(7));

    game.remove_worm(id).unwrap();
    assert_eq!(game.move_worm(id, 1), Err(ModelError::UnknownWorm(id)));
    assert!(!game.contains_worm(id));

    // handles are never reused
    let next = game.add_worm(Vec2::new(5.0, 5.0), 0.0, 0.5, "Bob").unwrap();
    assert_ne!(next, id);
}

#[test]
fn add_worm_validates_before_inserting() {
    let mut game = open_game(10.0, 10.0);
    assert!(matches!(
        game.add_worm(Vec2::new(f64::NAN, 1.0), 0.0, 0.5, "Ann"),
        Err(ModelError::InvalidCoordinate { .. })
    ));
    assert!(matches!(
        game.add_worm(Vec2::new(1.0, 1.0), 0.0, 0.1, "Ann"),
        Err(ModelError::InvalidRadius { .. })
    ));
    assert_eq!(
        game.add_worm(Vec2::new(1.0, 1.0), 0.0, 0.5, "ann"),
        Err(ModelError::InvalidName("ann".to_string()))
    );
    assert_eq!(game.worm_count(), 0);
}

// === Motion ===

#[test]
fn moving_out_of_the_world_removes_the_worm() {
    let mut game = open_game(10.0, 10.0);
    let id = game.add_worm(Vec2::new(5.0, 5.0), 0.0, 1.0, "Ann").unwrap();

    game.move_worm(id, 5).unwrap();
    assert!(!game.contains_worm(id));
    assert_eq!(game.worm_count(), 0);
}

#[test]
fn moving_inside_the_world_keeps_the_worm() {
    let mut game = open_game(10.0, 10.0);
    let id = game.add_worm(Vec2::new(2.0, 5.0), 0.0, 1.0, "Ann").unwrap();

    game.move_worm(id, 3).unwrap();
    let worm = game.worm(id).unwrap();
    assert_eq!(worm.position(), Vec2::new(5.0, 5.0));
    assert_eq!(worm.action_points(), 4448 - 3);
}

#[test]
fn jump_lands_where_the_trajectory_says() {
    let mut game = open_game(20.0, 10.0);
    let id = game.add_worm(Vec2::new(2.0, 5.0), FRAC_PI_4, 0.25, "Ann").unwrap();
    let expected = game.worm(id).unwrap().trajectory().landing();

    let landing = game.jump_worm(id).unwrap();
    assert_eq!(landing, expected);
    assert!(landing.x > 2.0);
    assert_eq!(game.worm(id).unwrap().action_points(), 0);
}

#[test]
fn downward_jump_through_core_still_spends_budget() {
    let mut game = open_game(10.0, 10.0);
    let id = game.add_worm(Vec2::new(5.0, 5.0), 3.0 * FRAC_PI_2, 0.5, "Ann").unwrap();

    assert!(matches!(game.jump_worm(id), Err(ModelError::JumpFacingDown(_))));
    assert!(matches!(game.jump_time(id), Err(ModelError::JumpFacingDown(_))));
    let worm = game.worm(id).unwrap();
    assert_eq!(worm.action_points(), 0);
    assert_eq!(worm.position(), Vec2::new(5.0, 5.0));
}

// === Falling ===

#[test]
fn fall_stops_on_the_floor_and_costs_hit_points() {
    let mut game = GameCore::new(floor_map(), GameSettings::default());
    let id = game.add_worm(Vec2::new(5.0, 5.0), 0.0, 0.5, "Ann").unwrap();
    assert!(game.can_fall(id).unwrap());

    let distance = game.fall(id).unwrap();
    assert!((distance - 3.5).abs() < 1e-9, "fell {}", distance);

    let worm = game.worm(id).unwrap();
    assert!((worm.position().y - 1.5).abs() < 1e-9);
    assert_eq!(worm.hit_points(), 556 - 10);
    assert!(game.terrain().is_adjacent(worm.position(), worm.radius()));
    assert!(!game.can_fall(id).unwrap());
    assert_eq!(game.fall(id), Err(ModelError::CannotFall));
}

#[test]
fn falling_out_of_the_world_removes_the_worm() {
    let mut game = open_game(10.0, 10.0);
    let id = game.add_worm(Vec2::new(5.0, 5.0), 0.0, 0.5, "Ann").unwrap();

    let distance = game.fall(id).unwrap();
    assert!(distance > 4.5);
    assert!(!game.contains_worm(id));
}

#[test]
fn worm_poking_out_of_the_world_does_not_fall() {
    let mut game = open_game(10.0, 10.0);
    let id = game.add_worm(Vec2::new(5.0, 9.8), 0.0, 0.5, "Ann").unwrap();

    assert!(!game.can_fall(id).unwrap());
    assert_eq!(game.fall(id), Err(ModelError::CannotFall));
    assert!(game.contains_worm(id));
    assert_eq!(game.worm(id).unwrap().position(), Vec2::new(5.0, 9.8));
}

#[test]
fn fall_damage_follows_settings() {
    let settings = GameSettings { fall_damage_per_metre: 0.0, ..GameSettings::default() };
    let mut game = GameCore::new(floor_map(), settings);
    let id = game.add_worm(Vec2::new(5.0, 5.0), 0.0, 0.5, "Ann").unwrap();

    game.fall(id).unwrap();
    assert_eq!(game.worm(id).unwrap().hit_points(), 556);
}

// === Shooting ===

#[test]
fn rifle_hits_the_worm_in_front() {
    let mut game = open_game(20.0, 10.0);
    let shooter = game.add_worm(Vec2::new(2.0, 5.0), 0.0, 0.5, "Ann").unwrap();
    let target = game.add_worm(Vec2::new(6.0, 5.0), PI, 0.5, "Bob").unwrap();
    assert!(game.can_shoot(shooter).unwrap());

    let report = game.shoot(shooter, 0).unwrap();
    assert_eq!(report.hit, Some(target));
    assert!(!report.left_world);
    assert!((report.impact.x - 5.5).abs() < 1e-9);

    assert_eq!(game.worm(target).unwrap().hit_points(), 556 - 20);
    assert_eq!(game.worm(shooter).unwrap().action_points(), 556 - 10);

    let resting = game.projectile().unwrap();
    assert_eq!(resting.weapon(), Weapon::Rifle);
    assert_eq!(resting.position(), report.impact);
}

#[test]
fn rifle_hits_a_small_worm_between_flight_samples() {
    let mut game = open_game(20.0, 10.0);
    let shooter = game.add_worm(Vec2::new(2.0, 5.0), 0.0, 1.0, "Ann").unwrap();
    // samples fall at x = 3.75 and x = 4.5, both more than r + projectile radius away
    let target = game.add_worm(Vec2::new(4.125, 4.9989), 0.0, 0.25, "Bob").unwrap();

    let report = game.shoot(shooter, 0).unwrap();
    assert_eq!(report.hit, Some(target));
    assert!(report.impact.x > 3.75 && report.impact.x < 4.5);
    assert_eq!(game.worm(target).unwrap().hit_points(), 70 - 20);
}

#[test]
fn long_time_step_still_stops_at_thin_walls() {
    let text = "..........#.........\n".repeat(10);
    let terrain = TerrainMap::from_ascii(20.0, 10.0, &text).unwrap();
    let settings = GameSettings { projectile_time_step: 0.12, ..GameSettings::default() };
    let mut game = GameCore::new(terrain, settings);
    let shooter = game.add_worm(Vec2::new(2.0, 5.0), 0.0, 0.5, "Ann").unwrap();

    // one flight sample jumps from x = 2.5 to x = 11.5, past the wall
    let report = game.shoot(shooter, 0).unwrap();
    assert_eq!(report.hit, None);
    assert!(!report.left_world);
    assert!(report.impact.x > 9.0 && report.impact.x < 11.0, "stopped at {:?}", report.impact);
}

#[test]
fn bazooka_kill_removes_the_target_and_decides_the_game() {
    let mut game = open_game(20.0, 10.0);
    let shooter = game.add_worm(Vec2::new(2.0, 5.0), 0.0, 0.5, "Ann").unwrap();
    let target = game.add_worm(Vec2::new(4.5, 5.0), 0.0, 0.25, "Bob").unwrap();
    game.select_next_weapon(shooter).unwrap();
    assert!(!game.is_game_finished());

    let report = game.shoot(shooter, 100).unwrap();
    assert_eq!(report.hit, Some(target));
    assert!(!game.contains_worm(target));
    assert_eq!(game.winner(), Some("Ann".to_string()));
    assert!(game.is_game_finished());
}

#[test]
fn shot_into_the_floor_stops_in_rock() {
    let mut game = GameCore::new(floor_map(), GameSettings::default());
    let shooter = game.add_worm(Vec2::new(2.0, 1.52), 7.0 * FRAC_PI_4, 0.5, "Ann").unwrap();

    let report = game.shoot(shooter, 0).unwrap();
    assert_eq!(report.hit, None);
    assert!(!report.left_world);
    assert!(report.impact.y < 1.0);
}

#[test]
fn shot_straight_up_leaves_the_world() {
    let mut game = open_game(10.0, 10.0);
    let shooter = game.add_worm(Vec2::new(5.0, 5.0), FRAC_PI_2, 0.5, "Ann").unwrap();

    let report = game.shoot(shooter, 0).unwrap();
    assert!(report.left_world);
    assert_eq!(report.hit, None);
}

#[test]
fn shooting_needs_budget_and_clear_footing() {
    let mut game = GameCore::new(floor_map(), GameSettings::default());
    let buried = game.add_worm(Vec2::new(5.0, 0.5), 0.0, 0.5, "Ann").unwrap();
    assert!(!game.can_shoot(buried).unwrap());
    assert_eq!(game.shoot(buried, 0), Err(ModelError::ShooterObstructed));

    let tired = game.add_worm(Vec2::new(5.0, 5.0), FRAC_PI_2, 0.5, "Bob").unwrap();
    game.jump_worm(tired).unwrap();
    assert!(!game.can_shoot(tired).unwrap());
    assert_eq!(
        game.shoot(tired, 0),
        Err(ModelError::InsufficientActionPoints { required: 10, available: 0 })
    );
}

// === Teams ===

#[test]
fn teams_validate_names_and_capacity() {
    let settings = GameSettings { max_teams: 2, ..GameSettings::default() };
    let mut game = GameCore::new(floor_map(), settings);

    game.add_team("Reds").unwrap();
    assert_eq!(game.add_team("Reds"), Err(ModelError::DuplicateTeam("Reds".to_string())));
    assert_eq!(game.add_team("blues"), Err(ModelError::InvalidName("blues".to_string())));
    game.add_team("Blues").unwrap();
    assert_eq!(game.add_team("Greens"), Err(ModelError::TooManyTeams(2)));
}

#[test]
fn joining_a_team_moves_membership() {
    let mut game = open_game(10.0, 10.0);
    game.add_team("Reds").unwrap();
    game.add_team("Blues").unwrap();
    let id = game.add_worm(Vec2::new(5.0, 5.0), 0.0, 0.5, "Ann").unwrap();

    game.join_team(id, "Reds").unwrap();
    game.join_team(id, "Blues").unwrap();

    assert!(game.team("Reds").unwrap().members().is_empty());
    assert_eq!(game.team("Blues").unwrap().members(), &[id]);
    assert_eq!(game.worm(id).unwrap().team(), Some("Blues"));
    assert_eq!(game.join_team(id, "Greens"), Err(ModelError::UnknownTeam("Greens".to_string())));

    game.remove_worm(id).unwrap();
    assert!(game.team("Blues").unwrap().members().is_empty());
}

#[test]
fn one_team_left_standing_wins() {
    let mut game = open_game(10.0, 10.0);
    game.add_team("Reds").unwrap();
    let a = game.add_worm(Vec2::new(2.0, 5.0), 0.0, 0.5, "Ann").unwrap();
    let b = game.add_worm(Vec2::new(5.0, 5.0), 0.0, 0.5, "Bob").unwrap();
    assert_eq!(game.winner(), None);

    game.join_team(a, "Reds").unwrap();
    assert_eq!(game.winner(), None);
    game.join_team(b, "Reds").unwrap();
    assert_eq!(game.winner(), Some("Reds".to_string()));
}

// === Turns ===

#[test]
fn turns_cycle_through_live_worms() {
    let mut game = open_game(10.0, 10.0);
    assert_eq!(game.start_game(), Err(ModelError::NoWorms));
    assert_eq!(game.next_turn(), Err(ModelError::GameNotStarted));

    let a = game.add_worm(Vec2::new(2.0, 5.0), 0.0, 0.5, "Ann").unwrap();
    let b = game.add_worm(Vec2::new(5.0, 5.0), 0.0, 0.5, "Bob").unwrap();
    let c = game.add_worm(Vec2::new(8.0, 5.0), 0.0, 0.5, "Cid").unwrap();

    assert_eq!(game.start_game().unwrap(), a);
    assert_eq!(game.next_turn().unwrap(), b);
    assert_eq!(game.next_turn().unwrap(), c);
    assert_eq!(game.next_turn().unwrap(), a);

    game.remove_worm(b).unwrap();
    assert_eq!(game.next_turn().unwrap(), c);
    assert_eq!(game.current_worm(), Some(c));
}

#[test]
fn new_turn_restores_budget_and_heals() {
    let mut game = open_game(20.0, 10.0);
    let a = game.add_worm(Vec2::new(2.0, 5.0), 0.0, 0.5, "Ann").unwrap();
    let b = game.add_worm(Vec2::new(6.0, 5.0), 0.0, 0.5, "Bob").unwrap();
    game.start_game().unwrap();

    game.shoot(a, 0).unwrap();
    game.move_worm(b, 1).unwrap();
    assert!(game.projectile().is_some());

    assert_eq!(game.next_turn().unwrap(), b);
    let worm = game.worm(b).unwrap();
    assert_eq!(worm.action_points(), worm.max_action_points());
    assert_eq!(worm.hit_points(), 556 - 20 + 10);
    assert!(game.projectile().is_none());
}

// === Placement ===

#[test]
fn random_placement_is_seeded_and_rests_on_terrain() {
    let mut first = GameCore::new(floor_map(), GameSettings::default());
    let mut second = GameCore::new(floor_map(), GameSettings::default());

    for name in ["Ann", "Bob", "Cid"] {
        let a = first.add_worm_at_random(0.47, name).unwrap();
        let b = second.add_worm_at_random(0.47, name).unwrap();
        let (wa, wb) = (first.worm(a).unwrap(), second.worm(b).unwrap());
        assert_eq!(wa.position(), wb.position());
        assert_eq!(wa.direction(), wb.direction());
        assert!(first.terrain().is_adjacent(wa.position(), wa.radius()));
        assert!((wa.position().y - 1.5).abs() < 1e-9);
    }
}

#[test]
fn applying_settings_reseeds_placement() {
    let mut fresh = GameCore::new(floor_map(), GameSettings::default());
    let mut used = GameCore::new(floor_map(), GameSettings::default());
    used.add_worm_at_random(0.47, "Ann").unwrap();
    used.apply_settings(GameSettings::default());

    let a = fresh.add_worm_at_random(0.47, "Bob").unwrap();
    let b = used.add_worm_at_random(0.47, "Bob").unwrap();
    assert_eq!(fresh.worm(a).unwrap().position(), used.worm(b).unwrap().position());
}

#[test]
fn random_placement_needs_somewhere_to_stand() {
    let mut game = open_game(10.0, 10.0);
    assert_eq!(game.add_worm_at_random(0.5, "Ann"), Err(ModelError::NoAdjacentLocation(0.5)));
    assert!(matches!(
        game.add_worm_at_random(0.1, "Ann"),
        Err(ModelError::InvalidRadius { .. })
    ));
}

// === Snapshots ===

#[test]
fn snapshots_serialize_worm_state() {
    let mut game = open_game(10.0, 10.0);
    game.add_team("Reds").unwrap();
    let id = game.add_worm(Vec2::new(5.0, 5.0), 0.0, 0.5, "Ann").unwrap();
    game.join_team(id, "Reds").unwrap();

    let json = serde_json::to_value(game.worm_snapshot(id).unwrap()).unwrap();
    assert_eq!(json["name"], "Ann");
    assert_eq!(json["team"], "Reds");
    assert_eq!(json["weapon"], "rifle");
    assert_eq!(json["hit_points"], 556);
    assert!(game.projectile_snapshot().is_none());
}

#[test]
fn settings_parse_from_partial_json() {
    let settings = GameSettings::from_json(r#"{"seed": 7, "max_teams": 3}"#).unwrap();
    assert_eq!(settings.seed, 7);
    assert_eq!(settings.max_teams, 3);
    assert_eq!(settings.projectile_time_step, 0.01);

    assert!(matches!(
        GameSettings::from_json(r#"{"projectile_time_step": 0.0}"#),
        Err(SettingsError::TimeStep(_))
    ));
    assert!(matches!(GameSettings::from_json("{"), Err(SettingsError::Parse(_))));
}
