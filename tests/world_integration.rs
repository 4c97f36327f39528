use life_modes::control::{Key, Prompt, RunState};
use life_modes::game_of_life::{Layout, RuleFamily, RuleTable, Transition};
use life_modes::world::{Flow, World};

fn blank_world(columns: usize, rows: usize, family: RuleFamily) -> World {
    let layout = Layout::exact(columns, rows, 8).expect("layout");
    let mut world = World::with_layout(layout, family, 0.0, Some(2024)).expect("world");
    world.clear();
    world.tick();
    world
}

fn live_indices(world: &World) -> Vec<usize> {
    (0..world.cell_count())
        .filter(|&i| world.cell_alive_at(i))
        .collect()
}

#[test]
fn lone_cell_on_three_by_three_dies() {
    let mut world = blank_world(3, 3, RuleFamily::Conway);
    let centre = world.grid().to_index(1, 1).expect("in range");
    world.set_cell(centre, true).expect("in range");

    world.advance();

    assert!(live_indices(&world).is_empty());
}

#[test]
fn corner_cell_counts_wrapped_diagonal() {
    let mut world = blank_world(6, 5, RuleFamily::Conway);
    let corner = world.grid().to_index(5, 4).expect("in range");
    world.set_cell(corner, true).expect("in range");

    assert_eq!(world.engine().neighbour_count(0), 1);
    assert_eq!(world.engine().neighbour_count(corner), 0);
}

#[test]
fn empty_grids_stay_empty_under_every_family() {
    for family in RuleFamily::ALL {
        let mut world = blank_world(9, 7, family);
        for _ in 0..4 {
            world.advance();
        }
        assert!(live_indices(&world).is_empty(), "{} produced spontaneous life", family);
    }
}

#[test]
fn seeded_runs_repeat_bit_for_bit() {
    let layout = Layout::exact(32, 24, 4).expect("layout");
    for family in [RuleFamily::Conway, RuleFamily::DayAndNight, RuleFamily::Morley] {
        let mut a = World::with_layout(layout, family, 0.4, Some(17)).expect("world");
        let mut b = World::with_layout(layout, family, 0.4, Some(17)).expect("world");
        a.run();
        b.run();
        for _ in 0..25 {
            a.tick();
            b.tick();
            assert_eq!(a.grid(), b.grid());
        }
    }
}

#[test]
fn extinction_and_saturation_both_stop() {
    let mut dying = blank_world(5, 5, RuleFamily::Conway);
    dying.set_cell(6, true).expect("in range");
    dying.set_cell(18, true).expect("in range");
    dying.run();
    dying.tick();
    assert_eq!(dying.state(), RunState::Stop);
    assert_eq!(dying.live_count(), 0);

    let mut full = blank_world(5, 5, RuleFamily::LifeWithoutDeath);
    full.uniform_seed(1.0).expect("valid density");
    full.run();
    full.tick();
    assert_eq!(full.state(), RunState::Stop);
    assert_eq!(full.live_count(), 25);
}

#[test]
fn ages_grow_while_alive_and_reset_on_death() {
    let mut world = blank_world(8, 8, RuleFamily::Conway);
    let block = [(3, 3), (4, 3), (3, 4), (4, 4)];
    for (x, y) in block {
        let index = world.grid().to_index(x, y).expect("in range");
        world.set_cell(index, true).expect("in range");
    }
    let watched = world.grid().to_index(3, 3).expect("in range");
    world.run();

    for n in 1..=6u32 {
        world.tick();
        assert_eq!(world.cell_age_at(watched), n + 1);
    }
    assert_eq!(world.max_age_seen(), 7);

    // a lone survivor of the block dies next generation
    for (x, y) in block.iter().skip(1) {
        let index = world.grid().to_index(*x, *y).expect("in range");
        world.set_cell(index, false).expect("in range");
    }
    world.advance();
    assert_eq!(world.cell_age_at(watched), 0);
}

#[test]
fn mode_prompt_cycles_and_commits() {
    let mut world = blank_world(4, 4, RuleFamily::Conway);

    world.begin_mode_prompt();
    assert_eq!(world.step_mode_selection(-1).index(), 11);
    world.cancel_prompt();
    assert_eq!(world.family(), RuleFamily::Conway);

    world.begin_mode_prompt();
    for _ in 0..3 {
        world.step_mode_selection(1);
    }
    assert_eq!(world.prompt(), Prompt::ModeChoice);
    assert_eq!(world.confirm_mode_selection(), RuleFamily::B25S4);
    assert_eq!(world.prompt(), Prompt::None);

    use Transition::*;
    assert_eq!(
        world.engine().table(),
        &RuleTable::select(RuleFamily::B25S4)
    );
    assert_eq!(
        world.engine().table().transitions(),
        &[Perish, Perish, Flip, Perish, Rest, Flip, Perish, Perish, Perish]
    );
}

#[test]
fn screen_points_map_to_cells_or_nothing() {
    let layout = Layout::new(205, 150, 20, 40).expect("layout");
    let world = World::with_layout(layout, RuleFamily::Conway, 0.2, Some(1)).expect("world");

    // 10 columns, 5 rows, 5 spare units split 2 / 3 horizontally, 10 split 5 / 5 vertically
    assert_eq!(world.cell_index_from_screen_point(2, 5), Some(0));
    assert_eq!(world.cell_index_from_screen_point(1, 5), None);
    assert_eq!(world.cell_index_from_screen_point(201, 104), Some(49));
    assert_eq!(world.cell_index_from_screen_point(202, 104), None);
    assert_eq!(world.cell_index_from_screen_point(100, 105), None);
    assert_eq!(world.cell_index_from_screen_point(100, 140), None);
}

#[test]
fn keyboard_session_drives_the_world() {
    let mut world = blank_world(12, 12, RuleFamily::Conway);

    for key in [Key::Char('g'), Key::Char('r'), Key::Space] {
        assert_eq!(world.handle_key(key).expect("key"), Flow::Continue);
    }
    assert_eq!(world.state(), RunState::Stop);

    world.handle_key(Key::Space).expect("key");
    assert_eq!(world.state(), RunState::Run);

    world.handle_key(Key::Char('n')).expect("key");
    assert_eq!(world.prompt(), Prompt::DensityDigit);
    // running continues while a prompt is open
    let before = world.generation();
    world.tick();
    assert_eq!(world.generation(), before + 1);

    world.handle_key(Key::Char('0')).expect("key");
    assert_eq!(world.prompt(), Prompt::None);
    assert_eq!(world.handle_key(Key::Escape).expect("key"), Flow::Quit);
}
