use std::time::Duration;

use lifegrid_core::{
    shapes, CellCoord, Command, DeadBias, GridSize, RunState, SimulationConfig,
};
use lifegrid_system_control::{Control, ControlInput};
use lifegrid_world::{self as world, query, World};

const FRAME: Duration = Duration::from_millis(16);

fn config() -> SimulationConfig {
    SimulationConfig::new(GridSize::new(12, 12).expect("valid size"), DeadBias::ALL_DEAD)
        .with_refresh_interval(Duration::from_millis(100))
}

fn start() -> ControlInput {
    ControlInput {
        start: true,
        ..ControlInput::default()
    }
}

#[test]
fn start_steps_immediately_then_once_per_interval() {
    let mut control = Control::new(&config());
    let mut commands = Vec::new();

    control.handle(&start(), FRAME, &mut commands);
    assert_eq!(commands, vec![Command::Step], "start steps right away");
    assert_eq!(control.run_state(), RunState::Running);

    commands.clear();
    control.handle(&ControlInput::default(), Duration::from_millis(60), &mut commands);
    assert!(commands.is_empty(), "no step before a full interval");

    control.handle(&ControlInput::default(), Duration::from_millis(60), &mut commands);
    assert_eq!(commands, vec![Command::Step]);

    commands.clear();
    control.handle(&ControlInput::default(), Duration::from_millis(320), &mut commands);
    assert_eq!(commands.len(), 3, "one step per elapsed interval");
}

#[test]
fn repeated_start_does_not_double_step() {
    let mut control = Control::new(&config());
    let mut commands = Vec::new();

    control.handle(&start(), FRAME, &mut commands);
    control.handle(&start(), FRAME, &mut commands);

    assert_eq!(commands, vec![Command::Step]);
}

#[test]
fn stop_halts_automatic_stepping() {
    let mut control = Control::new(&config());
    let mut commands = Vec::new();
    control.handle(&start(), FRAME, &mut commands);
    commands.clear();

    let stop = ControlInput {
        stop: true,
        ..ControlInput::default()
    };
    control.handle(&stop, Duration::from_secs(5), &mut commands);
    control.handle(&ControlInput::default(), Duration::from_secs(5), &mut commands);

    assert!(commands.is_empty());
    assert_eq!(control.run_state(), RunState::Idle);
}

#[test]
fn step_button_stops_and_steps_once() {
    let mut control = Control::new(&config());
    let mut commands = Vec::new();
    control.handle(&start(), FRAME, &mut commands);
    commands.clear();

    let step = ControlInput {
        step: true,
        ..ControlInput::default()
    };
    control.handle(&step, Duration::from_secs(1), &mut commands);

    assert_eq!(commands, vec![Command::Step]);
    assert_eq!(control.run_state(), RunState::Idle);
}

#[test]
fn reset_and_clear_stop_the_run() {
    let mut control = Control::new(&config());
    let mut commands = Vec::new();
    control.handle(&start(), FRAME, &mut commands);
    commands.clear();

    let reset = ControlInput {
        reset: true,
        ..ControlInput::default()
    };
    control.handle(&reset, FRAME, &mut commands);
    assert_eq!(
        commands,
        vec![Command::Reset {
            dead_bias: DeadBias::ALL_DEAD
        }]
    );
    assert_eq!(control.run_state(), RunState::Idle);

    commands.clear();
    control.handle(&start(), FRAME, &mut commands);
    commands.clear();
    let clear = ControlInput {
        clear: true,
        ..ControlInput::default()
    };
    control.handle(&clear, FRAME, &mut commands);
    assert_eq!(commands, vec![Command::Clear]);
    assert_eq!(control.run_state(), RunState::Idle);
}

#[test]
fn dead_bias_change_regenerates_only_while_idle() {
    let mut control = Control::new(&config());
    let mut commands = Vec::new();
    let bias = DeadBias::new(0.3).expect("valid bias");

    let change = ControlInput {
        dead_bias: Some(bias),
        ..ControlInput::default()
    };
    control.handle(&change, FRAME, &mut commands);
    assert_eq!(commands, vec![Command::Reset { dead_bias: bias }]);

    commands.clear();
    control.handle(&start(), FRAME, &mut commands);
    commands.clear();
    let later = DeadBias::new(0.9).expect("valid bias");
    control.handle(
        &ControlInput {
            dead_bias: Some(later),
            ..ControlInput::default()
        },
        FRAME,
        &mut commands,
    );
    assert!(commands.is_empty(), "running simulations keep their grid");
    assert_eq!(control.dead_bias(), later);
}

#[test]
fn clicks_stamp_the_selected_shape_only_while_idle() {
    let mut control = Control::new(&config());
    let mut commands = Vec::new();

    let click = ControlInput {
        shape: Some(shapes::GLIDER.to_owned()),
        angle_degrees: Some(90.0),
        clicked_cell: Some(CellCoord::new(5, 6)),
        ..ControlInput::default()
    };
    control.handle(&click, FRAME, &mut commands);
    assert_eq!(
        commands,
        vec![Command::StampShape {
            shape: shapes::GLIDER.to_owned(),
            angle_degrees: 90.0,
            anchor: CellCoord::new(5, 6),
        }]
    );

    commands.clear();
    control.handle(&start(), FRAME, &mut commands);
    commands.clear();
    control.handle(
        &ControlInput {
            clicked_cell: Some(CellCoord::new(1, 1)),
            ..ControlInput::default()
        },
        FRAME,
        &mut commands,
    );
    assert!(commands.is_empty(), "clicks are ignored while running");
}

#[test]
fn refresh_interval_change_takes_effect_immediately() {
    let mut control = Control::new(&config());
    let mut commands = Vec::new();
    control.handle(&start(), FRAME, &mut commands);
    commands.clear();

    let faster = ControlInput {
        refresh_interval: Some(Duration::from_millis(10)),
        ..ControlInput::default()
    };
    control.handle(&faster, Duration::from_millis(50), &mut commands);

    assert_eq!(commands.len(), 5);
    assert_eq!(control.refresh_interval(), Duration::from_millis(10));
}

#[test]
fn driving_the_world_advances_generations() {
    let config = config();
    let mut world = World::new(config.clone());
    let mut control = Control::new(&config);
    let mut events = Vec::new();

    let frames = [
        ControlInput {
            clicked_cell: Some(CellCoord::new(4, 4)),
            shape: Some("Blinker".to_owned()),
            ..ControlInput::default()
        },
        start(),
        ControlInput::default(),
        ControlInput::default(),
        ControlInput::default(),
    ];

    for input in &frames {
        let mut commands = Vec::new();
        control.handle(input, Duration::from_millis(100), &mut commands);
        for command in commands {
            world::apply(&mut world, command, &mut events).expect("control emits valid commands");
        }
    }

    assert_eq!(query::generation(&world), 4);
    assert_eq!(query::alive_count(&world), 3, "blinker keeps three cells");
    assert!(query::is_alive(&world, CellCoord::new(3, 3)));
    assert!(query::is_alive(&world, CellCoord::new(4, 3)));
    assert!(query::is_alive(&world, CellCoord::new(5, 3)));
}
