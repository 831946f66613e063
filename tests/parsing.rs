// tests/parsing.rs
//
// Input validation for grid and rover specifications: what the grammars
// tolerate (whitespace, mixed case) and what they reject.

use glam::IVec2;
use gridrover::{Command, Error, Grid, Heading, Rover};

#[test]
fn grid_parses_two_integers() {
    let grid: Grid = "5 10".parse().unwrap();
    assert_eq!(grid.length, 5);
    assert_eq!(grid.width, 10);
}

#[test]
fn grid_accepts_a_zero_sized_grid() {
    let grid: Grid = "0 0".parse().unwrap();
    assert_eq!(grid.length, 0);
    assert_eq!(grid.width, 0);
}

#[test]
fn grid_accepts_mixed_whitespace_separators_and_padding() {
    // Tabs and newlines count as separators, surrounding whitespace is trimmed.
    let grid: Grid = "\n7\t\n3\t".parse().unwrap();
    assert_eq!(grid.length, 7);
    assert_eq!(grid.width, 3);
}

#[test]
fn grid_rejects_malformed_specs() {
    let bad = ["-0 0", "-1 5", "S 0", "0", "", "1 2 3", "1.5 2"];
    for spec in bad {
        assert_eq!(
            spec.parse::<Grid>(),
            Err(Error::InvalidGridSpec),
            "spec {spec:?} should be rejected"
        );
    }
}

#[test]
fn grid_error_message_matches_the_prompt_wording() {
    let err = "nope".parse::<Grid>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "the grid's size must be 2 non-negative integers"
    );
}

#[test]
fn rover_parses_a_compact_spec() {
    let grid = Grid::new(10, 10);
    let rover = Rover::new("(0,0,N)FF", &grid).unwrap();

    assert_eq!(rover.position, IVec2::new(0, 0));
    assert_eq!(rover.heading, Heading::North);
    assert_eq!(
        rover.remaining_commands(),
        &[Command::Forward, Command::Forward]
    );
    assert!(!rover.lost);
}

#[test]
fn rover_tolerates_whitespace_everywhere_but_the_command_run() {
    let grid = Grid::new(10, 10);
    let rover = Rover::new("  ( 0 , \n0 , \tN ) FF   ", &grid).unwrap();

    assert_eq!(rover.position, IVec2::new(0, 0));
    assert_eq!(rover.heading, Heading::North);
    assert_eq!(
        rover.remaining_commands(),
        &[Command::Forward, Command::Forward]
    );
}

#[test]
fn rover_canonicalizes_mixed_case_input() {
    let grid = Grid::new(10, 10);
    let rover = Rover::new("(2, 3, n) fRl", &grid).unwrap();

    assert_eq!(rover.heading, Heading::North);
    assert_eq!(
        rover.remaining_commands(),
        &[Command::Forward, Command::TurnRight, Command::TurnLeft]
    );
}

#[test]
fn rover_rejects_malformed_specs() {
    let grid = Grid::new(10, 10);
    let bad = [
        "0, 0, n Ff",    // no parentheses
        "(0, 0, n) F f", // commands separated by a space
        "(0, 0, n) Ffq1", // command run contains stray characters
        "(0 0 n) Ff",    // no commas inside the parentheses
        "(-1, 0, n) Ff", // negative coordinate
        "(0, 0) Ff",     // heading missing
        "(0, 0, N)",     // no commands at all
    ];
    for spec in bad {
        assert_eq!(
            Rover::new(spec, &grid),
            Err(Error::InvalidRoverSpec),
            "spec {spec:?} should be rejected"
        );
    }
}

#[test]
fn rover_rejects_a_start_position_outside_the_grid() {
    let grid = Grid::new(10, 10);
    assert_eq!(
        Rover::new("(100, 100, N) FF", &grid),
        Err(Error::OutOfBounds)
    );
    assert_eq!(
        Error::OutOfBounds.to_string(),
        "the rover can't be placed outside the grid"
    );
}

#[test]
fn rover_accepts_a_start_on_the_inclusive_edge() {
    // Bounds are inclusive: (10, 10) is the far corner of a 10x10 grid.
    let grid = Grid::new(10, 10);
    let rover = Rover::new("(10, 10, S) F", &grid).unwrap();
    assert_eq!(rover.position, IVec2::new(10, 10));
}
