use std::fs;
use std::path::PathBuf;

use statcast::analysis::{delta_win_exp, pitch_movement, umpire_calls};
use statcast::assemble::assemble_tables;
use statcast::normalize::parse_csv_response;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn f64_at(df: &polars::prelude::DataFrame, name: &str, idx: usize) -> f64 {
    df.column(name).unwrap().f64().unwrap().get(idx).unwrap()
}

#[test]
fn pitch_movement_scales_to_inches() {
    let df = parse_csv_response(&read_fixture("game_100.csv")).unwrap();
    let df = pitch_movement(df).unwrap();
    // pfx_x -0.52, pfx_z 1.31
    assert!(close(f64_at(&df, "horizontal_break", 0), 6.24));
    assert!(close(f64_at(&df, "vertical_break", 0), 15.72));
    assert!(close(f64_at(&df, "total_break", 0), 21.96));
    assert!(close(f64_at(&df, "total_break_abs", 0), 21.96));
}

#[test]
fn pitch_movement_null_inputs_fall_back_to_zero() {
    let df = parse_csv_response("pfx_x,pfx_z\n0.5,1.0\n,\n").unwrap();
    let df = pitch_movement(df).unwrap();
    assert!(close(f64_at(&df, "horizontal_break", 0), -6.0));
    assert!(close(f64_at(&df, "total_break", 0), 6.0));
    assert!(close(f64_at(&df, "horizontal_break", 1), 0.0));
    assert!(close(f64_at(&df, "vertical_break", 1), 0.0));
    assert!(close(f64_at(&df, "total_break", 1), 0.0));
    assert!(close(f64_at(&df, "total_break_abs", 1), 0.0));
}

#[test]
fn delta_win_exp_flips_sign_with_the_inning_half() {
    let df = parse_csv_response(
        "delta_home_win_exp,inning_topbot\n0.1,Bot\n0.1,Top\n,Top\n",
    )
    .unwrap();
    let df = delta_win_exp(df).unwrap();
    // Home team bats in the bottom half.
    assert!(close(f64_at(&df, "batter_delta_win_exp", 0), 0.1));
    assert!(close(f64_at(&df, "pitcher_delta_win_exp", 0), -0.1));
    assert!(close(f64_at(&df, "batter_delta_win_exp", 1), -0.1));
    assert!(close(f64_at(&df, "pitcher_delta_win_exp", 1), 0.1));
    assert!(close(f64_at(&df, "batter_delta_win_exp", 2), 0.0));
    assert!(close(f64_at(&df, "pitcher_delta_win_exp", 2), 0.0));
}

#[test]
fn umpire_calls_measures_called_strikes_outside_the_zone() {
    let g100 = parse_csv_response(&read_fixture("game_100.csv")).unwrap();
    let g101 = parse_csv_response(&read_fixture("game_101.csv")).unwrap();
    let df = assemble_tables(vec![g100, g101]).unwrap().unwrap();
    let df = umpire_calls(df).unwrap();

    // 100|1|1: called strike inside the zone.
    assert!(close(f64_at(&df, "total_miss", 0), 0.0));
    // 100|1|2: a ball, not a called strike.
    assert!(close(f64_at(&df, "total_miss", 1), 0.0));
    // 101|1|3: called strike 8.05in off the plate, vertically fine.
    assert!(close(f64_at(&df, "horizontal_miss", 5), 8.05));
    assert!(close(f64_at(&df, "vertical_miss", 5), 0.0));
    assert!(close(f64_at(&df, "total_miss", 5), 8.05));
}

#[test]
fn umpire_calls_null_location_falls_back_to_zero() {
    let df = parse_csv_response(
        "plate_x,plate_z,sz_top,sz_bot,description\n-1.5,2.0,3.5,1.6,called_strike\n,2.0,3.5,1.6,called_strike\n",
    )
    .unwrap();
    let df = umpire_calls(df).unwrap();
    assert!(f64_at(&df, "total_miss", 0) > 8.0);
    assert!(close(f64_at(&df, "total_miss", 1), 0.0));
}
