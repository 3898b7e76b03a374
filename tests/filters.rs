use chrono::NaiveDate;

use statcast::{Error, FilterSpec, IterationPlan, IterationUnit, ParamValue};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn unknown_parameter_is_rejected() {
    let err = FilterSpec::from_params([("games", ParamValue::Id(716381))]).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(key) if key == "games"));
}

#[test]
fn scalars_coerce_to_one_element_lists() {
    let spec = FilterSpec::from_params([
        ("pitch_types", ParamValue::from("ff")),
        ("game_pks", ParamValue::from(716381u64)),
        ("teams", ParamValue::from("SF")),
    ])
    .unwrap();
    assert_eq!(spec.pitch_types, vec!["ff".to_string()]);
    assert_eq!(spec.game_pks, vec![716381]);
    assert_eq!(spec.teams, vec!["SF".to_string()]);
}

#[test]
fn lists_pass_through() {
    let spec = FilterSpec::from_params([
        ("batter_ids", ParamValue::from(vec![660271u64, 545361])),
        ("events", ParamValue::from(vec!["home run", "double"])),
    ])
    .unwrap();
    assert_eq!(spec.batter_ids, vec![660271, 545361]);
    assert_eq!(spec.events, vec!["home run".to_string(), "double".to_string()]);
}

#[test]
fn malformed_date_is_rejected() {
    let err = FilterSpec::from_params([("start_date", ParamValue::from("03/20/2024"))]).unwrap_err();
    assert!(matches!(err, Error::ParameterValue { key, .. } if key == "start_date"));
}

#[test]
fn id_where_text_expected_is_rejected() {
    let err = FilterSpec::from_params([("teams", ParamValue::Id(7))]).unwrap_err();
    assert!(matches!(err, Error::ParameterValue { key, .. } if key == "teams"));
}

#[test]
fn end_date_defaults_to_fallback() {
    let spec = FilterSpec::from_params([("start_date", ParamValue::from("2024-05-01"))])
        .unwrap()
        .normalized(d(2024, 7, 4));
    assert_eq!(spec.start_date, Some(d(2024, 5, 1)));
    assert_eq!(spec.end_date, Some(d(2024, 7, 4)));
}

#[test]
fn explicit_end_date_is_kept() {
    let spec = FilterSpec::from_params([
        ("start_date", ParamValue::from("2024-05-01")),
        ("end_date", ParamValue::from("2024-05-03")),
    ])
    .unwrap()
    .normalized(d(2024, 7, 4));
    assert_eq!(spec.end_date, Some(d(2024, 5, 3)));
}

#[test]
fn games_win_over_dates() {
    let spec = FilterSpec::from_params([
        ("game_pks", ParamValue::from(vec![717674u64, 716381])),
        ("start_date", ParamValue::from("2024-05-01")),
        ("end_date", ParamValue::from("2024-05-03")),
    ])
    .unwrap();
    let plan = IterationPlan::select(&spec).unwrap();
    assert_eq!(plan, IterationPlan::ByGame(vec![717674, 716381]));
}

#[test]
fn date_plan_is_inclusive_and_ascending() {
    let spec = FilterSpec {
        start_date: Some(d(2024, 4, 1)),
        end_date: Some(d(2024, 4, 3)),
        ..Default::default()
    };
    let plan = IterationPlan::select(&spec).unwrap();
    assert_eq!(plan.len(), 3);
    assert_eq!(
        plan.units(),
        vec![
            IterationUnit::Date(d(2024, 4, 1)),
            IterationUnit::Date(d(2024, 4, 2)),
            IterationUnit::Date(d(2024, 4, 3)),
        ]
    );
}

#[test]
fn missing_iteration_key_fails() {
    let spec = FilterSpec {
        pitch_types: vec!["FF".to_string()],
        ..Default::default()
    };
    let err = IterationPlan::select(&spec).unwrap_err();
    assert!(matches!(err, Error::MissingIterationKey));
}
