//! End-to-end checks of the load set rules, both directly and through the
//! form model.

use loadset_core::form::{LoadForm, Submission};
use loadset_core::settings::FormSettings;
use loadset_core::{validate, BeamSpec, LoadKind, LoadSpec, Violation};

fn steel_beam() -> BeamSpec {
    BeamSpec::new(5.0, 2e11, 0.0001)
}

#[test]
fn all_valid_point_load() {
    let result = validate(&steel_beam(), &[LoadSpec::point(1000.0, 2.5)]);
    assert!(result.ok);
    assert!(result.errors.is_empty());
}

#[test]
fn negative_beam_length_reported_once() {
    let beam = BeamSpec::new(-1.0, 2e11, 0.0001);
    let result = validate(&beam, &[LoadSpec::point(1000.0, 0.0)]);
    let beam_errors = result
        .errors
        .iter()
        .filter(|e| e.as_str() == "All beam properties must be positive values.")
        .count();
    assert_eq!(beam_errors, 1);
}

#[test]
fn distributed_overflow() {
    let result = validate(&steel_beam(), &[LoadSpec::distributed(500.0, 4.0, 2.0)]);
    assert!(result
        .errors
        .iter()
        .any(|e| e == "Load 1: Distributed load extends beyond beam length."));
}

#[test]
fn mixed_validity() {
    let loads = [
        LoadSpec::point(1000.0, 2.5),
        LoadSpec::distributed(500.0, 1.0, -0.5),
    ];
    let result = validate(&steel_beam(), &loads);

    assert_eq!(
        result.violations,
        vec![Violation::DistributedLength { index: 2 }]
    );
    assert_eq!(
        result.errors,
        vec!["Load 2: Distributed load length must be positive."]
    );
}

#[test]
fn empty_load_list_regardless_of_beam() {
    let good = validate(&steel_beam(), &[]);
    assert_eq!(good.errors, vec!["At least one load must be specified."]);

    let bad = validate(&BeamSpec::new(5.0, 2e11, -1.0), &[]);
    assert_eq!(
        bad.errors,
        vec![
            "All beam properties must be positive values.",
            "At least one load must be specified.",
        ]
    );
}

#[test]
fn boundaries_are_inclusive() {
    let eps = 1e-6;
    assert!(validate(&steel_beam(), &[LoadSpec::point(1.0, 5.0)]).ok);
    assert!(!validate(&steel_beam(), &[LoadSpec::point(1.0, 5.0 + eps)]).ok);

    assert!(validate(&steel_beam(), &[LoadSpec::distributed(1.0, 2.0, 3.0)]).ok);
    assert!(!validate(&steel_beam(), &[LoadSpec::distributed(1.0, 2.0, 3.0 + eps)]).ok);
}

#[test]
fn validate_is_usable_across_threads() {
    let beam = steel_beam();
    let loads = vec![LoadSpec::point(-1.0, 2.0), LoadSpec::distributed(5.0, 4.5, 1.0)];
    let expected = validate(&beam, &loads);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let loads = loads.clone();
            std::thread::spawn(move || validate(&beam, &loads))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn form_round_trip_to_submission() {
    let mut form = LoadForm::new(FormSettings::default());
    let first = form.rows[0].id;
    form.set_magnitude(first, "1500").unwrap();

    let second = form.add_row();
    form.set_kind(second, LoadKind::Distributed).unwrap();
    form.set_magnitude(second, "200").unwrap();
    form.set_position(second, "1").unwrap();
    form.set_length(second, "3").unwrap();

    match form.submit() {
        Submission::Accepted { beam, loads } => {
            assert_eq!(beam, steel_beam());
            assert_eq!(
                loads,
                vec![
                    LoadSpec::point(1500.0, 2.5),
                    LoadSpec::distributed(200.0, 1.0, 3.0),
                ]
            );
        }
        other => panic!("expected acceptance, got {:?}", other),
    }
}

#[test]
fn form_blocks_and_lists_every_problem() {
    let mut form = LoadForm::new(FormSettings::default());
    form.set_young_modulus("-5");

    let row = form.add_row();
    form.set_kind(row, LoadKind::Distributed).unwrap();
    form.set_magnitude(row, "0").unwrap();
    form.set_position(row, "4").unwrap();
    form.set_length(row, "0").unwrap();

    let submission = form.submit();
    assert_eq!(
        submission.errors(),
        &[
            "All beam properties must be positive values.".to_string(),
            "Load 2: Magnitude must be positive.".to_string(),
            "Load 2: Distributed load length must be positive.".to_string(),
        ]
    );
}

#[test]
fn clamping_then_validation_agree() {
    let mut form = LoadForm::new(FormSettings::default());
    let row = form.rows[0].id;
    form.set_position(row, "4.8").unwrap();

    form.set_beam_length("4");
    assert_eq!(form.row(row).unwrap().position, "4");
    assert!(form.submit().is_accepted());
}
