use scatterscope::data::measurement::{ClickOutcome, MeasurementState, Phase, Tool};
use scatterscope::{Measurement, Point, ScatterError};

fn click_all(state: &mut MeasurementState, points: &[(f64, f64)]) -> Vec<ClickOutcome> {
    points
        .iter()
        .map(|&(x, y)| state.on_click(Point::new(x, y)))
        .collect()
}

#[test]
fn ruler_measures_a_3_4_5_triangle() {
    let mut state = MeasurementState::new();
    state.toggle(Tool::Ruler);
    click_all(&mut state, &[(0.0, 0.0), (3.0, 4.0)]);

    let done = state.completed();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].tool, Tool::Ruler);
    let m = done[0].outcome.as_ref().unwrap();
    assert_eq!(m.rounded(), 5.0);
    assert_eq!(done[0].label(), "Distance: 5.00");
    match state.phase() {
        Phase::Complete(m) => {
            assert_eq!(m.tool, Tool::Ruler);
            assert_eq!(m.picks, vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
            assert_eq!(m.label(), "Distance: 5.00");
        }
        other => panic!("unexpected phase: {other:?}"),
    }
}

#[test]
fn protractor_measures_a_right_angle() {
    let mut state = MeasurementState::new();
    state.toggle(Tool::Protractor);
    click_all(&mut state, &[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0)]);

    let done = state.completed();
    assert_eq!(done.len(), 1);
    match done[0].outcome {
        Ok(Measurement::Angle(a)) => assert!((a - 90.0).abs() < 1e-9),
        ref other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(done[0].label(), "Angle: 90.00°");
}

#[test]
fn third_ruler_click_clears_without_measuring() {
    let mut state = MeasurementState::new();
    state.toggle(Tool::Ruler);
    let outcomes = click_all(&mut state, &[(0.0, 0.0), (3.0, 4.0), (10.0, 10.0)]);

    assert_eq!(
        outcomes,
        vec![
            ClickOutcome::Picked { picks: 1 },
            ClickOutcome::Picked { picks: 2 },
            ClickOutcome::Cleared,
        ]
    );
    assert!(state.picks().is_empty());
    assert_eq!(state.click_count(), 0);
    assert!(state.completed().is_empty());

    // The next click starts a fresh measurement.
    assert_eq!(
        state.on_click(Point::new(1.0, 1.0)),
        ClickOutcome::Picked { picks: 1 }
    );
}

#[test]
fn fourth_protractor_click_clears() {
    let mut state = MeasurementState::new();
    state.toggle(Tool::Protractor);
    let outcomes = click_all(
        &mut state,
        &[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (5.0, 5.0)],
    );
    assert_eq!(outcomes.last(), Some(&ClickOutcome::Cleared));
    assert!(state.picks().is_empty());
    assert!(state.completed().is_empty());
}

#[test]
fn coincident_vertex_gives_undefined_angle() {
    let mut state = MeasurementState::new();
    state.toggle(Tool::Protractor);
    click_all(&mut state, &[(2.0, 2.0), (2.0, 2.0), (4.0, 0.0)]);

    let done = state.completed();
    assert_eq!(done.len(), 1);
    assert!(matches!(
        done[0].outcome,
        Err(ScatterError::DegenerateMeasurement {
            tool: Tool::Protractor
        })
    ));
    assert_eq!(done[0].label(), "Angle: undefined");
}

#[test]
fn clicks_are_ignored_without_an_active_tool() {
    let mut state = MeasurementState::new();
    assert_eq!(state.on_click(Point::new(1.0, 2.0)), ClickOutcome::Ignored);
    assert!(state.picks().is_empty());
    assert!(matches!(state.phase(), Phase::Idle));
}

#[test]
fn both_tools_share_one_counter() {
    let mut state = MeasurementState::new();
    state.toggle(Tool::Ruler);
    state.toggle(Tool::Protractor);

    // One click is counted and stored once per active tool.
    let a = Point::new(0.0, 0.0);
    assert_eq!(state.on_click(a), ClickOutcome::Picked { picks: 2 });
    assert_eq!(state.picks(), &[a, a]);
    assert_eq!(state.click_count(), 2);

    // Ruler overflows and wipes the buffer, then the protractor picks again.
    let b = Point::new(1.0, 1.0);
    assert_eq!(state.on_click(b), ClickOutcome::Picked { picks: 1 });
    assert_eq!(state.picks(), &[b]);
    assert_eq!(state.click_count(), 1);
}

#[test]
fn long_click_runs_with_both_tools_stay_bounded() {
    let mut state = MeasurementState::new();
    state.toggle(Tool::Ruler);
    state.toggle(Tool::Protractor);

    let clicks: Vec<Point> = (0..6).map(|i| Point::new(i as f64, 0.0)).collect();
    let mut lengths = Vec::new();
    for &p in &clicks {
        let outcome = state.on_click(p);
        assert!(state.picks().len() <= 3, "buffer grew to {}", state.picks().len());
        assert!(state.click_count() <= 3);
        assert_eq!(outcome, ClickOutcome::Picked { picks: state.picks().len() });
        lengths.push(state.picks().len());
    }
    // After the first click the buffer alternates between a fresh pick and a full
    // protractor buffer.
    assert_eq!(lengths, vec![2, 1, 3, 1, 3, 1]);

    // Every ruler overflow wiped the earlier picks.
    assert_eq!(state.picks(), &[clicks[5]]);
    state.on_click(clicks[0]);
    assert_eq!(state.picks(), &[clicks[5], clicks[0], clicks[0]]);
    let done = state.completed();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].tool, Tool::Protractor);
    assert_eq!(done[0].label(), "Angle: undefined");
}

#[test]
fn toggling_a_tool_keeps_the_pick_buffer() {
    let mut state = MeasurementState::new();
    state.toggle(Tool::Ruler);
    state.on_click(Point::new(1.0, 1.0));

    assert!(!state.toggle(Tool::Ruler));
    assert_eq!(state.picks().len(), 1);
    assert!(state.toggle(Tool::Ruler));
    state.on_click(Point::new(4.0, 5.0));
    assert_eq!(state.completed()[0].label(), "Distance: 5.00");
}
