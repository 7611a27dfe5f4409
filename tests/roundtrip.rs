use traject::{Mover as _, Path as _, PathSegment, Program, SegmentedPath, Vector2};

/// The showcase program: every statement kind, every easing method, multiple
/// phases threading one cursor.
const DEMO: &str = "new MoverBuilder()
  .Uniform(60, e => e
    .Start(new Vector2(0, 3))
    .Line(new Vector2(0.7, 1.3))
    .Arc(new Vector2(2, 1.5), 0.8)
    .BezierContinue(2.9, new Vector2(2, -3), new Vector2(0, -3), 100)
    .ArcContinue(1, -2)
    .ArcContinue(1.4, 2)
    .BezierContinue(1, new Vector2(-2, 1.5), new Vector2(-3, 2), 100)
    .LineContinue(0.4)
    .Bezier(new Vector2(-3, 4), new Vector2(-1, 2), new Vector2(0, 5), 100)
  )
  .SmoothStep(30, e => e.LineContinue(1.5))
  .Wait(10, e => e)
  .Sine(20, e => e.ArcContinue(0.8, 3.5));";

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn demo_program() -> Program {
    init_logging();
    traject::parse(DEMO).expect("demo program parses")
}

#[test]
fn round_trip_is_evaluate_equivalent() {
    let program = demo_program();
    let reparsed = traject::parse(&program.to_program_string()).unwrap();

    let original = program.to_sequenced_mover();
    let round_tripped = reparsed.to_sequenced_mover();
    assert!((original.duration() - round_tripped.duration()).abs() < 1e-9);

    let steps = 240;
    for i in 0..=steps {
        let t = original.duration() * f64::from(i) / f64::from(steps);
        let a = original.evaluate(t);
        let b = round_tripped.evaluate(t);
        assert!((a.position - b.position).length() < 1e-9, "position at {t}");
        assert!(
            (a.direction - b.direction).length() < 1e-9,
            "direction at {t}"
        );
        assert!((a.speed - b.speed).abs() < 1e-9, "speed at {t}");
    }
}

#[test]
fn serialization_reaches_a_fixed_point_after_one_pass() {
    let program = demo_program();
    let once = program.to_program_string();
    let twice = traject::parse(&once).unwrap().to_program_string();
    assert_eq!(once, twice);
}

#[test]
fn position_is_continuous_across_phase_and_segment_boundaries() {
    let program = demo_program();
    let mover = program.to_sequenced_mover();
    let steps = 2_000;
    let eps = 1e-7;
    for i in 1..steps {
        let t = mover.duration() * f64::from(i) / f64::from(steps);
        let before = mover.evaluate(t - eps).position;
        let after = mover.evaluate(t + eps).position;
        assert!(
            (before - after).length() < 1e-3,
            "position jump at t = {t}: {before:?} -> {after:?}"
        );
    }
}

#[test]
fn segmented_path_arclength_is_additive() {
    let program = demo_program();
    let mover = program.to_sequenced_mover();
    for phase in mover.phases() {
        let path = phase.path();
        let child_sum: f64 = path.segments().iter().map(PathSegment::length).sum();
        assert!((path.length() - child_sum).abs() < 1e-12);
        if let (Some(first), Some(last)) = (path.segments().first(), path.segments().last()) {
            assert_eq!(path.at(0.0).position, first.at_start().position);
            assert_eq!(path.at(path.length()).position, last.at_end().position);
        }
    }
}

#[test]
fn wait_phase_holds_the_cursor_still() {
    let program = demo_program();
    let mover = program.to_sequenced_mover();
    // Phases: 60 + 30, then the 10-long wait.
    let held = mover.evaluate(90.5).position;
    for t in [91.0, 95.0, 99.9] {
        assert_eq!(mover.evaluate(t).position, held);
    }
}

#[test]
fn empty_program_compiles_to_a_degenerate_mover() {
    init_logging();
    let program = traject::parse("new MoverBuilder();").unwrap();
    let mover = program.to_sequenced_mover();
    assert_eq!(mover.duration(), 0.0);
    assert_eq!(mover.evaluate(5.0).position, Vector2::ZERO);
}

#[test]
fn direct_builder_and_parsed_program_agree() {
    init_logging();
    let parsed = traject::parse(
        "new MoverBuilder().Cosine(12, e => e.Line(new Vector2(2, 0)).ArcContinue(1, 1.5));",
    )
    .unwrap()
    .to_sequenced_mover();
    let built = traject::SequencedMoverBuilder::new()
        .phase(12.0, traject::Ease::Cosine, |pb| {
            pb.line(Vector2::new(2.0, 0.0)).arc_continue(1.0, 1.5)
        })
        .build();
    for i in 0..=24 {
        let t = 12.0 * f64::from(i) / 24.0;
        let a = parsed.evaluate(t);
        let b = built.evaluate(t);
        assert!((a.position - b.position).length() < 1e-12);
    }
}

#[test]
fn segment_boundary_endpoints_match_exactly() {
    // Two-segment path: the concatenation's endpoints equal the children's.
    let path: SegmentedPath = traject::PathBuilder::default()
        .line(Vector2::new(1.0, 0.0))
        .arc_continue(1.0, std::f64::consts::FRAC_PI_2)
        .build();
    let first = &path.segments()[0];
    let last = &path.segments()[1];
    assert_eq!(path.at(0.0).position, first.at_start().position);
    assert_eq!(path.at(path.length()).position, last.at_end().position);
}
