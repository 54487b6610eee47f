// tests/pen_geometry.rs
use glam::DVec2;
use lsys_pen::{
    Atom, PenOp, PenState, ProductionTable, SketchConfig, TurtleError, TurtleInterpreter,
};

const EPS: f64 = 1e-9;

fn assert_close(actual: DVec2, expected: DVec2) {
    assert!(
        (actual - expected).length() < EPS,
        "expected {expected:?}, got {actual:?}"
    );
}

fn standard_interpreter() -> TurtleInterpreter {
    let mut interpreter = TurtleInterpreter::new(SketchConfig::default());
    interpreter.populate_standard_symbols();
    interpreter
}

#[test]
fn test_forward_facing_north_moves_up_screen() {
    // Facing 0 degrees is screen-up, i.e. toward decreasing y. The endpoint
    // is (0, -10), not (0, 10); the y axis grows downward here.
    let pen = PenState::default().forward(10.0);

    assert_close(pen.position, DVec2::new(0.0, -10.0));
    assert_eq!(pen.lines.len(), 1);
    assert_close(pen.lines[0].from, DVec2::ZERO);
    assert_close(pen.lines[0].to, DVec2::new(0.0, -10.0));
}

#[test]
fn test_forward_facing_east() {
    // 90 degrees clockwise from north is east: +x, y unchanged.
    let pen = PenState::default().rotate(90.0).forward(10.0);

    assert_close(pen.position, DVec2::new(10.0, 0.0));
}

#[test]
fn test_consecutive_forwards_coalesce_into_one_segment() {
    let pen = PenState::default().forward(10.0).forward(5.0);

    // One segment spanning both moves, not two adjacent ones.
    assert_eq!(pen.lines.len(), 1);
    assert_close(pen.lines[0].from, DVec2::ZERO);
    assert_close(pen.lines[0].to, DVec2::new(0.0, -15.0));
}

#[test]
fn test_rotation_breaks_coalescing() {
    let pen = PenState::default()
        .forward(10.0)
        .rotate(90.0)
        .forward(10.0);

    assert_eq!(pen.lines.len(), 2);
    assert_close(pen.lines[0].to, DVec2::new(0.0, -10.0));
    assert_close(pen.lines[1].from, DVec2::new(0.0, -10.0));
    assert_close(pen.lines[1].to, DVec2::new(10.0, -10.0));
}

#[test]
fn test_zero_rotation_still_breaks_coalescing() {
    // Coalescing keys off the operation kind, not the angle value.
    let pen = PenState::default().forward(10.0).rotate(0.0).forward(10.0);

    assert_eq!(pen.lines.len(), 2);
}

#[test]
fn test_push_pop_round_trip_restores_pose_and_keeps_excursion() {
    let pen = PenState::default()
        .forward(10.0)
        .push_pos_and_angle()
        .rotate(45.0)
        .forward(7.0)
        .pop_pos_and_angle()
        .expect("stack holds one snapshot");

    // Pose is back exactly where the push left it.
    assert_eq!(pen.position, DVec2::new(0.0, -10.0));
    assert_eq!(pen.facing, 0.0);
    assert!(pen.stack.is_empty());

    // The excursion's segment is retained.
    assert_eq!(pen.lines.len(), 2);
}

#[test]
fn test_pop_on_empty_stack_is_none() {
    assert!(PenState::default().pop_pos_and_angle().is_none());
}

#[test]
fn test_pen_up_moves_without_drawing() {
    let pen = PenState::default()
        .forward(10.0)
        .pen_up()
        .forward(10.0)
        .pen_down()
        .forward(10.0);

    // Segment one ends at y = -10; the gap is skipped; segment two starts
    // from the moved position at y = -20.
    assert_eq!(pen.lines.len(), 2);
    assert_close(pen.lines[0].to, DVec2::new(0.0, -10.0));
    assert_close(pen.lines[1].from, DVec2::new(0.0, -20.0));
    assert_close(pen.lines[1].to, DVec2::new(0.0, -30.0));
}

#[test]
fn test_invalid_start_coordinates_rejected() {
    assert!(PenState::at(0.5, 0.0, 0.0).is_err());
    assert!(PenState::at(0.0, f64::NAN, 0.0).is_err());
    assert!(PenState::at(0.0, 0.0, f64::INFINITY).is_err());
    assert!(PenState::at(3.0, -4.0, 180.0).is_ok());
}

#[test]
fn test_execute_standard_square() {
    // F+F+F+F with 90 degree turns traces a unit square back to the origin.
    let interpreter = standard_interpreter();
    let pen = interpreter
        .execute(&"F+F+F+F".into(), PenState::default())
        .unwrap();

    assert_eq!(pen.lines.len(), 4);
    assert_close(pen.position, DVec2::ZERO);
}

#[test]
fn test_execute_skips_unknown_symbols() {
    // X and Y are grammar bookkeeping with no drawing meaning; the figure
    // must be identical to plain "F".
    let interpreter = standard_interpreter();

    let with_noise = interpreter
        .execute(&"XFY".into(), PenState::default())
        .unwrap();
    let plain = interpreter
        .execute(&"F".into(), PenState::default())
        .unwrap();

    assert_eq!(with_noise.lines, plain.lines);
    assert_eq!(with_noise.position, plain.position);
}

#[test]
fn test_execute_reports_underflow_with_context() {
    let interpreter = standard_interpreter();

    let err = interpreter
        .execute(&"FF]".into(), PenState::default())
        .unwrap_err();

    assert_eq!(
        err,
        TurtleError::StackUnderflow {
            index: 2,
            symbol: Atom::Char(']'),
        }
    );
}

#[test]
fn test_execute_reports_overflow_at_depth_limit() {
    let mut interpreter = TurtleInterpreter::new(SketchConfig {
        max_stack_depth: 2,
        ..SketchConfig::default()
    });
    interpreter.populate_standard_symbols();

    let err = interpreter
        .execute(&"[[[".into(), PenState::default())
        .unwrap_err();

    assert_eq!(
        err,
        TurtleError::StackOverflow {
            index: 2,
            symbol: Atom::Char('['),
            depth: 2,
        }
    );
}

#[test]
fn test_custom_op_map_with_name_atoms() {
    // Symbols need not be characters; a Name atom can drive the pen too.
    let mut interpreter = TurtleInterpreter::new(SketchConfig::default());
    interpreter.set_op(Atom::Name("grow".into()), PenOp::Forward(3.0));
    interpreter.set_op(Atom::Name("veer".into()), PenOp::Turn(90.0));

    let sequence = [
        Atom::Name("grow".into()),
        Atom::Name("veer".into()),
        Atom::Name("grow".into()),
    ]
    .into_iter()
    .collect();

    let pen = interpreter.execute(&sequence, PenState::default()).unwrap();

    assert_eq!(pen.lines.len(), 2);
    assert_close(pen.position, DVec2::new(3.0, -3.0));
}

#[test]
fn test_binary_tree_grammar_end_to_end() {
    // Grammar: 1 -> 11, 0 -> 1[0]0 from axiom 0, two generations:
    // 11[1[0]0]1[0]0. Both digits draw, brackets branch. Coalescing merges
    // each unbroken run of forwards into one segment: "11" is a single
    // segment, and every "[", "]" boundary starts a new one.
    let table = ProductionTable::new()
        .rule(Atom::Char('1'), "11")
        .rule(Atom::Char('0'), "1[0]0");
    let sequence = table.nth_step(Atom::Char('0'), 2);
    assert_eq!(sequence.to_string(), "11[1[0]0]1[0]0");

    let mut interpreter = TurtleInterpreter::new(SketchConfig::default());
    interpreter.set_op(Atom::Char('1'), PenOp::Forward(1.0));
    interpreter.set_op(Atom::Char('0'), PenOp::Forward(1.0));
    interpreter.set_op(Atom::Char('['), PenOp::Push);
    interpreter.set_op(Atom::Char(']'), PenOp::Pop);

    let pen = interpreter.execute(&sequence, PenState::default()).unwrap();

    // Runs of forwards between stack operations: "11", "1", "0", "0", "1",
    // "0", "0" -> 7 segments, all matched pushes popped.
    assert_eq!(pen.lines.len(), 7);
    assert!(pen.stack.is_empty());
}
