// tests/interpreter.rs
use mars_rover::{
    Heading, InterpreterConfig, MarsRover, Plateau, Position, RoverInterpreter, RoverOp, parse_str,
};

#[test]
fn test_classic_mission() {
    let mut rovers = parse_str("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n").expect("valid input");

    let traverses = RoverInterpreter::default().run_all(&mut rovers);

    assert_eq!(traverses.len(), 2);
    assert_eq!(traverses[0].end, Position::new(1, 3, Heading::North));
    assert_eq!(traverses[1].end, Position::new(5, 1, Heading::East));
    assert!(traverses.iter().all(|t| t.rejected.is_empty() && !t.halted));
    assert_eq!(rovers[1].position(), traverses[1].end);
}

#[test]
fn test_rejected_move_does_not_stop_rover() {
    // Two moves north are refused at the edge, then the rover turns and moves east.
    let mut rover = MarsRover::new(Plateau::new(5, 5), Position::new(2, 5, Heading::North), "MMRM");

    let traverse = RoverInterpreter::default().run(0, &mut rover);

    assert_eq!(traverse.start, Position::new(2, 5, Heading::North));
    assert_eq!(traverse.end, Position::new(3, 5, Heading::East));
    assert_eq!(traverse.rejected.len(), 2);
    assert_eq!(traverse.rejected[0].step, 0);
    assert_eq!(traverse.rejected[1].step, 1);
    assert_eq!(traverse.rejected[1].op, RoverOp::Move);
    assert!(!traverse.halted);
}

#[test]
fn test_halt_on_rejection() {
    let mut rover = MarsRover::new(Plateau::new(5, 5), Position::new(0, 0, Heading::South), "MRM");
    let interpreter = RoverInterpreter::new(InterpreterConfig {
        halt_on_rejection: true,
    });

    let traverse = interpreter.run(3, &mut rover);

    assert_eq!(traverse.rover, 3);
    assert!(traverse.halted);
    assert_eq!(traverse.rejected.len(), 1);
    assert_eq!(traverse.end, Position::new(0, 0, Heading::South));
}

#[test]
fn test_rovers_are_independent() {
    let mut rovers = parse_str("3 3\n3 3 N\nM\n0 0 N\nMMM\n").expect("valid input");

    let traverses = RoverInterpreter::default().run_all(&mut rovers);

    assert_eq!(traverses[0].rejected.len(), 1);
    assert_eq!(traverses[1].rejected.len(), 0);
    assert_eq!(traverses[1].end, Position::new(0, 3, Heading::North));
}
