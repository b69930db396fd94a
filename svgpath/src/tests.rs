use crate::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn move_then_line() -> Result<()> {
    let actions = parse("M 10,10 L 20,20")?;
    assert_eq!(actions, vec![
	PathAction::new(ActionKind::Move, &[p(10.0, 10.0)], Position::Absolute)?,
	PathAction::new(ActionKind::Line, &[p(20.0, 20.0)], Position::Absolute)?,
    ]);
    Ok(())
}

#[test]
fn implicit_line_after_relative_move() -> Result<()> {
    let actions = parse("m 0,0 5,5")?;
    assert_eq!(actions.len(), 2);
    assert_eq!(*actions[0].command(), Command::Move(p(0.0, 0.0)));
    assert!(actions[0].is_absolute());
    assert_eq!(*actions[1].command(), Command::Line(p(5.0, 5.0)));
    assert!(!actions[1].is_absolute());
    Ok(())
}

#[test]
fn lone_close() -> Result<()> {
    let actions = parse("Z")?;
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].kind(), ActionKind::Close);
    assert!(actions[0].points().is_empty());
    assert!(!actions[0].is_absolute());
    Ok(())
}

#[test]
fn arc_parameters() -> Result<()> {
    let actions = parse("M 0 0 A 5,5 0 1 0 10,10")?;
    let arc = &actions[1];
    assert_eq!(arc.kind(), ActionKind::Arc);
    assert_eq!(arc.arc(), Some(&Arc { rx: 5.0, ry: 5.0, rotation: 0.0, large_arc: true, sweep: false }));
    assert_eq!(arc.points(), vec![p(10.0, 10.0)]);
    assert!(arc.is_absolute());
    Ok(())
}

#[test]
fn arc_only_path() -> Result<()> {
    let actions = parse("A 5,5 0 1 0 10,10")?;
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].kind(), ActionKind::Arc);
    assert_eq!(actions[0].arc(), Some(&Arc { rx: 5.0, ry: 5.0, rotation: 0.0, large_arc: true, sweep: false }));
    assert_eq!(actions[0].points(), vec![p(10.0, 10.0)]);

    match parse("A 5,5 0 1") {
	Err(Error::Grammar(err)) => assert!(err.message.starts_with("Invalid Arc"), "{}", err),
	other => panic!("unexpected: {:?}", other),
    }
    Ok(())
}

#[test]
fn empty_paths() -> Result<()> {
    assert!(parse("")?.is_empty());
    assert!(parse("  \n\t ")?.is_empty());
    Ok(())
}

#[test]
fn failed_parse_keeps_nothing() {
    let err = parse("M 1 1 L 2 2 L 3 3 Q").unwrap_err();
    match err {
	Error::Grammar(GrammarError { offset, .. }) => assert_eq!(offset, 19),
	other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn resolve_against_pen() -> Result<()> {
    let rel = PathAction::new(ActionKind::Line, &[p(3.0, 4.0)], Position::Relative)?;
    assert_eq!(rel.resolve(p(10.0, 10.0), &Identity), vec![p(13.0, 14.0)]);

    let abs = PathAction::new(ActionKind::Line, &[p(3.0, 4.0)], Position::Absolute)?;
    assert_eq!(abs.resolve(p(10.0, 10.0), &Identity), vec![p(3.0, 4.0)]);
    Ok(())
}

#[test]
fn real_world_path() -> Result<()> {
    let heart = "M140 20C73 20 20 74 20 140c0 135 136 170 228 303 88-132 229-173 229-303 \
		 0-66-54-120-120-120-48 0-90 28-109 69-19-41-60-69-108-69z";
    let data: Data = heart.parse()?;
    let letters: String = data.iter().map(|a| a.letter()).collect();
    assert_eq!(letters, "MCcccccz");
    assert_eq!(*data[3].command(), Command::CubicCurve(p(88.0, -132.0), p(229.0, -173.0), p(229.0, -303.0)));

    let end = data.trace(&Identity).nth(1).map(|t| t.points);
    assert_eq!(end, Some(vec![p(73.0, 20.0), p(20.0, 74.0), p(20.0, 140.0)]));
    Ok(())
}

#[test]
fn shared_parser_across_threads() -> Result<()> {
    let parser = std::sync::Arc::new(PathParser::new());
    let handles: Vec<_> = (0..4)
	.map(|i| {
	    let parser = parser.clone();
	    std::thread::spawn(move || parser.parse(&format!("m {} 0 1 1 z", i)))
	})
	.collect();

    for (i, handle) in handles.into_iter().enumerate() {
	let actions = handle.join().expect("parser thread panicked")?;
	assert_eq!(actions.len(), 3);
	assert_eq!(*actions[0].command(), Command::Move(p(i as f64, 0.0)));
	assert!(actions[0].is_absolute());
    }
    Ok(())
}
