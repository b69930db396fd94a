use std::fmt;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::trace::Pen;
use crate::transform::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Absolute,
    Relative,
}

impl Position {
    /// Upper-case command letters are absolute.
    pub fn of_letter(letter: char) -> Position {
	if letter.is_ascii_uppercase() {
	    Position::Absolute
	} else {
	    Position::Relative
	}
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	f.write_str(match self {
	    Position::Absolute => "Abs",
	    Position::Relative => "Rel",
	})
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Move,
    Line,
    HorizontalLine,
    VerticalLine,
    CubicCurve,
    SmoothCubicCurve,
    QuadraticCurve,
    SmoothQuadraticCurve,
    Arc,
    Close,
}

impl ActionKind {
    pub fn from_letter(letter: char) -> Option<ActionKind> {
	Some(match letter.to_ascii_lowercase() {
	    'm' => ActionKind::Move,
	    'l' => ActionKind::Line,
	    'h' => ActionKind::HorizontalLine,
	    'v' => ActionKind::VerticalLine,
	    'c' => ActionKind::CubicCurve,
	    's' => ActionKind::SmoothCubicCurve,
	    'q' => ActionKind::QuadraticCurve,
	    't' => ActionKind::SmoothQuadraticCurve,
	    'a' => ActionKind::Arc,
	    'z' => ActionKind::Close,
	    _ => return None,
	})
    }

    /// Lower-case command letter.
    pub fn letter(self) -> char {
	match self {
	    ActionKind::Move => 'm',
	    ActionKind::Line => 'l',
	    ActionKind::HorizontalLine => 'h',
	    ActionKind::VerticalLine => 'v',
	    ActionKind::CubicCurve => 'c',
	    ActionKind::SmoothCubicCurve => 's',
	    ActionKind::QuadraticCurve => 'q',
	    ActionKind::SmoothQuadraticCurve => 't',
	    ActionKind::Arc => 'a',
	    ActionKind::Close => 'z',
	}
    }

    /// Number of coordinate pairs an action of this kind carries.
    pub fn point_count(self) -> usize {
	match self {
	    ActionKind::Close => 0,
	    ActionKind::CubicCurve => 3,
	    ActionKind::SmoothCubicCurve | ActionKind::QuadraticCurve => 2,
	    _ => 1,
	}
    }
}

/// Elliptical arc parameters, the endpoint lives in [`Command::Arc`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Arc {
    pub rx: f64,
    pub ry: f64,
    /// x-axis rotation in degrees
    pub rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// Partial update of [`Arc`] parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArcOptions {
    pub rx: Option<f64>,
    pub ry: Option<f64>,
    pub rotation: Option<f64>,
    pub large_arc: Option<bool>,
    pub sweep: Option<bool>,
}

impl Arc {
    pub fn merge(&mut self, options: ArcOptions) {
	if let Some(rx) = options.rx {
	    self.rx = rx;
	}
	if let Some(ry) = options.ry {
	    self.ry = ry;
	}
	if let Some(rotation) = options.rotation {
	    self.rotation = rotation;
	}
	if let Some(large_arc) = options.large_arc {
	    self.large_arc = large_arc;
	}
	if let Some(sweep) = options.sweep {
	    self.sweep = sweep;
	}
    }
}

impl From<Arc> for ArcOptions {
    fn from(arc: Arc) -> Self {
	ArcOptions {
	    rx: Some(arc.rx),
	    ry: Some(arc.ry),
	    rotation: Some(arc.rotation),
	    large_arc: Some(arc.large_arc),
	    sweep: Some(arc.sweep),
	}
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Move(Point),
    Line(Point),
    HorizontalLine(f64),
    VerticalLine(f64),
    /// control 1, control 2, end
    CubicCurve(Point, Point, Point),
    /// control 2, end
    SmoothCubicCurve(Point, Point),
    /// control, end
    QuadraticCurve(Point, Point),
    SmoothQuadraticCurve(Point),
    Arc(Arc, Point),
    Close,
}

impl Command {
    pub fn kind(&self) -> ActionKind {
	match self {
	    Command::Move(..) => ActionKind::Move,
	    Command::Line(..) => ActionKind::Line,
	    Command::HorizontalLine(..) => ActionKind::HorizontalLine,
	    Command::VerticalLine(..) => ActionKind::VerticalLine,
	    Command::CubicCurve(..) => ActionKind::CubicCurve,
	    Command::SmoothCubicCurve(..) => ActionKind::SmoothCubicCurve,
	    Command::QuadraticCurve(..) => ActionKind::QuadraticCurve,
	    Command::SmoothQuadraticCurve(..) => ActionKind::SmoothQuadraticCurve,
	    Command::Arc(..) => ActionKind::Arc,
	    Command::Close => ActionKind::Close,
	}
    }
}

/// One drawing command of a path, with its raw (unplaced) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathAction {
    position: Position,
    command: Command,
}

impl PathAction {
    /// Builds an action from a kind and its raw points. Horizontal lines
    /// take the x of their single point, vertical lines the y. Arcs start
    /// with zeroed parameters, see [`PathAction::merge_options`].
    pub fn new(kind: ActionKind, points: &[Point], position: Position) -> Result<Self> {
	if points.len() != kind.point_count() {
	    return Err(Error::InvalidArgument(format!(
		"{:?} takes {} point(s), got {}", kind, kind.point_count(), points.len())));
	}

	let command = match kind {
	    ActionKind::Move => Command::Move(points[0]),
	    ActionKind::Line => Command::Line(points[0]),
	    ActionKind::HorizontalLine => Command::HorizontalLine(points[0].x),
	    ActionKind::VerticalLine => Command::VerticalLine(points[0].y),
	    ActionKind::CubicCurve => Command::CubicCurve(points[0], points[1], points[2]),
	    ActionKind::SmoothCubicCurve => Command::SmoothCubicCurve(points[0], points[1]),
	    ActionKind::QuadraticCurve => Command::QuadraticCurve(points[0], points[1]),
	    ActionKind::SmoothQuadraticCurve => Command::SmoothQuadraticCurve(points[0]),
	    ActionKind::Arc => Command::Arc(Arc::default(), points[0]),
	    ActionKind::Close => Command::Close,
	};

	Ok(PathAction::from_command(command, position))
    }

    /// Close is always relative: it returns to the subpath start whatever
    /// the letter case.
    pub fn from_command(command: Command, position: Position) -> Self {
	let position = match command {
	    Command::Close => Position::Relative,
	    _ => position,
	};
	PathAction { position, command }
    }

    pub fn position(&self) -> Position {
	self.position
    }

    pub fn command(&self) -> &Command {
	&self.command
    }

    pub fn kind(&self) -> ActionKind {
	self.command.kind()
    }

    pub fn is_absolute(&self) -> bool {
	self.position == Position::Absolute
    }

    /// Diagnostic command letter, upper-cased when absolute.
    pub fn letter(&self) -> char {
	let letter = self.kind().letter();
	match self.position {
	    Position::Absolute => letter.to_ascii_uppercase(),
	    Position::Relative => letter,
	}
    }

    pub fn arc(&self) -> Option<&Arc> {
	match &self.command {
	    Command::Arc(arc, _) => Some(arc),
	    _ => None,
	}
    }

    /// Sets the given arc parameters, keeping the others.
    pub fn merge_options(&mut self, options: ArcOptions) -> Result<()> {
	match &mut self.command {
	    Command::Arc(arc, _) => {
		arc.merge(options);
		Ok(())
	    },
	    other => Err(Error::InvalidArgument(format!(
		"{:?} takes no arc options", other.kind()))),
	}
    }

    /// Raw coordinate pairs. Horizontal and vertical lines carry a single
    /// coordinate and yield none here.
    pub fn points(&self) -> Vec<Point> {
	match self.command {
	    Command::Move(p)
		| Command::Line(p)
		| Command::SmoothQuadraticCurve(p)
		| Command::Arc(_, p) => vec![p],
	    Command::SmoothCubicCurve(p1, p2)
		| Command::QuadraticCurve(p1, p2) => vec![p1, p2],
	    Command::CubicCurve(p1, p2, p3) => vec![p1, p2, p3],
	    Command::HorizontalLine(_)
		| Command::VerticalLine(_)
		| Command::Close => Vec::new(),
	}
    }

    /// Places the raw points. Absolute points go through the full
    /// transform; relative ones are scaled as vectors and then anchored
    /// at the pen's device position.
    pub fn resolve<T: Transform + ?Sized>(&self, pen: impl Into<Pen>, transform: &T) -> Vec<Point> {
	let pen = pen.into();
	let absolute = |p: Point| -> Point {
	    transform.transform_point(p.x, p.y).into()
	};
	let relative = |p: Point| -> Point {
	    Point::from(transform.scale_point(p.x, p.y)) + pen.device
	};

	match (self.command, self.position) {
	    (Command::HorizontalLine(x), Position::Absolute) =>
		vec![absolute(Point::new(x, pen.user.y))],
	    (Command::HorizontalLine(dx), Position::Relative) =>
		vec![relative(Point::new(dx, 0.0))],
	    (Command::VerticalLine(y), Position::Absolute) =>
		vec![absolute(Point::new(pen.user.x, y))],
	    (Command::VerticalLine(dy), Position::Relative) =>
		vec![relative(Point::new(0.0, dy))],
	    (_, Position::Absolute) => self.points().into_iter().map(absolute).collect(),
	    (_, Position::Relative) => self.points().into_iter().map(relative).collect(),
	}
    }
}

impl fmt::Display for PathAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "{} {}", self.letter(), self.position)?;
	match self.command {
	    Command::HorizontalLine(v) | Command::VerticalLine(v) => write!(f, " {}", v),
	    _ => {
		for p in self.points() {
		    write!(f, " {}", p)?;
		}
		Ok(())
	    },
	}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{Identity, Matrix};

    fn p(x: f64, y: f64) -> Point {
	Point::new(x, y)
    }

    #[test]
    fn letters_follow_position() -> Result<()> {
	let abs = PathAction::new(ActionKind::Line, &[p(1.0, 2.0)], Position::Absolute)?;
	let rel = PathAction::new(ActionKind::Line, &[p(1.0, 2.0)], Position::Relative)?;
	assert_eq!(abs.letter(), 'L');
	assert_eq!(rel.letter(), 'l');

	let close = PathAction::new(ActionKind::Close, &[], Position::Absolute)?;
	assert_eq!(close.letter(), 'z');
	assert!(!close.is_absolute());
	Ok(())
    }

    #[test]
    fn wrong_point_count_is_rejected() {
	let err = PathAction::new(ActionKind::CubicCurve, &[p(0.0, 0.0)], Position::Absolute);
	match err {
	    Err(Error::InvalidArgument(_)) => (),
	    other => panic!("unexpected: {:?}", other),
	}
	assert!(PathAction::new(ActionKind::Close, &[p(0.0, 0.0)], Position::Relative).is_err());
    }

    #[test]
    fn display() -> Result<()> {
	let cubic = PathAction::new(
	    ActionKind::CubicCurve,
	    &[p(1.0, 2.0), p(3.5, 4.0), p(-5.0, 6.0)],
	    Position::Relative)?;
	assert_eq!(cubic.to_string(), "c Rel 1,2 3.5,4 -5,6");

	let hline = PathAction::from_command(Command::HorizontalLine(7.0), Position::Absolute);
	assert_eq!(hline.to_string(), "H Abs 7");

	let close = PathAction::from_command(Command::Close, Position::Absolute);
	assert_eq!(close.to_string(), "z Rel");
	Ok(())
    }

    #[test]
    fn merge_arc_options() -> Result<()> {
	let mut arc = PathAction::new(ActionKind::Arc, &[p(10.0, 10.0)], Position::Absolute)?;
	arc.merge_options(ArcOptions { rx: Some(5.0), ry: Some(3.0), ..Default::default() })?;
	arc.merge_options(ArcOptions { sweep: Some(true), ..Default::default() })?;
	assert_eq!(arc.arc(), Some(&Arc { rx: 5.0, ry: 3.0, rotation: 0.0, large_arc: false, sweep: true }));
	assert_eq!(arc.points(), vec![p(10.0, 10.0)]);

	let mut line = PathAction::new(ActionKind::Line, &[p(1.0, 1.0)], Position::Absolute)?;
	assert!(line.merge_options(ArcOptions::default()).is_err());
	Ok(())
    }

    #[test]
    fn resolve_relative_and_absolute() -> Result<()> {
	let rel = PathAction::new(ActionKind::Line, &[p(3.0, 4.0)], Position::Relative)?;
	assert_eq!(rel.resolve(p(10.0, 10.0), &Identity), vec![p(13.0, 14.0)]);

	let abs = PathAction::new(ActionKind::Line, &[p(3.0, 4.0)], Position::Absolute)?;
	assert_eq!(abs.resolve(p(10.0, 10.0), &Identity), vec![p(3.0, 4.0)]);
	Ok(())
    }

    #[test]
    fn relative_points_skip_translation() -> Result<()> {
	let m = Matrix::translate(100.0, 50.0).multiply(&Matrix::scale(2.0, 2.0));

	let rel = PathAction::new(ActionKind::Line, &[p(3.0, 4.0)], Position::Relative)?;
	assert_eq!(rel.resolve(p(10.0, 10.0), &m), vec![p(16.0, 18.0)]);

	let abs = PathAction::new(ActionKind::Line, &[p(3.0, 4.0)], Position::Absolute)?;
	assert_eq!(abs.resolve(p(10.0, 10.0), &m), vec![p(106.0, 58.0)]);
	Ok(())
    }

    #[test]
    fn resolve_axis_lines() {
	let pen = Pen { user: p(1.0, 2.0), device: p(1.0, 2.0) };

	let h = PathAction::from_command(Command::HorizontalLine(9.0), Position::Absolute);
	assert_eq!(h.resolve(pen, &Identity), vec![p(9.0, 2.0)]);
	let h = PathAction::from_command(Command::HorizontalLine(9.0), Position::Relative);
	assert_eq!(h.resolve(pen, &Identity), vec![p(10.0, 2.0)]);
	let v = PathAction::from_command(Command::VerticalLine(-2.0), Position::Absolute);
	assert_eq!(v.resolve(pen, &Identity), vec![p(1.0, -2.0)]);
	let v = PathAction::from_command(Command::VerticalLine(-2.0), Position::Relative);
	assert_eq!(v.resolve(pen, &Identity), vec![p(1.0, 0.0)]);
    }

    #[test]
    fn close_resolves_to_nothing() {
	let close = PathAction::from_command(Command::Close, Position::Relative);
	assert!(close.resolve(p(5.0, 5.0), &Identity).is_empty());
    }
}
