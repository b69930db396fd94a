use std::slice::Iter;

use crate::action::{Command, PathAction, Position};
use crate::point::Point;
use crate::transform::Transform;

/// Current point, tracked both before (`user`) and after (`device`) the
/// transform. Relative actions are anchored at `device`; absolute
/// horizontal/vertical lines hold the other axis from `user`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pen {
    pub user: Point,
    pub device: Point,
}

/// A pen at the same place in both frames, as under the identity.
impl From<Point> for Pen {
    fn from(p: Point) -> Self {
	Pen { user: p, device: p }
    }
}

impl Pen {
    /// Moves the pen to the end of `action`, given its resolved points.
    pub fn advance(&mut self, action: &PathAction, resolved: &[Point]) {
	let relative = action.position() == Position::Relative;

	match *action.command() {
	    Command::Close => return,
	    Command::HorizontalLine(x) => {
		self.user.x = if relative { self.user.x + x } else { x };
	    },
	    Command::VerticalLine(y) => {
		self.user.y = if relative { self.user.y + y } else { y };
	    },
	    _ => {
		if let Some(&end) = action.points().last() {
		    self.user = if relative { self.user + end } else { end };
		}
	    },
	}

	if let Some(&end) = resolved.last() {
	    self.device = end;
	}
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Traced<'a> {
    pub action: &'a PathAction,
    /// Placed points, in the same order as the action's raw points.
    pub points: Vec<Point>,
}

/// Resolves a sequence of actions, threading the pen from each action to
/// the next. A move starts a subpath and a close returns to its start.
pub struct Tracer<'a, T: ?Sized> {
    actions: Iter<'a, PathAction>,
    transform: &'a T,
    pen: Pen,
    subpath_start: Pen,
}

impl<'a, T: Transform + ?Sized> Tracer<'a, T> {
    pub fn new(actions: &'a [PathAction], transform: &'a T) -> Self {
	Tracer {
	    actions: actions.iter(),
	    transform,
	    pen: Pen::default(),
	    subpath_start: Pen::default(),
	}
    }

    pub fn pen(&self) -> Pen {
	self.pen
    }
}

impl<'a, T: Transform + ?Sized> Iterator for Tracer<'a, T> {
    type Item = Traced<'a>;

    fn next(&mut self) -> Option<Self::Item> {
	let action = self.actions.next()?;
	let points = action.resolve(self.pen, self.transform);

	match action.command() {
	    Command::Close => self.pen = self.subpath_start,
	    Command::Move(_) => {
		self.pen.advance(action, &points);
		self.subpath_start = self.pen;
	    },
	    _ => self.pen.advance(action, &points),
	}

	Some(Traced { action, points })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
	self.actions.size_hint()
    }
}
