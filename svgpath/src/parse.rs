use std::{ops::Deref, slice::Iter, str::FromStr, vec::IntoIter};

use crate::action::{ActionKind, Arc, Command, PathAction, Position};
use crate::error::{GrammarError, Result};
use crate::grammar::{tokenize, Token, TokenKind};
use crate::point::Point;
use crate::trace::Tracer;
use crate::transform::Transform;

/// What to do with smooth cubic, quadratic and smooth quadratic commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveHandling {
    /// Check their arguments, then drop them from the output. Paths using
    /// them come out incomplete.
    Discard,
    /// Emit them as actions of their own kind.
    Emit,
}

impl Default for CurveHandling {
    fn default() -> Self {
	CurveHandling::Discard
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub curves: CurveHandling,
}

/// Parser for path data strings. Holds only configuration, every call to
/// [`PathParser::parse`] runs on fresh state, so one parser can be shared.
#[derive(Debug, Clone, Default)]
pub struct PathParser {
    config: Config,
}

impl PathParser {
    pub fn new() -> Self {
	PathParser::default()
    }

    pub fn with_config(config: Config) -> Self {
	PathParser { config }
    }

    pub fn config(&self) -> &Config {
	&self.config
    }

    /// Parses a whole path. Either every command is valid and all actions
    /// are returned, or the first grammar error is.
    pub fn parse(&self, path: &str) -> Result<Vec<PathAction>> {
	let tokens = tokenize(path)?;
	let actions = Interpreter::new(&tokens, path.len(), self.config).run()?;
	Ok(actions)
    }
}

/// Parses with the default configuration.
pub fn parse(path: &str) -> Result<Vec<PathAction>> {
    PathParser::new().parse(path)
}

type Parsed<T> = std::result::Result<T, GrammarError>;

/// The command letter bare argument groups are attributed to.
#[derive(Debug, Clone, Copy)]
struct Active {
    letter: char,
    kind: ActionKind,
    position: Position,
    /// Argument groups read so far under this letter.
    groups: usize,
}

struct Interpreter<'t, 'a> {
    tokens: Iter<'t, Token<'a>>,
    /// Left over from a number token an arc flag was split from.
    pending: Option<Token<'a>>,
    end: usize,
    config: Config,
    active: Option<Active>,
    first_move: bool,
    actions: Vec<PathAction>,
}

impl<'t, 'a> Interpreter<'t, 'a> {
    fn new(tokens: &'t [Token<'a>], end: usize, config: Config) -> Self {
	Interpreter {
	    tokens: tokens.iter(),
	    pending: None,
	    end,
	    config,
	    active: None,
	    first_move: true,
	    actions: Vec::new(),
	}
    }

    fn run(mut self) -> Parsed<Vec<PathAction>> {
	while let Some(token) = self.peek() {
	    match token.kind {
		TokenKind::Command(letter) => {
		    self.advance();
		    self.start_command(token.offset, letter)?;
		},
		TokenKind::Number { .. } => self.repeat_command(token.offset)?,
	    }
	}

	Ok(self.actions)
    }

    fn peek(&self) -> Option<Token<'a>> {
	self.pending.or_else(|| self.tokens.as_slice().first().copied())
    }

    fn advance(&mut self) {
	if self.pending.take().is_none() {
	    self.tokens.next();
	}
    }

    fn start_command(&mut self, offset: usize, letter: char) -> Parsed<()> {
	let kind = ActionKind::from_letter(letter)
	    .ok_or_else(|| GrammarError::new(offset, format!("unknown command {:?}", letter)))?;
	let position = Position::of_letter(letter);

	let active = Active { letter, kind, position, groups: 0 };
	self.active = Some(active);

	if kind == ActionKind::Close {
	    self.emit(PathAction::from_command(Command::Close, position));
	    return Ok(());
	}

	self.group(active, offset)
    }

    /// Numbers with no command letter before them repeat the last one.
    fn repeat_command(&mut self, offset: usize) -> Parsed<()> {
	match self.active {
	    None => Err(GrammarError::new(offset, "expected a command letter")),
	    Some(active) if active.kind == ActionKind::Close =>
		Err(GrammarError::new(offset, "close takes no arguments")),
	    Some(active) => self.group(active, offset),
	}
    }

    /// Reads one argument group of the active command.
    fn group(&mut self, mut active: Active, offset: usize) -> Parsed<()> {
	let mut position = active.position;

	let command = match active.kind {
	    ActionKind::Move => {
		let to = self.pair()?;
		if active.groups > 0 {
		    Command::Line(to)
		} else {
		    // nothing to be relative to yet
		    if self.first_move && active.letter == 'm' {
			position = Position::Absolute;
		    }
		    Command::Move(to)
		}
	    },
	    ActionKind::Line => Command::Line(self.pair()?),
	    ActionKind::HorizontalLine => Command::HorizontalLine(self.number()?),
	    ActionKind::VerticalLine => Command::VerticalLine(self.number()?),
	    ActionKind::CubicCurve => {
		let (c1, c2, end) = (self.pair()?, self.pair()?, self.pair()?);
		Command::CubicCurve(c1, c2, end)
	    },
	    ActionKind::SmoothCubicCurve => {
		let (c2, end) = (self.pair()?, self.pair()?);
		Command::SmoothCubicCurve(c2, end)
	    },
	    ActionKind::QuadraticCurve => {
		let (c, end) = (self.pair()?, self.pair()?);
		Command::QuadraticCurve(c, end)
	    },
	    ActionKind::SmoothQuadraticCurve => Command::SmoothQuadraticCurve(self.pair()?),
	    ActionKind::Arc => self.arc()
		.map_err(|err| GrammarError::new(err.offset, format!("Invalid Arc: {}", err.message)))?,
	    ActionKind::Close => return Err(GrammarError::new(offset, "close takes no arguments")),
	};

	active.groups += 1;
	self.active = Some(active);

	match command {
	    Command::SmoothCubicCurve(..)
		| Command::QuadraticCurve(..)
		| Command::SmoothQuadraticCurve(..) if self.config.curves == CurveHandling::Discard => {
		    log::debug!("discarding {:?} command at offset {}", active.letter, offset);
		},
	    _ => self.emit(PathAction::from_command(command, position)),
	}

	Ok(())
    }

    fn emit(&mut self, action: PathAction) {
	if action.kind() == ActionKind::Move {
	    self.first_move = false;
	}
	log::trace!("{}", action);
	self.actions.push(action);
    }

    fn number(&mut self) -> Parsed<f64> {
	match self.peek() {
	    Some(Token { kind: TokenKind::Number { value, .. }, .. }) => {
		self.advance();
		Ok(value)
	    },
	    Some(Token { offset, kind: TokenKind::Command(letter) }) =>
		Err(GrammarError::new(offset, format!("expected a number, found {:?}", letter))),
	    None => Err(GrammarError::new(self.end, "expected a number, found end of data")),
	}
    }

    fn pair(&mut self) -> Parsed<Point> {
	let x = self.number()?;
	let y = self.number()?;
	Ok(Point::new(x, y))
    }

    fn flag(&mut self) -> Parsed<bool> {
	let token = self.peek()
	    .ok_or_else(|| GrammarError::new(self.end, "expected a flag, found end of data"))?;
	self.advance();

	let (flag, rest) = token.split_flag()?;
	self.pending = rest;
	Ok(flag)
    }

    /// `rx ry rotation large-arc sweep x y`
    fn arc(&mut self) -> Parsed<Command> {
	let rx = self.number()?;
	let ry = self.number()?;
	let rotation = self.number()?;
	let large_arc = self.flag()?;
	let sweep = self.flag()?;
	let end = self.pair()?;

	Ok(Command::Arc(Arc { rx, ry, rotation, large_arc, sweep }, end))
    }
}

/// Parsed path data: the ordered actions of one path string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Data(Vec<PathAction>);

impl Data {
    pub fn parse(path: &str) -> Result<Data> {
	parse(path).map(Data)
    }

    pub fn trace<'a, T: Transform + ?Sized>(&'a self, transform: &'a T) -> Tracer<'a, T> {
	Tracer::new(&self.0, transform)
    }

    pub fn into_inner(self) -> Vec<PathAction> {
	self.0
    }
}

impl FromStr for Data {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
	Data::parse(s)
    }
}

impl From<Vec<PathAction>> for Data {
    fn from(actions: Vec<PathAction>) -> Self {
	Data(actions)
    }
}

impl Deref for Data {
    type Target = [PathAction];

    fn deref(&self) -> &Self::Target {
	&self.0
    }
}

impl IntoIterator for Data {
    type Item = PathAction;
    type IntoIter = IntoIter<PathAction>;

    fn into_iter(self) -> Self::IntoIter {
	self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Data {
    type Item = &'a PathAction;
    type IntoIter = Iter<'a, PathAction>;

    fn into_iter(self) -> Self::IntoIter {
	self.0.iter()
    }
}
