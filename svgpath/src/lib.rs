//! Parser for SVG path data (the `d` attribute).
//!
//! A path string is tokenized, then interpreted into an ordered list of
//! [`PathAction`]s carrying raw coordinates. Placing those coordinates in a
//! frame is left to the caller, through [`PathAction::resolve`] or a
//! [`Tracer`] over the whole path.
//!
//! ```
//! use svgpath::{parse, Identity, Point, Tracer};
//!
//! let actions = parse("m 10,10 l 5,5 z").unwrap();
//! let placed: Vec<_> = Tracer::new(&actions, &Identity).map(|t| t.points).collect();
//! assert_eq!(placed[1], vec![Point::new(15.0, 15.0)]);
//! ```

mod action;
mod error;
pub mod grammar;
mod parse;
mod point;
mod trace;
mod transform;

#[cfg(test)]
mod tests;

pub use action::{ActionKind, Arc, ArcOptions, Command, PathAction, Position};
pub use error::{Error, GrammarError, Result};
pub use parse::{parse, Config, CurveHandling, Data, PathParser};
pub use point::Point;
pub use trace::{Pen, Traced, Tracer};
pub use transform::{Identity, Matrix, Transform};
