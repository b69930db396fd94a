use std::str::FromStr;

use nom::{
    IResult, Finish, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{all_consuming, map_opt},
    multi::many0,
    sequence::{delimited, preceded, terminated, tuple},
};

use crate::error::Error;
use crate::grammar::{number, separator, wsp0};

/// Coordinate frame a path is placed in.
pub trait Transform {
    /// Full affine transform, for absolute coordinates.
    fn transform_point(&self, x: f64, y: f64) -> (f64, f64);

    /// Linear part only, for deltas.
    fn scale_point(&self, x: f64, y: f64) -> (f64, f64);
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Identity;

impl Transform for Identity {
    fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
	(x, y)
    }

    fn scale_point(&self, x: f64, y: f64) -> (f64, f64) {
	(x, y)
    }
}

/// Affine matrix, laid out like SVG's `matrix(a b c d e f)`:
///
/// ```text
/// x' = xx * x + xy * y + x0
/// y' = yx * x + yy * y + y0
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Default for Matrix {
    fn default() -> Self {
	Matrix::identity()
    }
}

impl Matrix {
    pub fn new(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Self {
	Matrix { xx, yx, xy, yy, x0, y0 }
    }

    pub fn identity() -> Self {
	Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub fn translate(tx: f64, ty: f64) -> Self {
	Matrix::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
	Matrix::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Counter-clockwise in a y-up frame, angle in degrees.
    pub fn rotate(degrees: f64) -> Self {
	let (sin, cos) = degrees.to_radians().sin_cos();
	Matrix::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    pub fn skew_x(degrees: f64) -> Self {
	Matrix::new(1.0, 0.0, degrees.to_radians().tan(), 1.0, 0.0, 0.0)
    }

    pub fn skew_y(degrees: f64) -> Self {
	Matrix::new(1.0, degrees.to_radians().tan(), 0.0, 1.0, 0.0, 0.0)
    }

    /// `self * other`: the result applies `other` first, then `self`.
    pub fn multiply(&self, other: &Matrix) -> Matrix {
	Matrix {
	    xx: self.xx * other.xx + self.xy * other.yx,
	    yx: self.yx * other.xx + self.yy * other.yx,
	    xy: self.xx * other.xy + self.xy * other.yy,
	    yy: self.yx * other.xy + self.yy * other.yy,
	    x0: self.xx * other.x0 + self.xy * other.y0 + self.x0,
	    y0: self.yx * other.x0 + self.yy * other.y0 + self.y0,
	}
    }
}

impl Transform for Matrix {
    fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
	let (sx, sy) = self.scale_point(x, y);
	(sx + self.x0, sy + self.y0)
    }

    fn scale_point(&self, x: f64, y: f64) -> (f64, f64) {
	(self.xx * x + self.xy * y, self.yx * x + self.yy * y)
    }
}

fn snd<T, U>(input: (U, T)) -> T { input.1 }

fn arguments(input: &str) -> IResult<&str, Vec<f64>> {
    let (input, first) = number(input)?;
    let (input, mut rest) = many0(preceded(separator, number))(input)?;
    rest.insert(0, first);
    Ok((input, rest))
}

/// `name ( args )`, whitespace allowed around the parentheses.
fn svg_function<'a>(name: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, Vec<f64>> {
    let mut parser = tag::<_, &'a str, nom::error::Error<&'a str>>(name)
	.and(wsp0)
	.and(delimited(tuple((char('('), wsp0)),
		       arguments,
		       tuple((wsp0, char(')')))))
	.map(snd);

    move |s| parser.parse(s)
}

fn transform(input: &str) -> IResult<&str, Matrix> {
    alt((
	map_opt(svg_function("matrix"), |args: Vec<f64>| match args.as_slice() {
	    &[a, b, c, d, e, f] => Some(Matrix::new(a, b, c, d, e, f)),
	    _ => None,
	}),
	map_opt(svg_function("translate"), |args: Vec<f64>| match args.as_slice() {
	    &[tx] => Some(Matrix::translate(tx, 0.0)),
	    &[tx, ty] => Some(Matrix::translate(tx, ty)),
	    _ => None,
	}),
	map_opt(svg_function("scale"), |args: Vec<f64>| match args.as_slice() {
	    &[s] => Some(Matrix::scale(s, s)),
	    &[sx, sy] => Some(Matrix::scale(sx, sy)),
	    _ => None,
	}),
	map_opt(svg_function("rotate"), |args: Vec<f64>| match args.as_slice() {
	    &[a] => Some(Matrix::rotate(a)),
	    &[a, cx, cy] => Some(Matrix::translate(cx, cy)
				 .multiply(&Matrix::rotate(a))
				 .multiply(&Matrix::translate(-cx, -cy))),
	    _ => None,
	}),
	map_opt(svg_function("skewX"), |args: Vec<f64>| match args.as_slice() {
	    &[a] => Some(Matrix::skew_x(a)),
	    _ => None,
	}),
	map_opt(svg_function("skewY"), |args: Vec<f64>| match args.as_slice() {
	    &[a] => Some(Matrix::skew_y(a)),
	    _ => None,
	}),
    ))(input)
}

fn transform_list(input: &str) -> IResult<&str, Matrix> {
    let (input, transforms) = all_consuming(
	terminated(many0(preceded(separator, transform)), wsp0))(input)?;

    let matrix = transforms.iter()
	.fold(Matrix::identity(), |acc, m| acc.multiply(m));
    Ok((input, matrix))
}

/// Parses an SVG `transform` attribute, e.g. `translate(10 20) scale(2)`.
/// Transforms compose left to right, the empty list is the identity.
impl FromStr for Matrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
	transform_list(s)
	    .finish()
	    .map(snd)
	    .map_err(|_| Error::InvalidArgument(format!("invalid transform list: {:?}", s)))
    }
}

#[cfg(feature = "cairo")]
impl Transform for cairo::Matrix {
    fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
	cairo::Matrix::transform_point(self, x, y)
    }

    fn scale_point(&self, x: f64, y: f64) -> (f64, f64) {
	self.transform_distance(x, y)
    }
}

#[cfg(feature = "cairo")]
impl From<Matrix> for cairo::Matrix {
    fn from(m: Matrix) -> Self {
	cairo::Matrix::new(m.xx, m.yx, m.xy, m.yy, m.x0, m.y0)
    }
}
