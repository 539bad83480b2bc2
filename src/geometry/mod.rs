//! Line-reflection geometry.
//!
//! A mirror is the infinite line through two points. Reflecting a point means
//! dropping a perpendicular onto that line (the "foot") and walking the same
//! distance again past it:
//!
//! ```text
//!   point ──────► foot ──────► reflection      reflection = 2 * foot - point
//! ```
//!
//! The mirror is classified once into a [`LineKind`] so the vertical and
//! horizontal special cases are plain enum arms instead of NaN sentinels.
//! Math runs in `f64` internally; callers hand in and get back `Vec2`.

use std::fmt;

use bevy::math::{DVec2, Vec2};

/// Two points spanning an infinite mirror line.
///
/// Only direction and position matter; the segment length is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

impl Line {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// A zero-length line has no direction and cannot act as a mirror.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// The only failure the geometry knows about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReflectError {
    /// Both endpoints coincide, so the mirror has no direction.
    DegenerateMirror { at: Vec2 },
}

impl fmt::Display for ReflectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectError::DegenerateMirror { at } => {
                write!(f, "mirror line is zero-length at ({}, {})", at.x, at.y)
            }
        }
    }
}

impl std::error::Error for ReflectError {}

/// Equation form of a mirror line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineKind {
    /// `x = x`
    Vertical { x: f64 },
    /// `y = y`
    Horizontal { y: f64 },
    /// `y = gradient * x + y_intercept`
    Oblique { gradient: f64, y_intercept: f64 },
}

impl LineKind {
    pub fn from_line(line: Line) -> Result<Self, ReflectError> {
        if line.is_degenerate() {
            return Err(ReflectError::DegenerateMirror { at: line.start });
        }

        let a = line.start.as_dvec2();
        let b = line.end.as_dvec2();

        if a.x == b.x {
            return Ok(LineKind::Vertical { x: a.x });
        }

        let gradient = (b.y - a.y) / (b.x - a.x);
        if gradient == 0.0 {
            // Read y straight off the endpoint so we never produce a -0 intercept.
            return Ok(LineKind::Horizontal { y: a.y });
        }

        Ok(LineKind::Oblique {
            gradient,
            y_intercept: a.y - gradient * a.x,
        })
    }
}

/// A mirror line classified once, ready for any number of reflections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mirror {
    kind: LineKind,
}

impl Mirror {
    pub fn new(line: Line) -> Result<Self, ReflectError> {
        Ok(Self {
            kind: LineKind::from_line(line)?,
        })
    }

    #[inline]
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Foot of the perpendicular dropped from `point` onto the mirror.
    pub fn foot_of(&self, point: Vec2) -> Vec2 {
        self.foot_of_f64(point.as_dvec2()).as_vec2()
    }

    /// Mirror image of `point` across the line.
    pub fn reflect(&self, point: Vec2) -> Vec2 {
        let p = point.as_dvec2();
        let foot = self.foot_of_f64(p);
        (p + 2.0 * (foot - p)).as_vec2()
    }

    fn foot_of_f64(&self, p: DVec2) -> DVec2 {
        match self.kind {
            LineKind::Vertical { x } => DVec2::new(x, p.y),
            LineKind::Horizontal { y } => DVec2::new(p.x, y),
            LineKind::Oblique { gradient, y_intercept } => {
                // Perpendicular through p: y = -(1/m) x + c2
                let perp_gradient = -1.0 / gradient;
                let perp_intercept = p.y - perp_gradient * p.x;

                // Equate both lines: m x + c1 = p x + c2
                let x = (perp_intercept - y_intercept) / (gradient - perp_gradient);
                DVec2::new(x, gradient * x + y_intercept)
            }
        }
    }
}

/// Reflect `point` across the infinite line through `mirror`.
///
/// Fails only for a zero-length mirror.
pub fn reflect(mirror: Line, point: Vec2) -> Result<Vec2, ReflectError> {
    Ok(Mirror::new(mirror)?.reflect(point))
}
