use crate::errors::ExerciseError;

/// Tolerance around the boundary of the unit-normalized circle.
pub const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

fn check_finite(point: Point, what: &str) -> Result<Point, ExerciseError> {
    if !point.is_finite() {
        return Err(ExerciseError::invalid(format!(
            "{} must have finite coordinates (got ({}, {}))",
            what, point.x, point.y
        )));
    }
    Ok(point)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Inside,
    OnBoundary,
    Outside,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Inside => "inside",
            Position::OnBoundary => "on_boundary",
            Position::Outside => "outside",
        }
    }
}

/// Circle with a strictly positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self, ExerciseError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ExerciseError::invalid(format!(
                "radius must be finite and > 0 (got {})",
                radius
            )));
        }
        let center = check_finite(center, "center")?;
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Squared distance of `point` from the center, in units of the radius.
    pub fn normalized_distance(&self, point: Point) -> f64 {
        let dx = (point.x - self.center.x) / self.radius;
        let dy = (point.y - self.center.y) / self.radius;
        dx * dx + dy * dy
    }

    pub fn classify(&self, point: Point) -> Result<Position, ExerciseError> {
        let d = self.normalized_distance(check_finite(point, "point")?);
        let position = if (d - 1.0).abs() <= EPSILON {
            Position::OnBoundary
        } else if d < 1.0 {
            Position::Inside
        } else {
            Position::Outside
        };
        Ok(position)
    }
}

pub fn classify(point: Point, center: Point, radius: f64) -> Result<Position, ExerciseError> {
    Circle::new(center, radius)?.classify(point)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
    RightAngled,
    Scalene,
}

impl TriangleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleKind::Equilateral => "equilateral",
            TriangleKind::Isosceles => "isosceles",
            TriangleKind::RightAngled => "right_angled",
            TriangleKind::Scalene => "scalene",
        }
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * a.abs().max(b.abs())
}

/// Classify a triangle by its side lengths. Sides are validated before any
/// comparison; equal sides take precedence over a right angle.
pub fn classify_triangle(a: f64, b: f64, c: f64) -> Result<TriangleKind, ExerciseError> {
    for (name, side) in [("a", a), ("b", b), ("c", c)] {
        if !(side.is_finite() && side > 0.0) {
            return Err(ExerciseError::invalid(format!(
                "side {} must be finite and > 0 (got {})",
                name, side
            )));
        }
    }

    let mut sides = [a, b, c];
    sides.sort_by(f64::total_cmp);
    let [short, mid, long] = sides;
    if short + mid <= long {
        return Err(ExerciseError::invalid(format!(
            "sides {}, {}, {} do not form a triangle",
            a, b, c
        )));
    }

    let kind = if approx_eq(a, b) && approx_eq(b, c) {
        TriangleKind::Equilateral
    } else if approx_eq(a, b) || approx_eq(a, c) || approx_eq(b, c) {
        TriangleKind::Isosceles
    } else if approx_eq(short * short + mid * mid, long * long) {
        TriangleKind::RightAngled
    } else {
        TriangleKind::Scalene
    };
    Ok(kind)
}
