use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::angle::approximately_within;

/// A point (or offset) in page, parent or local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle`.
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise product.
    pub fn mul_components(&self, other: Point) -> Point {
        Point::new(self.x * other.x, self.y * other.y)
    }

    /// Rotates this point about the coordinate origin.
    pub fn rotate(&self, angle: f64) -> Point {
        let (s, c) = angle.sin_cos();
        Point::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Rotates this point about `center`.
    pub fn rotate_with(&self, center: Point, angle: f64) -> Point {
        if angle == 0.0 {
            return *self;
        }
        (*self - center).rotate(angle) + center
    }

    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        approximately_within(self.x, other.x, tolerance)
            && approximately_within(self.y, other.y, tolerance)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<Point2<f64>> for Point {
    fn from(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl FromStr for Point {
    type Err = String;

    /// Parses `"x,y"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("Expected x,y but got: {}", s))?;
        let x = x
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Invalid x coordinate: {}", x))?;
        let y = y
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Invalid y coordinate: {}", y))?;
        Ok(Point::new(x, y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
