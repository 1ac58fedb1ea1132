use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Point;

/// Per-axis scale factor of a resize. A negative component mirrors the shape
/// along that axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    pub const IDENTITY: Scale = Scale { x: 1.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn uniform(factor: f64) -> Self {
        Self::new(factor, factor)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Replaces any non-finite component with `1`, leaving that axis untouched.
    pub fn sanitized(self) -> Self {
        Self::new(
            if self.x.is_finite() { self.x } else { 1.0 },
            if self.y.is_finite() { self.y } else { 1.0 },
        )
    }

    /// Both axes take the larger magnitude, each keeping its own sign.
    pub fn locked_to_larger(self) -> Self {
        let magnitude = self.x.abs().max(self.y.abs());
        Self::new(magnitude.copysign(self.x), magnitude.copysign(self.y))
    }

    /// Both axes take the smaller magnitude, each keeping its own sign.
    pub fn locked_to_smaller(self) -> Self {
        let magnitude = self.x.abs().min(self.y.abs());
        Self::new(magnitude.copysign(self.x), magnitude.copysign(self.y))
    }

    /// Exactly one axis is negative: a mirror rather than a point reflection.
    pub fn is_mirror(&self) -> bool {
        (self.x < 0.0) != (self.y < 0.0)
    }

    /// Swaps the axes, for shapes a quarter turn off the scale axis.
    pub fn swapped(self) -> Self {
        Self::new(self.y, self.x)
    }

    pub fn as_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Scale {
    type Err = String;

    /// Parses `"sx,sy"` or a single uniform factor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| format!("Invalid scale component: {}", v))
        };
        match s.split_once(',') {
            Some((x, y)) => Ok(Self::new(parse(x)?, parse(y)?)),
            None => Ok(Self::uniform(parse(s)?)),
        }
    }
}

impl From<(f64, f64)> for Scale {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
