use serde::{Deserialize, Serialize};

/// Cartesian point in the orbital plane
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn to_polar(&self) -> PolarPoint {
        PolarPoint {
            r: self.magnitude(),
            theta: self.y.atan2(self.x),
        }
    }
}

/// Polar coordinates in the orbital plane (r may carry any sign, theta in radians)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    pub r: f64,
    pub theta: f64,
}

impl PolarPoint {
    pub fn new(r: f64, theta: f64) -> Self {
        Self { r, theta }
    }

    pub fn to_cartesian(&self) -> PlanePoint {
        PlanePoint {
            x: self.r * self.theta.cos(),
            y: self.r * self.theta.sin(),
        }
    }
}
