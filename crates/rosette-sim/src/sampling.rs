//! Uniform angular sampling of an orbit for export and plotting

use crate::orbit::OrbitModel;
use rosette_core::coordinates::PolarPoint;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Sampling density: samples per full turn of 2π radians.
/// A resolution policy, not a correctness requirement.
pub const SAMPLES_PER_TURN: f64 = 1000.0;

/// One point along the trajectory
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitSample {
    /// Angle swept (radians)
    pub theta: f64,
    /// Radius at that angle
    pub radius: f64,
    /// Cartesian x = radius·cos(theta)
    pub x: f64,
    /// Cartesian y = radius·sin(theta)
    pub y: f64,
}

impl OrbitModel {
    /// Sample the trajectory uniformly over the closed angular range
    /// `[theta_start, theta_end]`.
    ///
    /// The sample count is `floor(SAMPLES_PER_TURN · span / 2π)`, with
    /// both endpoints included when the count is at least two. A count
    /// of zero (including any non-positive span) yields an empty
    /// sequence; a count of one yields the start angle alone. The
    /// output is deterministic: identical inputs always reproduce the
    /// identical sequence.
    pub fn sample(&self, theta_start: f64, theta_end: f64) -> Vec<OrbitSample> {
        let span = theta_end - theta_start;
        let count = (SAMPLES_PER_TURN * span / TAU).floor() as usize;

        match count {
            0 => Vec::new(),
            1 => vec![self.sample_at(theta_start)],
            n => {
                let step = span / (n - 1) as f64;
                (0..n)
                    .map(|i| self.sample_at(theta_start + step * i as f64))
                    .collect()
            }
        }
    }

    /// Evaluate a single trajectory point
    pub fn sample_at(&self, theta: f64) -> OrbitSample {
        let radius = self.radius_at(theta);
        let p = PolarPoint::new(radius, theta).to_cartesian();
        OrbitSample {
            theta,
            radius,
            x: p.x,
            y: p.y,
        }
    }
}
