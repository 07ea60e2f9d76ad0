//! Relativistic test-body orbit around a dominant central mass (M >> m)
//!
//! The trajectory in the orbital plane follows the conic-like form
//! r(θ) = r0 / (1 + ecc·cos(η·θ)), where η < 1 produces apsidal
//! precession and the familiar rosette shape.

use crate::summary::OrbitSummary;
use rosette_core::constants::{C, G};
use std::f64::consts::TAU;
use thiserror::Error;

/// Errors surfaced when the input constants leave the model's domain
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error("angular momentum l = {l} has magnitude below unity; the precession factor is not real")]
    AngularMomentumBelowUnity { l: f64 },

    #[error("energy e = -1 makes the eccentricity denominator vanish")]
    ZeroEnergyDenominator,

    #[error("eccentricity radicand {radicand} is negative for e = {e}, l = {l}")]
    NegativeEccentricityRadicand { e: f64, l: f64, radicand: f64 },
}

/// Orbit of a relativistic test body, derived once from its two
/// constants of motion
///
/// All fields are dimensionless. The derived scalars are computed in the
/// constructor and never change afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitModel {
    /// Specific energy parameter
    e: f64,
    /// Specific angular momentum parameter
    l: f64,
    /// Precession factor sqrt(l² − 1)/l
    eta: f64,
    /// Orbital eccentricity
    ecc: f64,
    /// Radius scale (l² − 1)/(e + 1)
    r0: f64,
}

impl OrbitModel {
    /// Build a model from dimensionless constants of motion.
    ///
    /// Fails fast on domain errors instead of letting NaN propagate:
    /// `l² < 1`, `e = -1`, and a negative eccentricity radicand each
    /// return a descriptive [`OrbitError`]. The boundary `l² = 1` is
    /// valid and yields `eta = 0` (no precession, constant radius).
    pub fn new(e: f64, l: f64) -> Result<Self, OrbitError> {
        if l * l < 1.0 {
            return Err(OrbitError::AngularMomentumBelowUnity { l });
        }
        if e + 1.0 == 0.0 {
            return Err(OrbitError::ZeroEnergyDenominator);
        }

        let eta = (l * l - 1.0).sqrt() / l;

        let radicand = ((e * l).powi(2) + 1.0 + 2.0 * e * l * l) / (e + 1.0).powi(2);
        if radicand < 0.0 {
            return Err(OrbitError::NegativeEccentricityRadicand { e, l, radicand });
        }
        let ecc = radicand.sqrt();

        let r0 = (l * l - 1.0) / (e + 1.0);

        Ok(Self { e, l, eta, ecc, r0 })
    }

    /// Build a model from SI inputs: `e` in J/kg and `l` in m²/s,
    /// rescaled once to dimensionless form via c² and G·mass/c.
    pub fn from_physical(e: f64, l: f64, mass_kg: f64) -> Result<Self, OrbitError> {
        Self::new(e / (C * C), l / (G * mass_kg / C))
    }

    pub fn energy(&self) -> f64 {
        self.e
    }

    pub fn angular_momentum(&self) -> f64 {
        self.l
    }

    /// Precession factor η; η < 1 means the orbit does not close
    pub fn eta(&self) -> f64 {
        self.eta
    }

    pub fn eccentricity(&self) -> f64 {
        self.ecc
    }

    /// Characteristic radius scale of the orbit
    pub fn r0(&self) -> f64 {
        self.r0
    }

    /// Radius at the given angle: r0 / (1 + ecc·cos(η·θ)).
    ///
    /// Not special-cased at the singular direction
    /// `1 + ecc·cos(η·θ) = 0`; the division yields ±infinity there and
    /// callers must tolerate it (unbound trajectories with ecc ≥ 1).
    pub fn radius_at(&self, theta: f64) -> f64 {
        self.r0 / (1.0 + self.ecc * (self.eta * theta).cos())
    }

    /// Smallest apsidal radius, reached where cos(η·θ) = 1
    pub fn periapsis(&self) -> f64 {
        self.r0 / (1.0 + self.ecc)
    }

    /// Largest apsidal radius; infinite for ecc ≥ 1 (unbound trajectory)
    pub fn apoapsis(&self) -> f64 {
        self.r0 / (1.0 - self.ecc)
    }

    /// Angle the apsides advance per radial period: 2π/η − 2π.
    /// Infinite when η = 0 (degenerate circular case).
    pub fn apsidal_advance(&self) -> f64 {
        TAU / self.eta - TAU
    }

    /// Snapshot of the input and derived scalars for display
    pub fn summary(&self) -> OrbitSummary {
        OrbitSummary {
            e: self.e,
            l: self.l,
            ecc: self.ecc,
            eta: self.eta,
            r0: self.r0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosette_core::constants::M_SUN;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_reference_orbit_parameters() {
        // e = -1.9, l = 2.1, evaluated analytically from the closed forms
        let m = OrbitModel::new(-1.9, 2.1).unwrap();

        let l2 = 2.1f64 * 2.1;
        let expected_eta = (l2 - 1.0).sqrt() / 2.1;
        let expected_ecc = (((-1.9f64 * 2.1).powi(2) + 1.0 + 2.0 * -1.9 * l2)
            / (-1.9f64 + 1.0).powi(2))
        .sqrt();
        let expected_r0 = (l2 - 1.0) / (-1.9 + 1.0);

        assert!((m.eta() - expected_eta).abs() < TOL);
        assert!((m.eccentricity() - expected_ecc).abs() < TOL);
        assert!((m.r0() - expected_r0).abs() < TOL);

        // Four-significant-digit values of those expressions
        assert!((m.eta() - 0.8793).abs() < 5e-5);
        assert!((m.eccentricity() - 0.4474).abs() < 5e-5);
        assert!((m.r0() - -3.789).abs() < 5e-4);
    }

    #[test]
    fn test_radius_at_zero_is_periapsis() {
        let m = OrbitModel::new(-1.9, 2.1).unwrap();
        assert_eq!(m.radius_at(0.0), m.r0() / (1.0 + m.eccentricity()));
        assert_eq!(m.radius_at(0.0), m.periapsis());
    }

    #[test]
    fn test_eta_in_unit_interval_for_valid_inputs() {
        for l in [1.05, 1.5, 2.1, 3.0, 10.0] {
            for e in [-1.9, -2.5, -5.0] {
                let Ok(m) = OrbitModel::new(e, l) else {
                    continue;
                };
                assert!(m.eta() > 0.0 && m.eta() < 1.0, "eta out of (0,1) for l={l}");
                assert!(m.eccentricity() >= 0.0);
            }
        }
    }

    #[test]
    fn test_unit_angular_momentum_gives_no_precession() {
        // l² = 1 exactly: degenerate boundary, eta = 0 and constant radius
        let m = OrbitModel::new(-0.5, 1.0).unwrap();
        assert_eq!(m.eta(), 0.0);
        assert_eq!(m.radius_at(0.0), m.radius_at(17.3));
    }

    #[test]
    fn test_physical_units_are_a_pure_rescale() {
        use rosette_core::constants::{C, G};

        let (e, l) = (-1.9, 2.1);
        let direct = OrbitModel::new(e, l).unwrap();
        let physical =
            OrbitModel::from_physical(e * C * C, l * (G * M_SUN / C), M_SUN).unwrap();

        assert!((direct.eta() - physical.eta()).abs() < TOL);
        assert!((direct.eccentricity() - physical.eccentricity()).abs() < TOL);
        assert!((direct.r0() - physical.r0()).abs() < TOL);
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(
            OrbitModel::new(-1.9, 0.5),
            Err(OrbitError::AngularMomentumBelowUnity { l: 0.5 })
        );
        assert_eq!(OrbitModel::new(-1.0, 2.1), Err(OrbitError::ZeroEnergyDenominator));
        assert!(matches!(
            OrbitModel::new(-0.19, 2.1),
            Err(OrbitError::NegativeEccentricityRadicand { .. })
        ));
    }

    #[test]
    fn test_apsidal_advance_reference() {
        let m = OrbitModel::new(-1.9, 2.1).unwrap();
        let expected = TAU / m.eta() - TAU;
        assert!((m.apsidal_advance() - expected).abs() < TOL);
        assert!(m.apsidal_advance() > 0.0);
    }
}
