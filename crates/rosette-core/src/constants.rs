/// Speed of light in m/s
pub const C: f64 = 299_792_458.0;

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.674_30e-11;

/// Solar mass in kg (GM☉ = 1.32712440018e20 m³/s² divided by G)
pub const M_SUN: f64 = 1.988_41e30;
