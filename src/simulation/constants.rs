//! Physical constants (SI units, CODATA 2018) and engine defaults

/// Elementary charge e (C)
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Proton rest mass (kg)
pub const PROTON_MASS: f64 = 1.672_621_923_69e-27;

/// Electron rest mass (kg)
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;

/// Coulomb's constant k = 1 / (4 pi eps0) (N m^2 / C^2)
pub const COULOMB_K: f64 = 8.987_551_792_3e9;

/// Separation substituted when two particles coincide exactly (m)
pub const DEFAULT_DISTANCE_FLOOR: f64 = 1.0e-9;

/// Samples per run, both endpoints included
pub const DEFAULT_NUM_STEPS: usize = 15;

/// Length of the simulated window (s)
pub const DEFAULT_T_END: f64 = 5.0;
