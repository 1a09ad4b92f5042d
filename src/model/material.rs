//! Static material physics used by the impact report.

use serde::Serialize;

/// Physical and economic coefficients of one material family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialProfile {
    /// kg/m³
    pub density: f64,
    /// kg CO2 per kg of material
    pub carbon_factor: f64,
    /// kWh per m²
    pub energy_factor: f64,
    /// € per m²
    pub cost_factor: f64,
}

impl MaterialProfile {
    const fn new(density: f64, carbon_factor: f64, energy_factor: f64, cost_factor: f64) -> Self {
        Self {
            density,
            carbon_factor,
            energy_factor,
            cost_factor,
        }
    }

    /// Profile for an arbitrary material name.
    ///
    /// The first table key contained in the name (case-insensitive) wins;
    /// unknown materials get [`DEFAULT_PROFILE`].
    #[must_use]
    pub fn lookup(material_name: &str) -> Self {
        let lower = material_name.to_lowercase();
        PROFILES
            .iter()
            .find(|(key, _)| lower.contains(&key.to_lowercase()))
            .map_or(DEFAULT_PROFILE, |(_, profile)| *profile)
    }
}

// Matched in order, so "Steel Concrete" resolves to Concrete.
const PROFILES: &[(&str, MaterialProfile)] = &[
    ("Concrete", MaterialProfile::new(2400.0, 0.2, 5.0, 150.0)),
    ("Steel", MaterialProfile::new(7850.0, 2.3, 8.0, 800.0)),
    ("Wood", MaterialProfile::new(600.0, 0.1, 2.0, 400.0)),
    ("Glass", MaterialProfile::new(2500.0, 0.8, 12.0, 200.0)),
    ("Aluminum", MaterialProfile::new(2700.0, 9.0, 15.0, 1500.0)),
    ("Brick", MaterialProfile::new(1800.0, 0.3, 3.0, 100.0)),
    ("Plaster", MaterialProfile::new(1200.0, 0.1, 1.0, 50.0)),
];

pub const DEFAULT_PROFILE: MaterialProfile = MaterialProfile::new(1000.0, 0.1, 5.0, 100.0);

const RECYCLABILITY: &[(&str, f64)] = &[
    ("Steel", 0.9),
    ("Aluminum", 0.95),
    ("Glass", 0.8),
    ("Wood", 0.3),
    ("Concrete", 0.1),
    ("Brick", 0.05),
    ("Plaster", 0.02),
];

/// Share of a material's mass that can be recycled, 0 for unknown materials.
#[must_use]
pub fn recyclability_rate(material_name: &str) -> f64 {
    let lower = material_name.to_lowercase();
    RECYCLABILITY
        .iter()
        .find(|(key, _)| lower.contains(&key.to_lowercase()))
        .map_or(0.0, |(_, rate)| *rate)
}
