use super::MaterialProfile;
use serde::Serialize;

/// Label used when an element carries no material field.
pub const UNKNOWN_MATERIAL: &str = "Unknown";

/// Per-material share of the impact report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialBreakdown {
    pub material: String,
    pub surface: f64,
    pub volume: f64,
    /// Approximate mass in kg, `volume × density`. Filled in once the
    /// breakdown is complete.
    pub mass: f64,
    pub count: usize,
    pub profile: MaterialProfile,
}

impl MaterialBreakdown {
    #[must_use]
    pub fn new(material: String, profile: MaterialProfile) -> Self {
        Self {
            material,
            surface: 0.0,
            volume: 0.0,
            mass: 0.0,
            count: 0,
            profile,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Certification {
    EligibleHqeBreeam,
    Standard,
}

impl std::fmt::Display for Certification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EligibleHqeBreeam => f.write_str("Eligible HQE/BREEAM"),
            Self::Standard => f.write_str("Standard"),
        }
    }
}

/// Environmental and economic impact of one analysed model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsResult {
    pub elements_analyzed: usize,
    /// m²
    pub surface_total: f64,
    /// m³
    pub volume_total: f64,
    /// kg
    pub mass_total: f64,
    /// kg CO2
    pub carbon_footprint: f64,
    /// kWh
    pub energy_consumption: f64,
    /// kWh
    pub thermal_eval: f64,
    /// €
    pub cost_estimate: f64,
    /// € per year
    pub maintenance_cost: f64,
    pub recyclability_percent: f64,
    pub global_balance: f64,
    /// `global_balance` on a 0–100 scale, saturating at 1000.
    pub balance_gauge: f64,
    /// €
    pub potential_savings: f64,
    /// kg CO2 per year
    pub annual_co2_emissions: f64,
    /// litres
    pub water_consumption: f64,
    pub estimated_lifetime_years: u32,
    pub biodiversity_impact: f64,
    pub certification: Certification,
    /// In order of first occurrence.
    pub material_breakdown: Vec<MaterialBreakdown>,
}
