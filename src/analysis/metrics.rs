//! Environmental and economic impact of a classified model.

use super::classifier::find_any;
use crate::model::{
    recyclability_rate, Certification, ElementRecord, MaterialBreakdown, MaterialProfile,
    MetricsResult, Property, UNKNOWN_MATERIAL,
};
use std::collections::HashMap;

const SURFACE_FIELDS: &[&str] = &["Surface", "Area", "Aire"];
const LENGTH_FIELDS: &[&str] = &["Length", "Longueur"];
const WIDTH_FIELDS: &[&str] = &["Width", "Largeur"];
const VOLUME_FIELDS: &[&str] = &["Volume"];
const HEIGHT_FIELDS: &[&str] = &["Height", "Hauteur"];

const THERMAL_FACTOR: f64 = 0.8;
const ENERGY_BALANCE_WEIGHT: f64 = 0.5;
const MAINTENANCE_RATE: f64 = 0.15;
const RECYCLING_SAVINGS_RATE: f64 = 0.02;
const ANNUAL_EMISSIONS_RATE: f64 = 0.05;
const WATER_PER_M2: f64 = 2.5;
const BIODIVERSITY_PER_M2: f64 = 0.1;
const LIFETIME_YEARS: u32 = 50;
const CERTIFICATION_THRESHOLD: f64 = 70.0;
const BALANCE_GAUGE_SCALE: f64 = 1000.0;

/// Parses a displayed quantity such as `"12,5 m²"` or `"-3.2 m"`.
///
/// Everything except digits, `.` and `-` is dropped, the longest leading
/// float is parsed and its absolute value returned. Anything unparsable or
/// out of `f64` range counts as 0.
#[must_use]
pub fn parse_numeric(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let bytes = cleaned.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }
    cleaned[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map_or(0.0, f64::abs)
}

fn field_value(properties: &[Property], fields: &[&str]) -> Option<f64> {
    find_any(properties, fields).map(|p| parse_numeric(&p.display_value))
}

/// Surface (m²) and volume (m³) of one element.
///
/// Direct fields win; otherwise surface is length × width and volume is
/// surface × height.
#[must_use]
pub fn element_dimensions(properties: &[Property]) -> (f64, f64) {
    let surface = field_value(properties, SURFACE_FIELDS).unwrap_or_else(|| {
        match (
            field_value(properties, LENGTH_FIELDS),
            field_value(properties, WIDTH_FIELDS),
        ) {
            (Some(length), Some(width)) => length * width,
            _ => 0.0,
        }
    });

    let volume = field_value(properties, VOLUME_FIELDS).unwrap_or_else(|| {
        match field_value(properties, HEIGHT_FIELDS) {
            Some(height) if surface != 0.0 => surface * height,
            _ => 0.0,
        }
    });

    (surface, volume)
}

/// Running totals of one metrics computation.
#[derive(Debug, Default)]
pub struct MetricsAccumulator {
    elements: usize,
    surface: f64,
    volume: f64,
    carbon: f64,
    energy: f64,
    cost: f64,
    breakdown: Vec<MaterialBreakdown>,
    positions: HashMap<String, usize>,
}

impl MetricsAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &ElementRecord) {
        let material = record
            .material
            .clone()
            .unwrap_or_else(|| UNKNOWN_MATERIAL.to_string());
        let profile = MaterialProfile::lookup(&material);
        let (surface, volume) = element_dimensions(&record.properties);

        self.elements += 1;
        self.surface += surface;
        self.volume += volume;
        self.carbon += volume * profile.density * profile.carbon_factor;
        self.energy += surface * profile.energy_factor;
        self.cost += surface * profile.cost_factor;

        let position = match self.positions.get(&material) {
            Some(&position) => position,
            None => {
                self.positions.insert(material.clone(), self.breakdown.len());
                self.breakdown.push(MaterialBreakdown::new(material, profile));
                self.breakdown.len() - 1
            }
        };
        let entry = &mut self.breakdown[position];
        entry.surface += surface;
        entry.volume += volume;
        entry.count += 1;
    }

    #[must_use]
    pub fn finish(mut self) -> MetricsResult {
        for entry in &mut self.breakdown {
            entry.mass = entry.volume * entry.profile.density;
        }

        let thermal_eval = (self.surface / 100.0) * THERMAL_FACTOR;

        let mass_total: f64 = self.breakdown.iter().map(|entry| entry.mass).sum();
        let recyclable_mass: f64 = self
            .breakdown
            .iter()
            .map(|entry| entry.mass * recyclability_rate(&entry.material))
            .sum();
        let recyclability_percent = if mass_total.is_finite() && mass_total > 0.0 {
            (recyclable_mass / mass_total * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        let global_balance = self.carbon + self.energy * ENERGY_BALANCE_WEIGHT + thermal_eval;
        let certification = if recyclability_percent > CERTIFICATION_THRESHOLD {
            Certification::EligibleHqeBreeam
        } else {
            Certification::Standard
        };

        MetricsResult {
            elements_analyzed: self.elements,
            surface_total: self.surface,
            volume_total: self.volume,
            mass_total,
            carbon_footprint: self.carbon,
            energy_consumption: self.energy,
            thermal_eval,
            cost_estimate: self.cost,
            maintenance_cost: self.cost * MAINTENANCE_RATE,
            recyclability_percent,
            global_balance,
            balance_gauge: (global_balance / BALANCE_GAUGE_SCALE * 100.0).min(100.0),
            potential_savings: mass_total * RECYCLING_SAVINGS_RATE,
            annual_co2_emissions: self.carbon * ANNUAL_EMISSIONS_RATE,
            water_consumption: self.surface * WATER_PER_M2,
            estimated_lifetime_years: LIFETIME_YEARS,
            biodiversity_impact: self.surface * BIODIVERSITY_PER_M2,
            certification,
            material_breakdown: self.breakdown,
        }
    }
}

/// Impact report of already classified records.
#[must_use]
pub fn metrics_from_records(records: &[ElementRecord]) -> MetricsResult {
    let mut acc = MetricsAccumulator::new();
    for record in records {
        acc.add(record);
    }
    acc.finish()
}
