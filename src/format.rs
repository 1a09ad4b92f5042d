//! Human-readable figures with scale suffixes.

/// Picks the first scale whose threshold `value` reaches, two decimals.
fn scaled(value: f64, scales: &[(f64, &str)], unit: &str) -> String {
    for &(threshold, suffix) in scales {
        if value >= threshold {
            return format!("{:.2} {suffix}", value / threshold);
        }
    }
    if unit.is_empty() {
        format!("{value:.2}")
    } else {
        format!("{value:.2} {unit}")
    }
}

#[must_use]
pub fn format_number(value: f64) -> String {
    scaled(value, &[(1e9, "Md"), (1e6, "M"), (1e3, "K")], "")
}

#[must_use]
pub fn format_volume(value: f64) -> String {
    scaled(value, &[(1e6, "Mm³"), (1e3, "Km³")], "m³")
}

#[must_use]
pub fn format_surface(value: f64) -> String {
    scaled(value, &[(1e6, "km²"), (1e4, "ha")], "m²")
}

#[must_use]
pub fn format_weight(value: f64) -> String {
    scaled(value, &[(1e6, "kt"), (1e3, "t")], "kg")
}

#[must_use]
pub fn format_currency(value: f64) -> String {
    scaled(value, &[(1e9, "Md €"), (1e6, "M €"), (1e3, "K €")], "€")
}

#[must_use]
pub fn format_energy(value: f64) -> String {
    scaled(value, &[(1e6, "GWh"), (1e3, "MWh")], "kWh")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers() {
        assert_eq!(format_number(12.0), "12.00");
        assert_eq!(format_number(1500.0), "1.50 K");
        assert_eq!(format_number(2_500_000.0), "2.50 M");
        assert_eq!(format_number(3e9), "3.00 Md");
    }

    #[test]
    fn units() {
        assert_eq!(format_volume(30.0), "30.00 m³");
        assert_eq!(format_volume(4200.0), "4.20 Km³");
        assert_eq!(format_weight(72_000.0), "72.00 t");
        assert_eq!(format_weight(2e6), "2.00 kt");
        assert_eq!(format_currency(999.5), "999.50 €");
        assert_eq!(format_currency(1.25e6), "1.25 M €");
        assert_eq!(format_energy(135.0), "135.00 kWh");
        assert_eq!(format_energy(5e6), "5.00 GWh");
    }

    #[test]
    fn large_surfaces_use_square_kilometres() {
        assert_eq!(format_surface(27.0), "27.00 m²");
        assert_eq!(format_surface(25_000.0), "2.50 ha");
        assert_eq!(format_surface(3e6), "3.00 km²");
    }
}
