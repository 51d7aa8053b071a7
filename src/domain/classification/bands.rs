use crate::domain::classification::value_objects::SpectralType;

/// Static HR-diagram overlay zone, one per spectral class; never mutated.
/// Bounds are kelvin, hottest band first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureClassBand {
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub color: &'static str,
    pub label: &'static str,
}

pub const TEMPERATURE_CLASS_BANDS: [TemperatureClassBand; 7] = [
    TemperatureClassBand { min_temperature: 33_000.0, max_temperature: 60_000.0, color: "#0000FF", label: "O-type" },
    TemperatureClassBand { min_temperature: 10_000.0, max_temperature: 33_000.0, color: "#5F9EA0", label: "B-type" },
    TemperatureClassBand { min_temperature: 7_300.0, max_temperature: 10_000.0, color: "#FFFFFF", label: "A-type" },
    TemperatureClassBand { min_temperature: 6_000.0, max_temperature: 7_300.0, color: "#FFFF00", label: "F-type" },
    TemperatureClassBand { min_temperature: 5_300.0, max_temperature: 6_000.0, color: "#FFD700", label: "G-type" },
    TemperatureClassBand { min_temperature: 3_900.0, max_temperature: 5_300.0, color: "#FFA500", label: "K-type" },
    TemperatureClassBand { min_temperature: 2_300.0, max_temperature: 3_900.0, color: "#FF4500", label: "M-type" },
];

/// Static reference-table row shown under the classification results.
/// Range texts are display strings, not parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassTableRow {
    pub spectral_type: SpectralType,
    pub effective_temperature: &'static str,
    pub chromaticity: &'static str,
    pub mass_range: &'static str,
    pub radius_range: &'static str,
    pub luminosity_range: &'static str,
    pub hydrogen_lines: &'static str,
    pub fraction_of_stars: &'static str,
}

pub const CLASS_TABLE_ROWS: [ClassTableRow; 7] = [
    ClassTableRow {
        spectral_type: SpectralType::O,
        effective_temperature: "≥ 33,000 K",
        chromaticity: "blue",
        mass_range: "≥ 16 M☉",
        radius_range: "≥ 6.6 R☉",
        luminosity_range: "≥ 30,000 L☉",
        hydrogen_lines: "Weak",
        fraction_of_stars: "0.00003%",
    },
    ClassTableRow {
        spectral_type: SpectralType::B,
        effective_temperature: "10,000–33,000 K",
        chromaticity: "bluish white",
        mass_range: "2.1–16 M☉",
        radius_range: "1.8–6.6 R☉",
        luminosity_range: "25–30,000 L☉",
        hydrogen_lines: "Medium",
        fraction_of_stars: "0.12%",
    },
    ClassTableRow {
        spectral_type: SpectralType::A,
        effective_temperature: "7,300–10,000 K",
        chromaticity: "white",
        mass_range: "1.4–2.1 M☉",
        radius_range: "1.4–1.8 R☉",
        luminosity_range: "5–25 L☉",
        hydrogen_lines: "Strong",
        fraction_of_stars: "0.61%",
    },
    ClassTableRow {
        spectral_type: SpectralType::F,
        effective_temperature: "6,000–7,300 K",
        chromaticity: "yellowish white",
        mass_range: "1.04–1.4 M☉",
        radius_range: "1.15–1.4 R☉",
        luminosity_range: "1.5–5 L☉",
        hydrogen_lines: "Medium",
        fraction_of_stars: "3.0%",
    },
    ClassTableRow {
        spectral_type: SpectralType::G,
        effective_temperature: "5,300–6,000 K",
        chromaticity: "yellow",
        mass_range: "0.8–1.04 M☉",
        radius_range: "0.96–1.15 R☉",
        luminosity_range: "0.6–1.5 L☉",
        hydrogen_lines: "Weak",
        fraction_of_stars: "7.6%",
    },
    ClassTableRow {
        spectral_type: SpectralType::K,
        effective_temperature: "3,900–5,300 K",
        chromaticity: "light orange",
        mass_range: "0.45–0.8 M☉",
        radius_range: "0.7–0.96 R☉",
        luminosity_range: "0.08–0.6 L☉",
        hydrogen_lines: "Very weak",
        fraction_of_stars: "12%",
    },
    ClassTableRow {
        spectral_type: SpectralType::M,
        effective_temperature: "2,300–3,900 K",
        chromaticity: "Light orangish red",
        mass_range: "0.08–0.45 M☉",
        radius_range: "≤ 0.7 R☉",
        luminosity_range: "≤ 0.08 L☉",
        hydrogen_lines: "Very weak",
        fraction_of_stars: "76%",
    },
];
