use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter};

/// Value Object - spectral class derived from surface temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumIter, Serialize, Deserialize)]
pub enum SpectralType {
    #[strum(serialize = "O-type (Blue)")]
    #[serde(rename = "O-type (Blue)")]
    O,

    #[strum(serialize = "B-type (Bluish White)")]
    #[serde(rename = "B-type (Bluish White)")]
    B,

    #[strum(serialize = "A-type (White)")]
    #[serde(rename = "A-type (White)")]
    A,

    #[strum(serialize = "F-type (Yellowish White)")]
    #[serde(rename = "F-type (Yellowish White)")]
    F,

    #[strum(serialize = "G-type (Yellow)")]
    #[serde(rename = "G-type (Yellow)")]
    G,

    #[strum(serialize = "K-type (Light Orange)")]
    #[serde(rename = "K-type (Light Orange)")]
    K,

    #[strum(serialize = "M-type (Red)")]
    #[serde(rename = "M-type (Red)")]
    M,
}

impl SpectralType {
    /// Single-letter designation used in the reference table
    pub fn letter(&self) -> &'static str {
        match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        }
    }

    /// Representative surface color, shared with the star render tint
    pub fn color_hex(&self) -> &'static str {
        match self {
            SpectralType::O => "#0000FF",
            SpectralType::B => "#5F9EA0",
            SpectralType::A => "#FFFFFF",
            SpectralType::F => "#FFFF00",
            SpectralType::G => "#FFD700",
            SpectralType::K => "#FFA500",
            SpectralType::M => "#FF4500",
        }
    }
}

/// Value Object - color-name label from the offset temperature table.
/// Thresholds deliberately differ from the spectral bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumIter, Serialize, Deserialize)]
pub enum Chromaticity {
    #[strum(serialize = "Blue")]
    Blue,

    #[strum(serialize = "Bluish White")]
    #[serde(rename = "Bluish White")]
    BluishWhite,

    #[strum(serialize = "White")]
    White,

    #[strum(serialize = "Yellowish White")]
    #[serde(rename = "Yellowish White")]
    YellowishWhite,

    #[strum(serialize = "Yellow")]
    Yellow,

    #[strum(serialize = "Orange-Yellow")]
    #[serde(rename = "Orange-Yellow")]
    OrangeYellow,

    #[strum(serialize = "Red")]
    Red,
}

/// Value Object - evolutionary phase by mass, ordinal from lightest to heaviest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, StrumDisplay, EnumIter, Serialize, Deserialize)]
pub enum LifecycleStage {
    #[strum(serialize = "Proto-Star")]
    #[serde(rename = "Proto-Star")]
    ProtoStar,

    #[strum(serialize = "Main Sequence Star")]
    #[serde(rename = "Main Sequence Star")]
    MainSequence,

    #[strum(serialize = "Red Giant or Supergiant")]
    #[serde(rename = "Red Giant or Supergiant")]
    RedGiantOrSupergiant,

    #[strum(serialize = "Final Stage (Neutron Star or Black Hole)")]
    #[serde(rename = "Final Stage (Neutron Star or Black Hole)")]
    FinalStage,

    // Catch-all for inputs no band matches (NaN)
    #[strum(serialize = "Unknown Stage")]
    #[serde(rename = "Unknown Stage")]
    Unknown,
}

/// Value Object - luminosity class, six ordered bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, StrumDisplay, EnumIter, Serialize, Deserialize)]
pub enum LuminosityClass {
    #[strum(serialize = "White Dwarf")]
    #[serde(rename = "White Dwarf")]
    WhiteDwarf,

    #[strum(serialize = "Sub-Dwarf")]
    #[serde(rename = "Sub-Dwarf")]
    SubDwarf,

    #[strum(serialize = "Main Sequence Star")]
    #[serde(rename = "Main Sequence Star")]
    MainSequence,

    #[strum(serialize = "Giant Star")]
    #[serde(rename = "Giant Star")]
    Giant,

    #[strum(serialize = "Supergiant Star")]
    #[serde(rename = "Supergiant Star")]
    Supergiant,

    #[strum(serialize = "Hypergiant Star")]
    #[serde(rename = "Hypergiant Star")]
    Hypergiant,
}

/// Value Object - hydrogen absorption line strength by temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumIter, Serialize, Deserialize)]
pub enum HydrogenLineStrength {
    #[strum(serialize = "Strong")]
    Strong,

    #[strum(serialize = "Medium")]
    Medium,

    #[strum(serialize = "Weak")]
    Weak,
}

/// Value Object - all five taxonomies evaluated for one parameter snapshot.
/// Fields are always set together; there is no partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub lifecycle_stage: LifecycleStage,
    #[serde(rename = "luminosityClassification")]
    pub luminosity_class: LuminosityClass,
    pub spectral_type: SpectralType,
    pub chromaticity: Chromaticity,
    pub hydrogen_lines: HydrogenLineStrength,
}
