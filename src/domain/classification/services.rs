use crate::domain::classification::value_objects::{
    Chromaticity, ClassificationResult, HydrogenLineStrength, LifecycleStage, LuminosityClass,
    SpectralType,
};
use crate::domain::star::{Kelvin, SolarLuminosity, SolarMass, StarParameters};

/// Domain service - boundary-table classification.
///
/// Every table is evaluated top to bottom with first-match-wins semantics
/// and a catch-all final branch, so each function is total: any input,
/// including NaN, maps to some label. Input validation happens at the
/// parameter-ingestion boundary, never here.
#[derive(Clone)]
pub struct StarClassificationService;

impl StarClassificationService {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate all five taxonomies for one parameter snapshot.
    /// Deterministic and stateless; no field depends on another's result.
    pub fn classify(&self, parameters: &StarParameters) -> ClassificationResult {
        ClassificationResult {
            lifecycle_stage: self.lifecycle_stage(parameters.mass),
            luminosity_class: self.luminosity_class(parameters.luminosity),
            spectral_type: self.spectral_type(parameters.temperature),
            chromaticity: self.chromaticity(parameters.temperature),
            hydrogen_lines: self.hydrogen_lines(parameters.temperature),
        }
    }

    /// Spectral type by temperature, inclusive lower bounds
    pub fn spectral_type(&self, temperature: Kelvin) -> SpectralType {
        let t = temperature.value();
        if t >= 33_000.0 {
            SpectralType::O
        } else if t >= 10_000.0 {
            SpectralType::B
        } else if t >= 7_300.0 {
            SpectralType::A
        } else if t >= 6_000.0 {
            SpectralType::F
        } else if t >= 5_300.0 {
            SpectralType::G
        } else if t >= 3_900.0 {
            SpectralType::K
        } else {
            SpectralType::M
        }
    }

    /// Chromaticity by temperature, strictly-greater thresholds.
    /// A separate table from the spectral bands on purpose: 30000 vs 33000,
    /// 7500 vs 7300, 5200 vs 5300, 3700 vs 3900. Keep them independent.
    pub fn chromaticity(&self, temperature: Kelvin) -> Chromaticity {
        let t = temperature.value();
        if t > 30_000.0 {
            Chromaticity::Blue
        } else if t > 10_000.0 {
            Chromaticity::BluishWhite
        } else if t > 7_500.0 {
            Chromaticity::White
        } else if t > 6_000.0 {
            Chromaticity::YellowishWhite
        } else if t > 5_200.0 {
            Chromaticity::Yellow
        } else if t > 3_700.0 {
            Chromaticity::OrangeYellow
        } else {
            Chromaticity::Red
        }
    }

    /// Lifecycle stage by mass. NaN fails every band and lands in Unknown.
    pub fn lifecycle_stage(&self, mass: SolarMass) -> LifecycleStage {
        let m = mass.value();
        if m < 0.5 {
            return LifecycleStage::ProtoStar;
        }
        if m < 1.4 {
            return LifecycleStage::MainSequence;
        }
        if m >= 1.4 && m < 8.0 {
            return LifecycleStage::RedGiantOrSupergiant;
        }
        if m >= 8.0 {
            return LifecycleStage::FinalStage;
        }
        LifecycleStage::Unknown
    }

    /// Luminosity class, six ascending bands with a Hypergiant catch-all
    pub fn luminosity_class(&self, luminosity: SolarLuminosity) -> LuminosityClass {
        let l = luminosity.value();
        if l < 0.1 {
            LuminosityClass::WhiteDwarf
        } else if l < 1.0 {
            LuminosityClass::SubDwarf
        } else if l < 10.0 {
            LuminosityClass::MainSequence
        } else if l < 100.0 {
            LuminosityClass::Giant
        } else if l < 1000.0 {
            LuminosityClass::Supergiant
        } else {
            LuminosityClass::Hypergiant
        }
    }

    /// Hydrogen line strength, strict thresholds at 10000 and 5000 kelvin.
    /// Exactly 5000 is not greater than 5000 and therefore reads Weak.
    pub fn hydrogen_lines(&self, temperature: Kelvin) -> HydrogenLineStrength {
        let t = temperature.value();
        if t > 10_000.0 {
            HydrogenLineStrength::Strong
        } else if t > 5_000.0 {
            HydrogenLineStrength::Medium
        } else {
            HydrogenLineStrength::Weak
        }
    }
}

impl Default for StarClassificationService {
    fn default() -> Self {
        Self::new()
    }
}
