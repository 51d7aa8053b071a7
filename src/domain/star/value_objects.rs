use crate::domain::errors::ParameterError;
use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Value Object - stellar mass in solar masses
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct SolarMass(f64);

impl SolarMass {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - effective surface temperature in kelvin
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Kelvin(f64);

impl Kelvin {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - luminosity in solar luminosities
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct SolarLuminosity(f64);

impl SolarLuminosity {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - stellar radius in solar radii
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct SolarRadius(f64);

impl SolarRadius {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - immutable parameter snapshot for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct StarParameters {
    pub mass: SolarMass,
    pub temperature: Kelvin,
    pub luminosity: SolarLuminosity,
    pub radius: SolarRadius,
}

impl StarParameters {
    /// Reject non-finite and non-positive values before they reach the
    /// classifier or the simulation service. Reports the first offending field.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (field, value) in [
            ("mass", self.mass.value()),
            ("temperature", self.temperature.value()),
            ("luminosity", self.luminosity.value()),
            ("radius", self.radius.value()),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(ParameterError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}

impl Default for StarParameters {
    /// Sun-like starting configuration shown before the first run
    fn default() -> Self {
        Self::new(
            SolarMass::new(1.0),
            Kelvin::new(5000.0),
            SolarLuminosity::new(1.0),
            SolarRadius::new(1.0),
        )
    }
}

/// Value Object - evolutionary state label reported by the simulation service
#[derive(Debug, Clone, PartialEq, Eq, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct EvolutionaryState(String);

impl EvolutionaryState {
    pub fn new(label: String) -> Self {
        Self(label)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EvolutionaryState {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Default for EvolutionaryState {
    /// Label shown before the first simulation completes
    fn default() -> Self {
        Self::from("stable")
    }
}
