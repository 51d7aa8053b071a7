use crate::domain::chart::{HrPoint, LightCurveDataset, LightCurveSeries, StarVisual};
use crate::domain::classification::SpectralType;
use crate::domain::classification::bands::TemperatureClassBand;
use crate::domain::logging::LogComponent;
use crate::domain::star::{LightCurve, StarParameters};
use crate::log_warn;

/// Domain service turning run data into chart-ready structures.
///
/// Everything here is a pure mapping. Fetching, classification and
/// state publication stay with their own layers.
#[derive(Clone)]
pub struct PresentationDataService;

impl PresentationDataService {
    pub fn new() -> Self {
        Self
    }

    /// Shape a simulated light curve into `{ labels, datasets }`.
    ///
    /// Samples keep their original order. A curve whose time and
    /// luminosity arrays disagree in length carries no trustworthy
    /// pairing, so it collapses to an empty series and the view falls
    /// back to its placeholder. Never an error.
    pub fn light_curve_series(&self, curve: &LightCurve) -> LightCurveSeries {
        if !curve.is_well_formed() {
            if !curve.is_empty() {
                log_warn!(
                    LogComponent::Domain("Chart"),
                    "⚠️ Light curve arrays disagree ({} times vs {} luminosities), dropping curve",
                    curve.time.len(),
                    curve.luminosity.len()
                );
            }
            return LightCurveSeries::empty();
        }

        LightCurveSeries::new(
            curve.time.clone(),
            vec![LightCurveDataset::luminosity(curve.luminosity.clone())],
        )
    }

    /// HR-diagram point for a run.
    ///
    /// The point mirrors the submitted configuration, not the simulated
    /// output, so reruns of the same star land on the same spot.
    pub fn hr_point(&self, parameters: &StarParameters) -> HrPoint {
        HrPoint::new(
            parameters.temperature.value(),
            parameters.luminosity.value(),
        )
    }

    /// Render descriptor for the star sphere: size from mass, tint from
    /// the spectral class.
    pub fn star_visual(
        &self,
        parameters: &StarParameters,
        spectral_type: SpectralType,
    ) -> StarVisual {
        StarVisual::new(
            Self::scale_for_mass(parameters.mass.value()),
            spectral_type.color_hex(),
        )
    }

    fn scale_for_mass(mass: f64) -> f64 {
        if mass >= 16.0 {
            5.0
        } else if mass >= 2.1 {
            4.0
        } else if mass >= 1.4 {
            3.0
        } else if mass >= 1.04 {
            2.0
        } else if mass >= 0.8 {
            1.5
        } else if mass >= 0.45 {
            1.2
        } else {
            1.0
        }
    }
}

impl Default for PresentationDataService {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper bound of the HR temperature axis in kelvin.
pub const HR_TEMPERATURE_MAX: f64 = 60_000.0;
/// Bounds of the logarithmic HR luminosity axis in solar units.
pub const HR_LUMINOSITY_MIN: f64 = 0.0001;
pub const HR_LUMINOSITY_MAX: f64 = 100_000.0;

/// Domain service mapping chart values onto a fixed-size plot area.
///
/// The HR temperature axis runs reversed (hot stars on the left) and
/// the luminosity axis is logarithmic across nine decades. Light curve
/// samples spread evenly over the width like a category axis.
#[derive(Clone, Copy)]
pub struct ChartGeometryService {
    width: f64,
    height: f64,
}

impl ChartGeometryService {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// X coordinate for a temperature on the reversed HR axis.
    pub fn hr_x(&self, temperature: f64) -> f64 {
        let clamped = temperature.clamp(0.0, HR_TEMPERATURE_MAX);
        (HR_TEMPERATURE_MAX - clamped) / HR_TEMPERATURE_MAX * self.width
    }

    /// Y coordinate for a luminosity on the logarithmic HR axis.
    /// Values outside the plotted decades clamp to the nearest edge.
    pub fn hr_y(&self, luminosity: f64) -> f64 {
        let clamped = luminosity.clamp(HR_LUMINOSITY_MIN, HR_LUMINOSITY_MAX);
        let span = HR_LUMINOSITY_MAX.log10() - HR_LUMINOSITY_MIN.log10();
        let normalized = (clamped.log10() - HR_LUMINOSITY_MIN.log10()) / span;
        (1.0 - normalized) * self.height
    }

    /// Left edge and width of one translucent spectral-class band.
    pub fn hr_band_rect(&self, band: &TemperatureClassBand) -> (f64, f64) {
        let left =
            (HR_TEMPERATURE_MAX - band.max_temperature) / HR_TEMPERATURE_MAX * self.width;
        let width =
            (band.max_temperature - band.min_temperature) / HR_TEMPERATURE_MAX * self.width;
        (left, width)
    }

    /// SVG `points` string for the light curve line.
    ///
    /// The magnitude axis renders reversed, so brighter samples sit
    /// lower in the plot. An empty series yields an empty string.
    pub fn light_curve_polyline(&self, series: &LightCurveSeries) -> String {
        let Some(dataset) = series.datasets.first() else {
            return String::new();
        };
        if dataset.data.is_empty() {
            return String::new();
        }

        let min = dataset.data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = dataset
            .data
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        let last_index = dataset.data.len().saturating_sub(1);

        dataset
            .data
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let x = if last_index == 0 {
                    self.width / 2.0
                } else {
                    i as f64 / last_index as f64 * self.width
                };
                let y = if range == 0.0 {
                    self.height / 2.0
                } else {
                    (value - min) / range * self.height
                };
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
