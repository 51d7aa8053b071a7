use derive_more::Constructor;
use serde::Serialize;

/// Value Object - Light curve series shaped for a line chart.
///
/// `labels` carries the time axis in days, `datasets` the plotted lines.
/// Field names serialize in the `{ labels, datasets }` layout chart
/// renderers on the JS side expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightCurveSeries {
    pub labels: Vec<f64>,
    pub datasets: Vec<LightCurveDataset>,
}

impl LightCurveSeries {
    pub fn new(labels: Vec<f64>, datasets: Vec<LightCurveDataset>) -> Self {
        Self { labels, datasets }
    }

    /// Series with no labels and no datasets, rendered as a placeholder.
    pub fn empty() -> Self {
        Self { labels: Vec::new(), datasets: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn sample_count(&self) -> usize {
        self.labels.len()
    }
}

impl Default for LightCurveSeries {
    fn default() -> Self {
        Self::empty()
    }
}

/// Value Object - one plotted line of a light curve chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightCurveDataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub border_color: &'static str,
    pub border_width: u32,
}

impl LightCurveDataset {
    /// The single luminosity line drawn in orange.
    pub fn luminosity(data: Vec<f64>) -> Self {
        Self { label: "Luminosity", data, border_color: "orange", border_width: 2 }
    }
}

/// Value Object - one Hertzsprung-Russell diagram position.
///
/// `x` is the effective temperature in kelvin, `y` the luminosity in
/// solar units. Axis reversal and the logarithmic scale belong to the
/// view, not to the point itself.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize)]
pub struct HrPoint {
    pub x: f64,
    pub y: f64,
}

/// Value Object - render descriptor for the star sphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarVisual {
    pub scale: f64,
    pub color: &'static str,
}

impl StarVisual {
    pub fn new(scale: f64, color: &'static str) -> Self {
        Self { scale, color }
    }
}
