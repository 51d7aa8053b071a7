use js_sys::Promise;
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::coordinator;
use crate::domain::star::{Kelvin, SolarLuminosity, SolarMass, SolarRadius, StarParameters};
use crate::global_state::{
    classification_signal, hr_points_signal, luminosity_input_signal, mass_input_signal,
    radius_input_signal, run_count_signal, run_phase_signal, temperature_input_signal,
};

/// WASM API for driving simulation runs from JavaScript
/// Minimal logic here. Behavior belongs to the application layer.
#[wasm_bindgen]
pub struct StarSimApi;

#[wasm_bindgen]
impl StarSimApi {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self
    }

    /// Overwrite the four parameter fields shown in the form
    #[wasm_bindgen(js_name = setParameters)]
    pub fn set_parameters(&self, mass: f64, temperature: f64, luminosity: f64, radius: f64) {
        mass_input_signal().set(mass.to_string());
        temperature_input_signal().set(temperature.to_string());
        luminosity_input_signal().set(luminosity.to_string());
        radius_input_signal().set(radius.to_string());
    }

    /// Run one simulation and publish its results into the UI state
    #[wasm_bindgen(js_name = runSimulation)]
    pub fn run_simulation(
        &self,
        mass: f64,
        temperature: f64,
        luminosity: f64,
        radius: f64,
    ) -> Promise {
        future_to_promise(async move {
            let parameters = StarParameters::new(
                SolarMass::from(mass),
                Kelvin::from(temperature),
                SolarLuminosity::from(luminosity),
                SolarRadius::from(radius),
            );

            match coordinator::execute_run(parameters).await {
                Ok(()) => Ok(JsValue::from_str("run_complete")),
                Err(e) => Err(JsValue::from_str(&e.to_string())),
            }
        })
    }

    /// Latest classification as a JSON string, or "null" before the first run
    #[wasm_bindgen(js_name = classificationJson)]
    pub fn classification_json(&self) -> String {
        match classification_signal().get() {
            Some(result) => {
                serde_json::to_string(&result).unwrap_or_else(|_| "null".to_string())
            }
            None => "null".to_string(),
        }
    }

    /// Current run phase as a display string
    #[wasm_bindgen(js_name = runPhase)]
    pub fn run_phase(&self) -> String {
        run_phase_signal().get().to_string()
    }

    /// Drop every accumulated HR-diagram marker
    #[wasm_bindgen(js_name = clearHrHistory)]
    pub fn clear_hr_history(&self) {
        coordinator::clear_hr_history();
    }

    /// Run counters for dashboards and smoke tests
    #[wasm_bindgen(js_name = getRunStats)]
    pub fn get_run_stats(&self) -> String {
        format!(
            "{{\"runPhase\":\"{}\",\"completedRuns\":{},\"hrPointCount\":{}}}",
            run_phase_signal().get(),
            run_count_signal().get(),
            hr_points_signal().get().len()
        )
    }
}

impl Default for StarSimApi {
    fn default() -> Self {
        Self::new()
    }
}
