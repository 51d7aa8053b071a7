use crate::application::coordinator::RunPhase;
use crate::application::use_cases::SimulationUpdate;
use crate::domain::chart::services::PresentationDataService;
use crate::domain::chart::{HrPoint, LightCurveSeries, StarVisual};
use crate::domain::classification::ClassificationResult;
use crate::domain::classification::services::StarClassificationService;
use crate::domain::star::{EvolutionaryState, StarParameters};
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub mass_input: RwSignal<String>,
    pub temperature_input: RwSignal<String>,
    pub luminosity_input: RwSignal<String>,
    pub radius_input: RwSignal<String>,
    pub run_phase: RwSignal<RunPhase>,
    pub run_count: RwSignal<u32>,
    pub evolutionary_state: RwSignal<EvolutionaryState>,
    pub classification: RwSignal<Option<ClassificationResult>>,
    pub light_curve: RwSignal<LightCurveSeries>,
    pub hr_points: RwSignal<Vec<HrPoint>>,
    pub star_visual: RwSignal<StarVisual>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        mass_input: create_rw_signal("1.0".to_string()),
        temperature_input: create_rw_signal("5000".to_string()),
        luminosity_input: create_rw_signal("1.0".to_string()),
        radius_input: create_rw_signal("1.0".to_string()),
        run_phase: create_rw_signal(RunPhase::Idle),
        run_count: create_rw_signal(0),
        evolutionary_state: create_rw_signal(EvolutionaryState::default()),
        classification: create_rw_signal(None),
        light_curve: create_rw_signal(LightCurveSeries::empty()),
        hr_points: create_rw_signal(Vec::new()),
        star_visual: create_rw_signal(initial_star_visual()),
    })
}

/// Sphere shown before the first run, derived from the default parameters.
fn initial_star_visual() -> StarVisual {
    let parameters = StarParameters::default();
    let spectral = StarClassificationService::new().spectral_type(parameters.temperature);
    PresentationDataService::new().star_visual(&parameters, spectral)
}

/// Flip the run phase alone, leaving every derived signal untouched.
pub fn publish_run_phase(phase: RunPhase) {
    globals().run_phase.set(phase);
}

/// Empty the published HR history view.
pub fn clear_hr_points() {
    globals().hr_points.set(Vec::new());
}

/// Publish one completed run into every derived signal in a single
/// synchronous pass. Views observe either the previous run or this one,
/// never a mixture. The failure path goes through `run_phase` alone.
pub fn apply_update(update: &SimulationUpdate, hr_history: Vec<HrPoint>, run_count: u32) {
    let globals = globals();
    globals
        .evolutionary_state
        .set(update.evolutionary_state.clone());
    globals.classification.set(Some(update.classification));
    globals.light_curve.set(update.light_curve_series.clone());
    globals.star_visual.set(update.star_visual);
    globals.hr_points.set(hr_history);
    globals.run_count.set(run_count);
    globals.run_phase.set(RunPhase::Complete);
}

crate::global_signals! {
    pub mass_input_signal => mass_input: String,
    pub temperature_input_signal => temperature_input: String,
    pub luminosity_input_signal => luminosity_input: String,
    pub radius_input_signal => radius_input: String,
    pub run_phase_signal => run_phase: RunPhase,
    pub run_count_signal => run_count: u32,
    pub evolutionary_state_signal => evolutionary_state: EvolutionaryState,
    pub classification_signal => classification: Option<ClassificationResult>,
    pub light_curve_signal => light_curve: LightCurveSeries,
    pub hr_points_signal => hr_points: Vec<HrPoint>,
    pub star_visual_signal => star_visual: StarVisual,
}
