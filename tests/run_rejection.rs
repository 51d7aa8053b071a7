use futures::executor::block_on;
use leptos::*;
use star_sim_wasm::application::coordinator::{self, RunPhase, with_global_coordinator};
use star_sim_wasm::domain::errors::{ParameterError, RunError};
use star_sim_wasm::domain::star::{Kelvin, SolarLuminosity, SolarMass, SolarRadius, StarParameters};
use star_sim_wasm::global_state::{
    classification_signal, hr_points_signal, light_curve_signal, run_count_signal,
    run_phase_signal,
};

// Single test on purpose: the published signals live on this thread's
// reactive runtime and must not be shared across test threads.
#[test]
fn rejected_parameters_leave_no_trace() {
    let parameters = StarParameters::new(
        SolarMass::from(1.0),
        Kelvin::from(f64::NAN),
        SolarLuminosity::from(1.0),
        SolarRadius::from(1.0),
    );

    let result = block_on(coordinator::execute_run(parameters));

    assert_eq!(
        result,
        Err(RunError::InvalidParameters(ParameterError::NonFinite {
            field: "temperature",
        }))
    );

    // validation fires before the coordinator is even created
    assert!(with_global_coordinator(|c| c.phase()).is_none());

    assert_eq!(run_phase_signal().get_untracked(), RunPhase::Idle);
    assert_eq!(run_count_signal().get_untracked(), 0);
    assert_eq!(classification_signal().get_untracked(), None);
    assert!(hr_points_signal().get_untracked().is_empty());
    assert!(light_curve_signal().get_untracked().is_empty());
}
