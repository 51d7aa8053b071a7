use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;
use star_sim_wasm::application::use_cases::RunSimulationUseCase;
use star_sim_wasm::domain::classification::{
    Chromaticity, HydrogenLineStrength, LifecycleStage, LuminosityClass, SpectralType,
};
use star_sim_wasm::domain::errors::{ParameterError, RunError};
use star_sim_wasm::domain::star::gateway::{GatewayError, GatewayResult, SimulationGateway};
use star_sim_wasm::domain::star::{
    EvolutionaryState, Kelvin, LightCurve, SimulationResult, SolarLuminosity, SolarMass,
    SolarRadius, StarParameters,
};

/// Scripted gateway standing in for the HTTP client.
#[derive(Clone)]
struct FakeGateway {
    calls: Rc<Cell<u32>>,
    response: GatewayResult<SimulationResult>,
}

impl FakeGateway {
    fn returning(response: GatewayResult<SimulationResult>) -> (Self, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        (Self { calls: Rc::clone(&calls), response }, calls)
    }
}

impl SimulationGateway for FakeGateway {
    async fn simulate(&self, _parameters: &StarParameters) -> GatewayResult<SimulationResult> {
        self.calls.set(self.calls.get() + 1);
        self.response.clone()
    }
}

fn parameters(mass: f64, temperature: f64, luminosity: f64, radius: f64) -> StarParameters {
    StarParameters::new(
        SolarMass::from(mass),
        Kelvin::from(temperature),
        SolarLuminosity::from(luminosity),
        SolarRadius::from(radius),
    )
}

#[test]
fn successful_run_assembles_the_full_update() {
    let (gateway, calls) = FakeGateway::returning(Ok(SimulationResult::new(
        EvolutionaryState::from("collapsing"),
        LightCurve::new(vec![0.0, 1.0, 2.0], vec![3.0, 2.0, 1.0]),
    )));
    let use_case = RunSimulationUseCase::new(gateway);

    let update = block_on(use_case.execute(parameters(2.0, 8_000.0, 30.0, 1.5)))
        .unwrap();

    assert_eq!(update.evolutionary_state.value(), "collapsing");

    assert_eq!(update.classification.lifecycle_stage, LifecycleStage::RedGiantOrSupergiant);
    assert_eq!(update.classification.luminosity_class, LuminosityClass::Giant);
    assert_eq!(update.classification.spectral_type, SpectralType::A);
    assert_eq!(update.classification.chromaticity, Chromaticity::White);
    assert_eq!(update.classification.hydrogen_lines, HydrogenLineStrength::Medium);

    assert_eq!(update.light_curve_series.labels, vec![0.0, 1.0, 2.0]);
    assert_eq!(update.light_curve_series.datasets[0].data, vec![3.0, 2.0, 1.0]);

    assert_eq!(update.hr_point.x, 8_000.0);
    assert_eq!(update.hr_point.y, 30.0);

    assert_eq!(update.star_visual.scale, 3.0);
    assert_eq!(update.star_visual.color, "#FFFFFF");

    assert_eq!(calls.get(), 1);
}

#[test]
fn gateway_failure_propagates_without_a_partial_update() {
    let (gateway, calls) = FakeGateway::returning(Err(GatewayError::HttpStatus(
        500,
        "Internal Server Error".to_string(),
    )));
    let use_case = RunSimulationUseCase::new(gateway);

    let result = block_on(use_case.execute(StarParameters::default()));

    assert_eq!(
        result,
        Err(RunError::Gateway(GatewayError::HttpStatus(
            500,
            "Internal Server Error".to_string(),
        )))
    );
    assert_eq!(calls.get(), 1);
}

#[test]
fn invalid_parameters_never_reach_the_gateway() {
    let (gateway, calls) = FakeGateway::returning(Ok(SimulationResult::new(
        EvolutionaryState::default(),
        LightCurve::empty(),
    )));
    let use_case = RunSimulationUseCase::new(gateway);

    let result = block_on(use_case.execute(parameters(f64::NAN, 5_000.0, 1.0, 1.0)));

    assert_eq!(
        result,
        Err(RunError::InvalidParameters(ParameterError::NonFinite { field: "mass" }))
    );
    assert_eq!(calls.get(), 0);
}

#[test]
fn mismatched_curve_still_classifies_and_plots() {
    let (gateway, _calls) = FakeGateway::returning(Ok(SimulationResult::new(
        EvolutionaryState::from("supernova"),
        LightCurve::new(vec![0.0, 1.0], vec![9.0]),
    )));
    let use_case = RunSimulationUseCase::new(gateway);

    let update = block_on(use_case.execute(parameters(9.0, 40_000.0, 50_000.0, 10.0)))
        .unwrap();

    assert!(update.light_curve_series.is_empty());
    assert_eq!(update.classification.lifecycle_stage, LifecycleStage::FinalStage);
    assert_eq!(update.classification.spectral_type, SpectralType::O);
    assert_eq!(update.hr_point.x, 40_000.0);
    assert_eq!(update.star_visual.color, "#0000FF");
}
