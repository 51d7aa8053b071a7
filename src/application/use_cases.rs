use crate::domain::chart::services::PresentationDataService;
use crate::domain::chart::{HrPoint, LightCurveSeries, StarVisual};
use crate::domain::classification::ClassificationResult;
use crate::domain::classification::services::StarClassificationService;
use crate::domain::errors::RunResult;
use crate::domain::logging::LogComponent;
use crate::domain::star::gateway::SimulationGateway;
use crate::domain::star::{EvolutionaryState, StarParameters};
use crate::log_info;

/// Everything one successful run publishes, assembled in full before any
/// signal is touched.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationUpdate {
    pub evolutionary_state: EvolutionaryState,
    pub classification: ClassificationResult,
    pub light_curve_series: LightCurveSeries,
    pub hr_point: HrPoint,
    pub star_visual: StarVisual,
}

/// Use Case: run one simulation against the gateway and derive every
/// structure the views consume.
#[derive(Clone)]
pub struct RunSimulationUseCase<G: SimulationGateway> {
    gateway: G,
    classification_service: StarClassificationService,
    presentation_service: PresentationDataService,
}

impl<G: SimulationGateway> RunSimulationUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            classification_service: StarClassificationService::new(),
            presentation_service: PresentationDataService::new(),
        }
    }

    /// Validate the parameters, call the simulation service once, then
    /// classify and transform. The gateway is never invoked on invalid
    /// input, and a gateway failure produces no partial update.
    pub async fn execute(&self, parameters: StarParameters) -> RunResult<SimulationUpdate> {
        parameters.validate()?;

        log_info!(
            LogComponent::Application("RunSimulation"),
            "🚀 Running simulation: mass={} M☉, temperature={} K, luminosity={} L☉, radius={} R☉",
            parameters.mass.value(),
            parameters.temperature.value(),
            parameters.luminosity.value(),
            parameters.radius.value()
        );

        let result = self.gateway.simulate(&parameters).await?;

        let classification = self.classification_service.classify(&parameters);
        let light_curve_series = self
            .presentation_service
            .light_curve_series(&result.light_curve);
        let hr_point = self.presentation_service.hr_point(&parameters);
        let star_visual = self
            .presentation_service
            .star_visual(&parameters, classification.spectral_type);

        Ok(SimulationUpdate {
            evolutionary_state: result.state,
            classification,
            light_curve_series,
            hr_point,
            star_visual,
        })
    }
}
