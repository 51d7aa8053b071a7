use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::star::gateway::{GatewayError, GatewayResult, SimulationGateway};
use crate::domain::star::{EvolutionaryState, LightCurve, SimulationResult, StarParameters};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

/// Wire form of the parameters POSTed to `/simulate`
#[derive(Debug, Serialize)]
struct SimulationRequestDto {
    mass: f64,
    temperature: f64,
    luminosity: f64,
    radius: f64,
}

impl From<&StarParameters> for SimulationRequestDto {
    fn from(parameters: &StarParameters) -> Self {
        Self {
            mass: parameters.mass.value(),
            temperature: parameters.temperature.value(),
            luminosity: parameters.luminosity.value(),
            radius: parameters.radius.value(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct LightCurveDto {
    #[serde(default)]
    time: Vec<f64>,
    #[serde(default)]
    luminosity: Vec<f64>,
}

/// Wire form of a simulation response. `state` is required; a response
/// without a light curve decodes as empty arrays.
#[derive(Debug, Deserialize)]
struct SimulationResponseDto {
    state: String,
    #[serde(default)]
    light_curve: LightCurveDto,
}

/// REST client for the supernova simulation service
#[derive(Clone)]
pub struct SimulationHttpClient {
    base_url: String,
}

impl SimulationHttpClient {
    pub fn new() -> Self {
        Self::with_base_url("http://127.0.0.1:5000")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn simulate_url(&self) -> String {
        format!("{}/simulate", self.base_url.trim_end_matches('/'))
    }
}

impl Default for SimulationHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationGateway for SimulationHttpClient {
    async fn simulate(&self, parameters: &StarParameters) -> GatewayResult<SimulationResult> {
        let url = self.simulate_url();
        get_logger().info(
            LogComponent::Infrastructure("SimulationAPI"),
            &format!("🌐 POST {url}"),
        );

        let response = Request::post(&url)
            .json(&SimulationRequestDto::from(parameters))
            .map_err(|e| GatewayError::RequestFailed(format!("Failed to encode request: {e:?}")))?
            .send()
            .await
            .map_err(|e| {
                GatewayError::RequestFailed(format!("Failed to reach simulation service: {e:?}"))
            })?;

        if !response.ok() {
            return Err(GatewayError::HttpStatus(
                response.status(),
                response.status_text(),
            ));
        }

        let dto: SimulationResponseDto = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedPayload(format!("{e:?}")))?;

        let result = SimulationResult::new(
            EvolutionaryState::new(dto.state),
            LightCurve::new(dto.light_curve.time, dto.light_curve.luminosity),
        );

        get_logger().info(
            LogComponent::Infrastructure("SimulationAPI"),
            &format!(
                "✅ Simulation reached state '{}' with {} samples",
                result.state.value(),
                result.light_curve.sample_count()
            ),
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_url_appends_endpoint() {
        let client = SimulationHttpClient::new();
        assert_eq!(client.simulate_url(), "http://127.0.0.1:5000/simulate");
    }

    #[test]
    fn simulate_url_tolerates_trailing_slash() {
        let client = SimulationHttpClient::with_base_url("http://localhost:5000/");
        assert_eq!(client.simulate_url(), "http://localhost:5000/simulate");
    }

    #[test]
    fn response_without_light_curve_decodes_empty() {
        let dto: SimulationResponseDto =
            serde_json::from_str(r#"{"state":"supernova"}"#).unwrap();
        assert_eq!(dto.state, "supernova");
        assert!(dto.light_curve.time.is_empty());
        assert!(dto.light_curve.luminosity.is_empty());
    }

    #[test]
    fn response_without_state_is_rejected() {
        let parsed: Result<SimulationResponseDto, _> =
            serde_json::from_str(r#"{"light_curve":{"time":[0.0],"luminosity":[1.0]}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn request_dto_carries_all_four_parameters() {
        let parameters = StarParameters::default();
        let body = serde_json::to_value(SimulationRequestDto::from(&parameters)).unwrap();
        assert_eq!(body["mass"], 1.0);
        assert_eq!(body["temperature"], 5000.0);
        assert_eq!(body["luminosity"], 1.0);
        assert_eq!(body["radius"], 1.0);
    }
}
