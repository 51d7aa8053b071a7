use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use star_sim_wasm::domain::chart::services::PresentationDataService;
use star_sim_wasm::domain::classification::SpectralType;
use star_sim_wasm::domain::star::{Kelvin, SolarLuminosity, SolarMass, SolarRadius, StarParameters};
use wasm_bindgen_test::*;

fn visual_scale(mass: f64) -> f64 {
    let parameters = StarParameters::new(
        SolarMass::from(mass),
        Kelvin::from(5_000.0),
        SolarLuminosity::from(1.0),
        SolarRadius::from(1.0),
    );
    PresentationDataService::new()
        .star_visual(&parameters, SpectralType::K)
        .scale
}

#[wasm_bindgen_test(unsupported = test)]
fn scale_steps_up_at_each_mass_threshold() {
    assert_eq!(visual_scale(20.0), 5.0);
    assert_eq!(visual_scale(16.0), 5.0);
    assert_eq!(visual_scale(15.9), 4.0);
    assert_eq!(visual_scale(2.1), 4.0);
    assert_eq!(visual_scale(2.0), 3.0);
    assert_eq!(visual_scale(1.4), 3.0);
    assert_eq!(visual_scale(1.2), 2.0);
    assert_eq!(visual_scale(1.04), 2.0);
    assert_eq!(visual_scale(1.0), 1.5);
    assert_eq!(visual_scale(0.8), 1.5);
    assert_eq!(visual_scale(0.5), 1.2);
    assert_eq!(visual_scale(0.45), 1.2);
    assert_eq!(visual_scale(0.44), 1.0);
    assert_eq!(visual_scale(0.01), 1.0);
}

#[wasm_bindgen_test(unsupported = test)]
fn tint_comes_straight_from_the_spectral_class() {
    let parameters = StarParameters::default();
    let service = PresentationDataService::new();

    assert_eq!(service.star_visual(&parameters, SpectralType::K).color, "#FFA500");
    assert_eq!(service.star_visual(&parameters, SpectralType::O).color, "#0000FF");
    assert_eq!(service.star_visual(&parameters, SpectralType::M).color, "#FF4500");
}

#[quickcheck]
fn scale_always_lands_on_one_of_the_seven_steps(mass: f64) -> TestResult {
    if !mass.is_finite() {
        return TestResult::discard();
    }

    let scale = visual_scale(mass);
    TestResult::from_bool([1.0, 1.2, 1.5, 2.0, 3.0, 4.0, 5.0].contains(&scale))
}
