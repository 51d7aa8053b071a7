use star_sim_wasm::application::coordinator::{
    RunAction, RunPhase, SimulationCoordinator, StateTransition,
};
use star_sim_wasm::application::use_cases::SimulationUpdate;
use star_sim_wasm::domain::chart::services::PresentationDataService;
use star_sim_wasm::domain::chart::HrPoint;
use star_sim_wasm::domain::classification::services::StarClassificationService;
use star_sim_wasm::domain::star::{EvolutionaryState, LightCurve, StarParameters};

fn sample_update() -> SimulationUpdate {
    let parameters = StarParameters::default();
    let classification = StarClassificationService::new().classify(&parameters);
    let presentation = PresentationDataService::new();

    SimulationUpdate {
        evolutionary_state: EvolutionaryState::from("dimming"),
        classification,
        light_curve_series: presentation
            .light_curve_series(&LightCurve::new(vec![0.0, 1.0], vec![2.0, 1.0])),
        hr_point: presentation.hr_point(&parameters),
        star_visual: presentation.star_visual(&parameters, classification.spectral_type),
    }
}

#[test]
fn fresh_coordinator_idles_with_no_history() {
    let coordinator = SimulationCoordinator::new();

    assert_eq!(coordinator.phase(), RunPhase::Idle);
    assert_eq!(coordinator.completed_runs(), 0);
    assert!(coordinator.hr_history().is_empty());
    assert_eq!(coordinator.last_transition(), None);
}

#[test]
fn beginning_a_run_claims_the_slot() {
    let mut coordinator = SimulationCoordinator::new();

    assert!(coordinator.try_begin_run().is_ok());

    assert_eq!(coordinator.phase(), RunPhase::Running);
    assert_eq!(
        coordinator.last_transition(),
        Some(StateTransition {
            from: RunPhase::Idle,
            action: RunAction::RunRequested,
            to: RunPhase::Running,
        })
    );
}

#[test]
fn a_running_coordinator_rejects_a_second_claim() {
    let mut coordinator = SimulationCoordinator::new();
    coordinator.try_begin_run().unwrap();
    let before = coordinator.last_transition();

    let second = coordinator.try_begin_run();

    assert!(second.is_err());
    assert_eq!(coordinator.phase(), RunPhase::Running);
    // the rejected request leaves no trace in the transition log
    assert_eq!(coordinator.last_transition(), before);
}

#[test]
fn completing_a_run_appends_history_and_counts() {
    let mut coordinator = SimulationCoordinator::new();
    coordinator.try_begin_run().unwrap();

    let update = sample_update();
    coordinator.complete_run(&update);

    assert_eq!(coordinator.phase(), RunPhase::Complete);
    assert_eq!(coordinator.completed_runs(), 1);
    assert_eq!(coordinator.hr_history().points(), &[update.hr_point]);
    assert_eq!(
        coordinator.last_transition(),
        Some(StateTransition {
            from: RunPhase::Running,
            action: RunAction::GatewaySucceeded,
            to: RunPhase::Complete,
        })
    );
}

#[test]
fn complete_accepts_the_next_request_like_idle() {
    let mut coordinator = SimulationCoordinator::new();
    coordinator.try_begin_run().unwrap();
    coordinator.complete_run(&sample_update());

    assert!(coordinator.try_begin_run().is_ok());
    assert_eq!(
        coordinator.last_transition(),
        Some(StateTransition {
            from: RunPhase::Complete,
            action: RunAction::RunRequested,
            to: RunPhase::Running,
        })
    );
}

#[test]
fn failing_a_run_returns_to_idle_without_counting() {
    let mut coordinator = SimulationCoordinator::new();
    coordinator.try_begin_run().unwrap();

    coordinator.fail_run();

    assert_eq!(coordinator.phase(), RunPhase::Idle);
    assert_eq!(coordinator.completed_runs(), 0);
    assert!(coordinator.hr_history().is_empty());
    assert_eq!(
        coordinator.last_transition(),
        Some(StateTransition {
            from: RunPhase::Running,
            action: RunAction::GatewayFailed,
            to: RunPhase::Idle,
        })
    );
}

#[test]
fn clearing_history_keeps_the_run_counter() {
    let mut coordinator = SimulationCoordinator::new();
    coordinator.try_begin_run().unwrap();
    coordinator.complete_run(&sample_update());
    coordinator.try_begin_run().unwrap();
    coordinator.complete_run(&sample_update());

    coordinator.clear_hr_history();

    assert!(coordinator.hr_history().is_empty());
    assert_eq!(coordinator.completed_runs(), 2);
    assert_eq!(coordinator.phase(), RunPhase::Complete);
}

#[test]
fn history_points_arrive_in_run_order() {
    let mut coordinator = SimulationCoordinator::new();

    let mut first = sample_update();
    first.hr_point = HrPoint::new(5_000.0, 1.0);
    let mut second = sample_update();
    second.hr_point = HrPoint::new(40_000.0, 50_000.0);

    coordinator.try_begin_run().unwrap();
    coordinator.complete_run(&first);
    coordinator.try_begin_run().unwrap();
    coordinator.complete_run(&second);

    assert_eq!(
        coordinator.hr_history().points(),
        &[HrPoint::new(5_000.0, 1.0), HrPoint::new(40_000.0, 50_000.0)]
    );
    assert_eq!(coordinator.hr_history().latest(), Some(&HrPoint::new(40_000.0, 50_000.0)));
}
