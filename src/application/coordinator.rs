use std::cell::RefCell;

use derive_more::Display;

use crate::application::use_cases::{RunSimulationUseCase, SimulationUpdate};
use crate::domain::chart::HrHistory;
use crate::domain::errors::{RunError, RunResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::star::StarParameters;
use crate::global_state;
use crate::infrastructure::http::SimulationHttpClient;
use crate::{log_debug, log_error, log_info, log_warn};

/// Lifecycle phase of the simulation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum RunPhase {
    #[default]
    #[display(fmt = "Idle")]
    Idle,
    #[display(fmt = "Running")]
    Running,
    #[display(fmt = "Complete")]
    Complete,
}

/// What caused a phase change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RunAction {
    #[display(fmt = "RunRequested")]
    RunRequested,
    #[display(fmt = "GatewaySucceeded")]
    GatewaySucceeded,
    #[display(fmt = "GatewayFailed")]
    GatewayFailed,
}

/// Immutable record of one phase change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub from: RunPhase,
    pub action: RunAction,
    pub to: RunPhase,
}

/// Application coordinator owning the run state machine, the HR history
/// and the use case wired to the HTTP gateway.
pub struct SimulationCoordinator {
    use_case: RunSimulationUseCase<SimulationHttpClient>,
    phase: RunPhase,
    hr_history: HrHistory,
    last_transition: Option<StateTransition>,
    completed_runs: u32,
}

impl SimulationCoordinator {
    pub fn new() -> Self {
        get_logger().info(
            LogComponent::Application("SimulationCoordinator"),
            "Creating simulation coordinator",
        );

        Self {
            use_case: RunSimulationUseCase::new(SimulationHttpClient::new()),
            phase: RunPhase::Idle,
            hr_history: HrHistory::new(),
            last_transition: None,
            completed_runs: 0,
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn completed_runs(&self) -> u32 {
        self.completed_runs
    }

    pub fn hr_history(&self) -> &HrHistory {
        &self.hr_history
    }

    pub fn last_transition(&self) -> Option<StateTransition> {
        self.last_transition
    }

    fn transition(&mut self, action: RunAction, to: RunPhase) {
        let from = self.phase;
        self.phase = to;
        self.last_transition = Some(StateTransition { from, action, to });
        log_debug!(
            LogComponent::Application("SimulationCoordinator"),
            "Phase {} -> {} ({})",
            from,
            to,
            action
        );
    }

    /// Claim the run slot. Rejected while another run is in flight;
    /// Complete behaves like Idle for new requests.
    pub fn try_begin_run(&mut self) -> RunResult<()> {
        if self.phase == RunPhase::Running {
            return Err(RunError::AlreadyRunning);
        }
        self.transition(RunAction::RunRequested, RunPhase::Running);
        Ok(())
    }

    /// Record a successful run and append its HR point to the history.
    pub fn complete_run(&mut self, update: &SimulationUpdate) {
        self.hr_history.append(update.hr_point);
        self.completed_runs += 1;
        self.transition(RunAction::GatewaySucceeded, RunPhase::Complete);
    }

    /// Record a failed run. Previously published results stay as they are.
    pub fn fail_run(&mut self) {
        self.transition(RunAction::GatewayFailed, RunPhase::Idle);
    }

    /// Drop every accumulated HR point.
    pub fn clear_hr_history(&mut self) {
        self.hr_history.clear();
    }

    fn use_case(&self) -> RunSimulationUseCase<SimulationHttpClient> {
        self.use_case.clone()
    }
}

impl Default for SimulationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

// Global coordinator instance (thread-local for WASM)
thread_local! {
    pub static GLOBAL_COORDINATOR: RefCell<Option<SimulationCoordinator>> = const { RefCell::new(None) };
}

/// Install a fresh coordinator, replacing any existing one.
pub fn initialize_global_coordinator() {
    GLOBAL_COORDINATOR.with(|global| {
        *global.borrow_mut() = Some(SimulationCoordinator::new());
    });
}

/// Read access to the global coordinator.
pub fn with_global_coordinator<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&SimulationCoordinator) -> R,
{
    GLOBAL_COORDINATOR.with(|global| global.borrow().as_ref().map(f))
}

/// Mutable access to the global coordinator.
pub fn with_global_coordinator_mut<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut SimulationCoordinator) -> R,
{
    GLOBAL_COORDINATOR.with(|global| global.borrow_mut().as_mut().map(f))
}

/// Drive one full run: validate, claim the run slot, call the simulation
/// service, then publish every derived structure in one pass.
///
/// Validation rejects before the phase machine is touched, so an invalid
/// submission never flips the phase. The coordinator borrow is released
/// before the await; only the cloned use case crosses it.
pub async fn execute_run(parameters: StarParameters) -> RunResult<()> {
    if let Err(error) = parameters.validate() {
        log_warn!(
            LogComponent::Application("SimulationCoordinator"),
            "⚠️ Rejected parameters: {}",
            error
        );
        return Err(error.into());
    }

    let claimed: RunResult<RunSimulationUseCase<SimulationHttpClient>> =
        GLOBAL_COORDINATOR.with(|global| {
            let mut slot = global.borrow_mut();
            let coordinator = slot.get_or_insert_with(SimulationCoordinator::new);
            coordinator.try_begin_run()?;
            Ok(coordinator.use_case())
        });
    let use_case = match claimed {
        Ok(use_case) => use_case,
        Err(error) => {
            log_warn!(
                LogComponent::Application("SimulationCoordinator"),
                "⚠️ {}",
                error
            );
            return Err(error);
        }
    };
    global_state::publish_run_phase(RunPhase::Running);

    match use_case.execute(parameters).await {
        Ok(update) => {
            publish_update(update);
            Ok(())
        }
        Err(error) => {
            log_error!(
                LogComponent::Application("SimulationCoordinator"),
                "❌ Simulation run failed: {}",
                error
            );
            with_global_coordinator_mut(|coordinator| coordinator.fail_run());
            global_state::publish_run_phase(RunPhase::Idle);
            Err(error)
        }
    }
}

/// Clear the HR history and its published view.
pub fn clear_hr_history() {
    with_global_coordinator_mut(|coordinator| coordinator.clear_hr_history());
    global_state::clear_hr_points();
    log_info!(
        LogComponent::Application("SimulationCoordinator"),
        "HR history cleared"
    );
}

fn publish_update(update: SimulationUpdate) {
    let snapshot = with_global_coordinator_mut(|coordinator| {
        coordinator.complete_run(&update);
        (
            coordinator.hr_history().points().to_vec(),
            coordinator.completed_runs(),
        )
    });
    let Some((history, run_count)) = snapshot else {
        return;
    };

    global_state::apply_update(&update, history, run_count);

    log_info!(
        LogComponent::Application("SimulationCoordinator"),
        "✅ Run #{} published: state '{}', {} light curve samples",
        run_count,
        update.evolutionary_state.value(),
        update.light_curve_series.sample_count()
    );
}
