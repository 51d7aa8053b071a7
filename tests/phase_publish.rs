use leptos::*;
use star_sim_wasm::application::coordinator::RunPhase;
use star_sim_wasm::domain::chart::HrPoint;
use star_sim_wasm::global_state::{self, globals};

// Single test on purpose: the published signals live on this thread's
// reactive runtime and must not be shared across test threads.
#[test]
fn phase_and_history_writes_leave_derived_signals_untouched() {
    let globals = globals();
    assert_eq!(globals.run_phase.get_untracked(), RunPhase::Idle);

    global_state::publish_run_phase(RunPhase::Running);
    assert_eq!(globals.run_phase.get_untracked(), RunPhase::Running);
    assert_eq!(globals.run_count.get_untracked(), 0);
    assert!(globals.classification.get_untracked().is_none());
    assert!(globals.light_curve.get_untracked().is_empty());

    global_state::publish_run_phase(RunPhase::Idle);
    assert_eq!(globals.run_phase.get_untracked(), RunPhase::Idle);

    globals.hr_points.set(vec![HrPoint::new(5_000.0, 1.0)]);
    global_state::clear_hr_points();
    assert!(globals.hr_points.get_untracked().is_empty());
    assert_eq!(globals.run_phase.get_untracked(), RunPhase::Idle);
}
