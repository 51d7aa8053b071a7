use star_sim_wasm::domain::chart::{HrHistory, HrPoint};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn history_starts_empty() {
    let history = HrHistory::new();

    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
    assert_eq!(history.latest(), None);
}

#[wasm_bindgen_test(unsupported = test)]
fn points_accumulate_in_insertion_order() {
    let mut history = HrHistory::new();
    history.append(HrPoint::new(5_000.0, 1.0));
    history.append(HrPoint::new(8_000.0, 30.0));
    history.append(HrPoint::new(40_000.0, 50_000.0));

    assert_eq!(history.len(), 3);
    assert_eq!(
        history.points(),
        &[
            HrPoint::new(5_000.0, 1.0),
            HrPoint::new(8_000.0, 30.0),
            HrPoint::new(40_000.0, 50_000.0),
        ]
    );
    assert_eq!(history.latest(), Some(&HrPoint::new(40_000.0, 50_000.0)));
}

#[wasm_bindgen_test(unsupported = test)]
fn repeated_runs_of_one_star_stack_their_points() {
    let mut history = HrHistory::new();
    history.append(HrPoint::new(5_000.0, 1.0));
    history.append(HrPoint::new(5_000.0, 1.0));

    assert_eq!(history.len(), 2);
}

#[wasm_bindgen_test(unsupported = test)]
fn clear_drops_everything() {
    let mut history = HrHistory::new();
    history.append(HrPoint::new(5_000.0, 1.0));
    history.clear();

    assert!(history.is_empty());
    assert_eq!(history.latest(), None);
}
