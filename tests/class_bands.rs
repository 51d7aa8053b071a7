use star_sim_wasm::domain::classification::SpectralType;
use star_sim_wasm::domain::classification::bands::{CLASS_TABLE_ROWS, TEMPERATURE_CLASS_BANDS};
use strum::IntoEnumIterator;
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn bands_tile_the_axis_hottest_first() {
    assert_eq!(TEMPERATURE_CLASS_BANDS.len(), 7);
    assert_eq!(TEMPERATURE_CLASS_BANDS[0].max_temperature, 60_000.0);
    assert_eq!(TEMPERATURE_CLASS_BANDS[6].min_temperature, 2_300.0);

    for pair in TEMPERATURE_CLASS_BANDS.windows(2) {
        assert_eq!(pair[0].min_temperature, pair[1].max_temperature);
        assert!(pair[0].max_temperature > pair[0].min_temperature);
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn band_colors_and_labels_follow_the_spectral_order() {
    for (band, spectral_type) in TEMPERATURE_CLASS_BANDS.iter().zip(SpectralType::iter()) {
        assert_eq!(band.color, spectral_type.color_hex());
        assert_eq!(band.label, format!("{}-type", spectral_type.letter()));
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn table_rows_cover_each_class_once_in_order() {
    assert_eq!(CLASS_TABLE_ROWS.len(), 7);
    for (row, spectral_type) in CLASS_TABLE_ROWS.iter().zip(SpectralType::iter()) {
        assert_eq!(row.spectral_type, spectral_type);
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn hottest_row_reads_like_the_reference_card() {
    let row = &CLASS_TABLE_ROWS[0];
    assert_eq!(row.spectral_type.letter(), "O");
    assert_eq!(row.effective_temperature, "≥ 33,000 K");
    assert_eq!(row.chromaticity, "blue");
    assert_eq!(row.mass_range, "≥ 16 M☉");
    assert_eq!(row.radius_range, "≥ 6.6 R☉");
    assert_eq!(row.luminosity_range, "≥ 30,000 L☉");
    assert_eq!(row.hydrogen_lines, "Weak");
    assert_eq!(row.fraction_of_stars, "0.00003%");
}

#[wasm_bindgen_test(unsupported = test)]
fn coolest_row_reads_like_the_reference_card() {
    let row = &CLASS_TABLE_ROWS[6];
    assert_eq!(row.spectral_type.letter(), "M");
    assert_eq!(row.effective_temperature, "2,300–3,900 K");
    assert_eq!(row.chromaticity, "Light orangish red");
    assert_eq!(row.mass_range, "0.08–0.45 M☉");
    assert_eq!(row.radius_range, "≤ 0.7 R☉");
    assert_eq!(row.luminosity_range, "≤ 0.08 L☉");
    assert_eq!(row.hydrogen_lines, "Very weak");
    assert_eq!(row.fraction_of_stars, "76%");
}
