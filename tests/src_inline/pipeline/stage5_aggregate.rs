use super::*;
use crate::model::composition::DensityMethod;
use crate::model::measurements::{Sex, Skinfolds};

fn profile() -> ThresholdProfile {
    ThresholdProfile::default_v1()
}

fn measurements(weight: Option<f64>, height: Option<f64>) -> NormalizedMeasurements {
    NormalizedMeasurements {
        weight_kg: weight,
        height_m: height,
        sex: Sex::Male,
        age_years: 30.0,
        skinfolds: Skinfolds::default(),
    }
}

fn outcome(density: Option<f64>, fat: Option<f64>) -> DensityOutcome {
    DensityOutcome {
        method: DensityMethod::SevenSite,
        density,
        body_fat_percent: fat,
        sites_used: 7,
    }
}

#[test]
fn test_bmi_requires_positive_weight_and_height() {
    let v = bmi(Some(80.0), Some(1.80)).unwrap();
    assert!((v - 80.0 / (1.80 * 1.80)).abs() < 1e-9);
    assert_eq!(bmi(None, Some(1.8)), None);
    assert_eq!(bmi(Some(80.0), None), None);
    assert_eq!(bmi(Some(80.0), Some(0.0)), None);
    assert_eq!(bmi(Some(-80.0), Some(1.8)), None);
}

#[test]
fn test_bmi_matches_definition_over_grid() {
    for w in [0.5, 45.0, 62.3, 80.0, 151.7, 300.0] {
        for h in [0.4, 1.2, 1.55, 1.75, 2.1, 3.0] {
            let v = bmi(Some(w), Some(h)).unwrap();
            assert!((v - w / (h * h)).abs() < 1e-9, "w={w} h={h}");
        }
    }
}

#[test]
fn test_bmi_classification_boundaries() {
    let p = profile();
    assert_eq!(classify_bmi(Some(18.4999), &p), Some(BmiCategory::Underweight));
    assert_eq!(classify_bmi(Some(18.5), &p), Some(BmiCategory::Normal));
    assert_eq!(classify_bmi(Some(24.999), &p), Some(BmiCategory::Normal));
    assert_eq!(classify_bmi(Some(25.0), &p), Some(BmiCategory::Overweight));
    assert_eq!(classify_bmi(Some(29.99), &p), Some(BmiCategory::Overweight));
    assert_eq!(classify_bmi(Some(30.0), &p), Some(BmiCategory::Obese));
    assert_eq!(classify_bmi(Some(0.0), &p), None);
    assert_eq!(classify_bmi(Some(-3.0), &p), None);
    assert_eq!(classify_bmi(None, &p), None);
}

#[test]
fn test_bmi_labels() {
    assert_eq!(BmiCategory::Underweight.label(), "Magreza");
    assert_eq!(BmiCategory::Normal.label(), "Normal");
    assert_eq!(BmiCategory::Overweight.label(), "Sobrepeso");
    assert_eq!(BmiCategory::Obese.label(), "Obeso");
}

#[test]
fn test_fat_classification_boundaries() {
    let p = profile();
    assert_eq!(classify_fat(Some(9.99), &p), Some(FatCategory::Low));
    assert_eq!(classify_fat(Some(10.0), &p), Some(FatCategory::Normal));
    assert_eq!(classify_fat(Some(20.0), &p), Some(FatCategory::Elevated));
    assert_eq!(classify_fat(Some(25.0), &p), Some(FatCategory::High));
    assert_eq!(classify_fat(Some(-2.0), &p), Some(FatCategory::Low));
    assert_eq!(classify_fat(None, &p), None);
    assert_eq!(FatCategory::Elevated.label(), "elevado");
}

#[test]
fn test_ideal_weight_band() {
    let band = ideal_weight_band(Some(1.75), &profile()).unwrap();
    assert!((band.min_kg - 18.5 * 1.75 * 1.75).abs() < 1e-9);
    assert!((band.max_kg - 24.9 * 1.75 * 1.75).abs() < 1e-9);
    assert_eq!(format_ideal_band(Some(band)), "57kg e 76kg");
    assert_eq!(ideal_weight_band(None, &profile()), None);
    assert_eq!(format_ideal_band(None), MISSING);
}

#[test]
fn test_split_mass_adds_back_to_weight() {
    for w in [40.0, 57.3, 80.0, 123.45] {
        for f in [0.0, 4.2, 18.75, 33.3333, 60.0] {
            let (lean, fat) = split_mass(Some(w), Some(f)).unwrap();
            assert!((lean + fat - w).abs() < 1e-6, "w={w} f={f}");
            assert!((lean - w * (1.0 - f / 100.0)).abs() < 1e-9);
        }
    }
    assert_eq!(split_mass(None, Some(20.0)), None);
    assert_eq!(split_mass(Some(80.0), None), None);
}

#[test]
fn test_bmi_gauge_position_clamps() {
    let p = profile();
    assert!((bmi_gauge_position(Some(10.0), &p) - 4.0).abs() < 1e-12);
    assert!((bmi_gauge_position(Some(40.0), &p) - 96.0).abs() < 1e-12);
    assert!((bmi_gauge_position(Some(25.0), &p) - 50.0).abs() < 1e-12);
    assert!((bmi_gauge_position(Some(55.0), &p) - 96.0).abs() < 1e-12);
    assert!((bmi_gauge_position(Some(3.0), &p) - 4.0).abs() < 1e-12);
    assert!((bmi_gauge_position(None, &p) - 4.0).abs() < 1e-12);
}

#[test]
fn test_bmi_gauge_position_degenerate_range() {
    let mut p = profile();
    p.gauge_bmi_min = 40.0;
    p.gauge_bmi_max = 10.0;
    assert_eq!(bmi_gauge_position(Some(25.0), &p), p.gauge_offset_percent);
}

#[test]
fn test_format_or_missing() {
    assert_eq!(format_or_missing(Some(21.21374), 2, "%"), "21.21%");
    assert_eq!(format_or_missing(Some(1.0504787), 3, " g/cm³"), "1.050 g/cm³");
    assert_eq!(format_or_missing(Some(63.03), 1, " kg"), "63.0 kg");
    assert_eq!(format_or_missing(None, 2, "%"), "—");
    assert_eq!(format_or_missing(Some(f64::NAN), 2, "%"), "—");
}

#[test]
fn test_format_or_missing_rounds_ties_away_from_zero() {
    assert_eq!(format_or_missing(Some(21.125), 2, "%"), "21.13%");
    assert_eq!(format_or_missing(Some(0.25), 1, "%"), "0.3%");
    assert_eq!(format_or_missing(Some(62.25), 1, " kg"), "62.3 kg");
    assert_eq!(format_or_missing(Some(-1.0625), 3, " g/cm³"), "-1.063 g/cm³");
}

#[test]
fn test_aggregate_full() {
    let m = measurements(Some(80.0), Some(1.80));
    let out = aggregate(&m, &outcome(Some(1.0504787), Some(21.213742839)), &profile());
    assert_eq!(out.body_fat_percent, Some(21.2137));
    assert_eq!(out.fat_category, Some(FatCategory::Elevated));
    assert_eq!(out.fat_label, "elevado");
    assert_eq!(out.bmi_category, Some(BmiCategory::Normal));
    assert_eq!(out.bmi_label, "Normal");

    let lean = out.lean_mass_kg.unwrap();
    let fat = out.fat_mass_kg.unwrap();
    assert!((lean + fat - 80.0).abs() < 1e-6);
    assert!((lean - 80.0 * (1.0 - 0.212137)).abs() < 1e-9);
    assert!((out.lean_mass_percent.unwrap() - 78.7863).abs() < 1e-9);

    assert_eq!(out.display.bmi, "24.7");
    assert_eq!(out.display.body_fat_percent, "21.21%");
    assert_eq!(out.display.body_density, "1.050 g/cm³");
    assert_eq!(out.display.lean_mass_kg, "63.0 kg");
    assert_eq!(out.display.fat_mass_kg, "17.0 kg");
    assert_eq!(out.display.lean_mass_percent, "78.8%");
    assert_eq!(out.display.ideal_weight, "60kg e 81kg");
}

#[test]
fn test_aggregate_degrades_to_missing() {
    let m = measurements(None, None);
    let out = aggregate(&m, &outcome(None, None), &profile());
    assert_eq!(out.bmi, None);
    assert_eq!(out.bmi_label, "");
    assert_eq!(out.fat_label, "");
    assert_eq!(out.lean_mass_kg, None);
    assert_eq!(out.fat_mass_kg, None);
    assert_eq!(out.lean_mass_percent, None);
    assert_eq!(out.ideal_weight, None);
    for s in [
        &out.display.bmi,
        &out.display.body_fat_percent,
        &out.display.body_density,
        &out.display.lean_mass_kg,
        &out.display.fat_mass_kg,
        &out.display.lean_mass_percent,
        &out.display.ideal_weight,
    ] {
        assert_eq!(s, MISSING);
    }
}

#[test]
fn test_aggregate_fat_without_weight() {
    let m = measurements(None, Some(1.70));
    let out = aggregate(&m, &outcome(None, Some(15.0)), &profile());
    assert_eq!(out.body_fat_percent, Some(15.0));
    assert_eq!(out.fat_label, "normal");
    assert_eq!(out.lean_mass_kg, None);
    assert_eq!(out.display.lean_mass_percent, MISSING);
}
