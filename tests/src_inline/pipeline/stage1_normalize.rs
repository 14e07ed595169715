use super::*;

fn text(s: &str) -> RawValue {
    RawValue::text(s)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

#[test]
fn test_parse_number_decimal_separators() {
    assert_eq!(parse_number(Some(&text("72,5"))), Some(72.5));
    assert_eq!(parse_number(Some(&text("72.5"))), Some(72.5));
    assert_eq!(parse_number(Some(&text(" 80 "))), Some(80.0));
    assert_eq!(parse_number(Some(&RawValue::Number(64.0))), Some(64.0));
}

#[test]
fn test_parse_number_rejects_missing_and_malformed() {
    assert_eq!(parse_number(None), None);
    assert_eq!(parse_number(Some(&text(""))), None);
    assert_eq!(parse_number(Some(&text("   "))), None);
    assert_eq!(parse_number(Some(&text("abc"))), None);
    assert_eq!(parse_number(Some(&text("Infinity"))), None);
    assert_eq!(parse_number(Some(&text("NaN"))), None);
    assert_eq!(parse_number(Some(&RawValue::Other(serde_json::json!(true)))), None);
    assert_eq!(parse_number(Some(&RawValue::Other(serde_json::json!({"a": 1})))), None);
}

#[test]
fn test_parse_number_replaces_only_first_comma() {
    assert_eq!(parse_number(Some(&text("1,234,5"))), None);
    assert_eq!(parse_number(Some(&text("-3,25"))), Some(-3.25));
}

#[test]
fn test_parse_height_meters() {
    assert_eq!(parse_height_meters(Some(&text("175"))), Some(1.75));
    assert_eq!(parse_height_meters(Some(&text("1,75"))), Some(1.75));
    assert_eq!(parse_height_meters(Some(&RawValue::Number(1.75))), Some(1.75));
    assert_eq!(parse_height_meters(Some(&RawValue::Number(3.0))), Some(3.0));
    assert_eq!(parse_height_meters(Some(&text("x"))), None);
    assert_eq!(parse_height_meters(None), None);
}

#[test]
fn test_resolve_sex() {
    assert_eq!(resolve_sex(Some("Feminino")), Sex::Female);
    assert_eq!(resolve_sex(Some("female")), Sex::Female);
    assert_eq!(resolve_sex(Some("F")), Sex::Female);
    assert_eq!(resolve_sex(Some("  f ")), Sex::Female);
    assert_eq!(resolve_sex(Some("Masculino")), Sex::Male);
    assert_eq!(resolve_sex(Some("Outro")), Sex::Male);
    assert_eq!(resolve_sex(Some("")), Sex::Male);
    assert_eq!(resolve_sex(None), Sex::Male);
}

#[test]
fn test_read_skinfolds_uses_record_keys() {
    let input = RawAssessmentInput {
        chest_skinfold: Some(text("10,5")),
        abdominal_skinfold: Some(RawValue::Number(20.0)),
        femoral: Some(text("")),
        ..Default::default()
    };
    let folds = read_skinfolds(&input);
    assert_eq!(folds.get(SkinfoldSite::Chest), Some(10.5));
    assert_eq!(folds.get(SkinfoldSite::Abdominal), Some(20.0));
    assert_eq!(folds.get(SkinfoldSite::Femoral), None);
    assert_eq!(folds.present_count(), 2);
}

#[test]
fn test_normalize_prefers_record_gender_over_subject() {
    let input = RawAssessmentInput {
        gender: Some(text("Masculino")),
        ..Default::default()
    };
    let subject = Subject {
        gender: Some(text("Feminino")),
        ..Default::default()
    };
    let m = normalize(&input, Some(&subject), today(), &ThresholdProfile::default_v1());
    assert_eq!(m.sex, Sex::Male);

    let m = normalize(
        &RawAssessmentInput::default(),
        Some(&subject),
        today(),
        &ThresholdProfile::default_v1(),
    );
    assert_eq!(m.sex, Sex::Female);
}

#[test]
fn test_normalize_empty_record() {
    let m = normalize(
        &RawAssessmentInput::default(),
        None,
        today(),
        &ThresholdProfile::default_v1(),
    );
    assert_eq!(m.weight_kg, None);
    assert_eq!(m.height_m, None);
    assert_eq!(m.sex, Sex::Male);
    assert_eq!(m.age_years, 30.0);
    assert_eq!(m.skinfolds.present_count(), 0);
}

#[test]
fn test_read_skinfolds_short_keys_fill_in() {
    let input = RawAssessmentInput {
        chest: Some(RawValue::Number(9.0)),
        abdominal: Some(RawValue::Number(21.0)),
        abdominal_skinfold: Some(RawValue::Number(20.0)),
        ..Default::default()
    };
    let folds = read_skinfolds(&input);
    assert_eq!(folds.get(SkinfoldSite::Chest), Some(9.0));
    assert_eq!(folds.get(SkinfoldSite::Abdominal), Some(20.0));
}

#[test]
fn test_normalize_age_from_subject_dob_camel_key() {
    let subject = Subject {
        date_of_birth_camel: Some(text("1990-06-16")),
        dob: Some(text("1980-01-01")),
        ..Default::default()
    };
    let m = normalize(
        &RawAssessmentInput::default(),
        Some(&subject),
        today(),
        &ThresholdProfile::default_v1(),
    );
    assert_eq!(m.age_years, 34.0);
}

#[test]
fn test_normalize_age_from_subject_dob() {
    let subject = Subject {
        date_of_birth: Some(text("1990-06-16")),
        ..Default::default()
    };
    let m = normalize(
        &RawAssessmentInput::default(),
        Some(&subject),
        today(),
        &ThresholdProfile::default_v1(),
    );
    assert_eq!(m.age_years, 34.0);
}
