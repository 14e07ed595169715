use super::*;

#[test]
fn test_quantiles() {
    let v = vec![1.0f64, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(median(&v), Some(3.0));
    assert_eq!(p10(&v), Some(2.0));
    assert_eq!(p90(&v), Some(5.0));
}

#[test]
fn test_quantiles_unsorted_input() {
    let v = vec![30.0f64, 10.0, 20.0];
    assert_eq!(median(&v), Some(20.0));
}

#[test]
fn test_quantiles_empty_are_unknown() {
    assert_eq!(median(&[]), None);
    let stats = NamedStats::from_values("bmi", &[]);
    assert_eq!(stats.n, 0);
    assert!(stats.p90.is_none());
}

#[test]
fn test_fraction_and_format() {
    assert_eq!(fraction(1, 4), 0.25);
    assert_eq!(fraction(3, 0), 0.0);
    assert_eq!(format_opt(Some(1.23456), 3), "1.235");
    assert_eq!(format_opt(None, 3), "");
}
