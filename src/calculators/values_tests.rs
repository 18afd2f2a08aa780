use crate::calculators::Values;

#[test]
fn test_zero_is_present_nan_is_missing() {
    let values = Values::new().with("a", 0.0).with("b", f64::NAN);
    assert!(values.contains("a"));
    assert!(!values.contains("b"));
    assert!(!values.contains("c"));
    assert_eq!(values.get("a"), Some(0.0));
    assert_eq!(values.get("b"), None);
    assert!(values.value("b").is_nan());
    assert!(values.value("c").is_nan());
}

#[test]
fn test_insert_optional_skips_blank_fields() {
    let mut values = Values::new();
    values.insert_optional("mass", None);
    values.insert_optional("force", Some(-2.0));
    assert_eq!(values.len(), 1);
    assert_eq!(values.get("force"), Some(-2.0));
}

#[test]
fn test_supplied_is_sorted_and_skips_nan() {
    let values: Values = vec![("zeta", 1.0), ("alpha", 2.0), ("mid", f64::NAN)].into_iter().collect();
    assert_eq!(values.supplied(), vec!["alpha", "zeta"]);
}

#[test]
fn test_insert_overwrites_and_remove() {
    let mut values = Values::from([("a", 1.0)]);
    assert_eq!(values.insert("a", 2.0), Some(1.0));
    assert_eq!(values.remove("a"), Some(2.0));
    assert!(values.is_empty());
}
