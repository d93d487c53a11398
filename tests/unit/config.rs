use serde_json::json;

use super::*;

#[test]
fn defaults_match_documented_constants() {
    let cfg = CompositorConfig::default();
    assert_eq!(cfg.max_size, Size::new(80, 80));
    assert_eq!(cfg.canvas_limit, None);
    assert_eq!(cfg.pulse_range, ScaleRange { min: 1.0, max: 1.3 });
    assert_eq!(cfg.default_duration_ms, 100);
    assert!(!cfg.threading.parallel);
    assert!(cfg.validate().is_ok());
}

#[test]
fn legacy_profile_uses_64px_bound() {
    assert_eq!(CompositorConfig::legacy().max_size, Size::new(64, 64));
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let cfg = CompositorConfig::from_json_str(
        r#"{ "max_size": { "width": 120, "height": 40 }, "threading": { "parallel": true } }"#,
    )
    .unwrap();
    assert_eq!(cfg.max_size, Size::new(120, 40));
    assert!(cfg.threading.parallel);
    assert_eq!(cfg.threading.threads, None);
    assert_eq!(cfg.pulse_range, ScaleRange::default());
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(matches!(
        CompositorConfig::from_json_str("{ nope"),
        Err(FlipbookError::Serde(_))
    ));
    assert!(CompositorConfig::from_json_str(r#"{ "canvas_limit": 0 }"#).is_err());
    assert!(
        CompositorConfig::from_json_str(r#"{ "max_size": { "width": 0, "height": 5 } }"#)
            .is_err()
    );
    assert!(CompositorConfig::from_json_str(r#"{ "threading": { "threads": 0 } }"#).is_err());
    assert!(
        CompositorConfig::from_json_str(r#"{ "pulse_range": { "min": 2.0, "max": 1.0 } }"#)
            .is_err()
    );
}

#[test]
fn coerce_int_accepts_numbers_and_numeric_strings() {
    assert_eq!(coerce_int(&json!(40)), Some(40));
    assert_eq!(coerce_int(&json!(40.0)), Some(40));
    assert_eq!(coerce_int(&json!(" 12 ")), Some(12));
    assert_eq!(coerce_int(&json!(-3)), Some(-3));
    assert_eq!(coerce_int(&json!(2.5)), None);
    assert_eq!(coerce_int(&json!("fast")), None);
    assert_eq!(coerce_int(&json!(null)), None);
    assert_eq!(coerce_int(&json!([1])), None);
}

#[test]
fn coercions_fall_back_to_safe_defaults() {
    assert_eq!(coerce_duration(&json!("abc"), 100), 100);
    assert_eq!(coerce_duration(&json!(null), 70), 70);
    assert_eq!(coerce_duration(&json!(-5), 100), 0);
    assert_eq!(coerce_duration(&json!("250"), 100), 250);

    assert_eq!(coerce_repeat(&json!(0)), 1);
    assert_eq!(coerce_repeat(&json!(-4)), 1);
    assert_eq!(coerce_repeat(&json!("3")), 3);
    assert_eq!(coerce_repeat(&json!(null)), 1);
    assert_eq!(coerce_repeat(&json!(4_294_967_295u64)), MAX_REPEAT);
    assert_eq!(coerce_repeat(&json!("99999999999")), MAX_REPEAT);

    assert_eq!(coerce_dimension(&json!("x"), 80), 80);
    assert_eq!(coerce_dimension(&json!(0), 80), 80);
    assert_eq!(coerce_dimension(&json!(-10), 80), 80);
    assert_eq!(coerce_dimension(&json!("120"), 80), 120);
}

#[test]
fn effect_params_follow_pulse_range() {
    let cfg = CompositorConfig {
        pulse_range: ScaleRange { min: 0.8, max: 1.1 },
        ..CompositorConfig::default()
    };
    assert_eq!(cfg.effect_params().pulse, ScaleRange { min: 0.8, max: 1.1 });
}
