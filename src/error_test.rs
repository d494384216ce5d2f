use super::*;

#[test]
fn dom_error_displays_message() {
    let err = FxError::Dom("NotFoundError".to_owned());
    assert_eq!(err.to_string(), "dom call failed: NotFoundError");
}

#[test]
fn cast_error_names_expected_type() {
    let err = FxError::Cast { expected: "HtmlElement" };
    assert_eq!(err.to_string(), "expected HtmlElement");
}

#[test]
fn config_error_converts_from_serde() {
    let Err(source) = serde_json::from_str::<serde_json::Value>("{") else {
        panic!("malformed json should fail");
    };
    let err = FxError::from(source);
    assert!(matches!(err, FxError::Config(_)));
    assert!(err.to_string().starts_with("invalid configuration"));
}

#[test]
fn report_accepts_ok_and_err() {
    report("test", Ok(()));
    report("test", Err(FxError::NoBrowser("window")));
}
