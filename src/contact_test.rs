use super::*;

#[test]
fn greets_by_name() {
    assert_eq!(
        confirmation_message(Some("Ana")),
        "Gracias Ana, tu mensaje fue enviado correctamente."
    );
}

#[test]
fn empty_name_falls_back() {
    assert_eq!(
        confirmation_message(Some("")),
        "Gracias amigo/a, tu mensaje fue enviado correctamente."
    );
}

#[test]
fn missing_field_falls_back() {
    assert_eq!(
        confirmation_message(None),
        "Gracias amigo/a, tu mensaje fue enviado correctamente."
    );
}

#[test]
fn whitespace_name_is_kept_verbatim() {
    assert_eq!(
        confirmation_message(Some(" ")),
        "Gracias  , tu mensaje fue enviado correctamente."
    );
}

#[test]
fn multiline_name_from_textarea_is_kept() {
    assert_eq!(
        confirmation_message(Some("Ana\nMaría")),
        "Gracias Ana\nMaría, tu mensaje fue enviado correctamente."
    );
}
