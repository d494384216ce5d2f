use super::*;

#[test]
fn hola_types_every_prefix_then_stops() {
    let prefixes: Vec<&str> = Typewriter::new("Hola").collect();
    assert_eq!(prefixes, vec!["", "H", "Ho", "Hol", "Hola"]);
}

#[test]
fn empty_text_yields_single_empty_prefix() {
    let prefixes: Vec<&str> = Typewriter::new("").collect();
    assert_eq!(prefixes, vec![""]);
}

#[test]
fn multibyte_text_steps_by_char() {
    let prefixes: Vec<&str> = Typewriter::new("añö").collect();
    assert_eq!(prefixes, vec!["", "a", "añ", "añö"]);
}

#[test]
fn iterator_is_fused() {
    let mut tw = Typewriter::new("a");
    assert_eq!(tw.next(), Some(""));
    assert_eq!(tw.next(), Some("a"));
    assert_eq!(tw.next(), None);
    assert_eq!(tw.next(), None);
}

#[test]
fn len_counts_remaining_prefixes() {
    let mut tw = Typewriter::new("Hola");
    assert_eq!(tw.len(), 5);
    tw.next();
    tw.next();
    assert_eq!(tw.len(), 3);
    for _ in tw.by_ref() {}
    assert_eq!(tw.len(), 0);
}

#[test]
fn text_returns_source() {
    assert_eq!(Typewriter::new("Hola").text(), "Hola");
}
