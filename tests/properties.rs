//! Behavioral properties of the effect models, exercised through the public API.

use page_fx::carousel::{Breakpoints, Carousel, Step};
use page_fx::config::FxConfig;
use page_fx::contact::confirmation_message;
use page_fx::dark_mode::{DarkMode, MemoryStore, PreferenceStore};
use page_fx::flip::FlipCard;
use page_fx::typewriter::Typewriter;

#[test]
fn visible_count_covers_every_width_band() {
    let bp = Breakpoints::default();
    for w in 0..2000 {
        let w = f64::from(w);
        let expected = if w < 520.0 {
            1
        } else if w < 900.0 {
            2
        } else {
            3
        };
        assert_eq!(bp.visible_count(w), expected, "width {w}");
    }
}

#[test]
fn carousel_index_never_leaves_bounds() {
    let cfg = FxConfig::default();
    for len in 0..8 {
        for width in [320.0, 640.0, 1280.0] {
            let mut c = Carousel::new(len, width, cfg.breakpoints());
            let bound = len.saturating_sub(c.visible());
            for _ in 0..len + 3 {
                c.advance(Step::Next);
                assert!(c.index() <= bound);
            }
            assert_eq!(c.index(), bound);
            for _ in 0..len + 3 {
                c.advance(Step::Prev);
            }
            assert_eq!(c.index(), 0);
        }
    }
}

#[test]
fn dark_mode_double_toggle_round_trips() {
    for seed in [None, Some("0"), Some("1")] {
        let mut store = MemoryStore::new();
        if let Some(value) = seed {
            store.save("site-dark", value).expect("seed");
        }
        let mut dark = DarkMode::load(store, "site-dark");
        let before = dark.is_enabled();
        dark.toggle().expect("toggle");
        dark.toggle().expect("toggle");
        assert_eq!(dark.is_enabled(), before);
        assert_eq!(
            dark.store().load("site-dark").as_deref(),
            Some(if before { "1" } else { "0" })
        );
    }
}

#[test]
fn contact_confirmation_text() {
    assert_eq!(
        confirmation_message(Some("Ana")),
        "Gracias Ana, tu mensaje fue enviado correctamente."
    );
    assert!(confirmation_message(Some("")).starts_with("Gracias amigo/a, "));
}

#[test]
fn flip_card_even_toggles_restore() {
    let mut card = FlipCard::default();
    card.flip();
    card.flip();
    assert!(!card.is_active());
}

#[test]
fn typewriter_hola_sequence() {
    let seen: Vec<String> = Typewriter::new("Hola").map(str::to_owned).collect();
    assert_eq!(seen, ["", "H", "Ho", "Hol", "Hola"]);
}
