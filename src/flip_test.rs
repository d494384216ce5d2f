use super::*;

#[test]
fn starts_inactive() {
    assert!(!FlipCard::default().is_active());
}

#[test]
fn odd_flips_are_active() {
    let mut card = FlipCard::default();
    assert!(card.flip());
    card.flip();
    assert!(card.flip());
}

#[test]
fn even_flips_return_to_inactive() {
    for flips in [2, 4, 10] {
        let mut card = FlipCard::default();
        for _ in 0..flips {
            card.flip();
        }
        assert_eq!(card, FlipCard::default());
    }
}
