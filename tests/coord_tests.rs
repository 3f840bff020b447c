use harpoon::{Coord, ParseError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn label_roundtrip(row in 0usize..26, col in 0usize..26) {
        let coord = Coord::new(row, col);
        let label = coord.to_label();
        prop_assert_eq!(Coord::from_label(&label, 26).unwrap(), coord);
    }

    #[test]
    fn lowercase_letters_accepted(row in 0usize..10, col in 0usize..10) {
        let coord = Coord::new(row, col);
        let label = coord.to_label().to_lowercase();
        prop_assert_eq!(Coord::from_label(&label, 10).unwrap(), coord);
    }
}

#[test]
fn known_labels() {
    assert_eq!(Coord::from_label("A1", 10).unwrap(), Coord::new(0, 0));
    assert_eq!(Coord::from_label("B7", 10).unwrap(), Coord::new(6, 1));
    assert_eq!(Coord::from_label("J10", 10).unwrap(), Coord::new(9, 9));
    assert_eq!(Coord::new(9, 9).to_label(), "J10");
}

#[test]
fn rejects_malformed_labels() {
    for label in ["", "A", "5", "A0", "7B", "A1x", "AA1"] {
        assert!(
            matches!(Coord::from_label(label, 10), Err(ParseError::BadCoord(_))),
            "expected rejection of {:?}",
            label
        );
    }
}

#[test]
fn rejects_out_of_bounds_labels() {
    assert!(Coord::from_label("K1", 10).is_err());
    assert!(Coord::from_label("A11", 10).is_err());
    // The same labels are fine on a bigger board.
    assert!(Coord::from_label("K1", 12).is_ok());
    assert!(Coord::from_label("A11", 12).is_ok());
}
