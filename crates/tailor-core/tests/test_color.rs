use tailor_core::color::GarmentColor;

#[test]
fn test_parse_long_form() {
    assert_eq!(
        GarmentColor::parse_hex("#ff8000").unwrap(),
        GarmentColor::rgb(255, 128, 0)
    );
}

#[test]
fn test_parse_short_form() {
    assert_eq!(
        GarmentColor::parse_hex("#f80").unwrap(),
        GarmentColor::rgb(255, 136, 0)
    );
}

#[test]
fn test_parse_without_hash_and_uppercase() {
    let c: GarmentColor = "00AAff".parse().unwrap();
    assert_eq!(c, GarmentColor::rgb(0, 170, 255));
}

#[test]
fn test_parse_rejects_bad_input() {
    for bad in ["", "#", "#12", "#12345", "#gg0000", "#1234567"] {
        assert!(GarmentColor::parse_hex(bad).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn test_display_is_lowercase_hex() {
    assert_eq!(GarmentColor::rgb(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    assert_eq!(GarmentColor::default().to_string(), "#ffffff");
}
