use super::*;

// ============================================================================
// is_hex_color_code / validate_color_code
// ============================================================================

#[test]
fn test_is_hex_color_code() {
    assert!(is_hex_color_code("A1B2C3"));
    assert!(is_hex_color_code("a1b2c3"));
    assert!(!is_hex_color_code("G1B2C3"));
    assert!(!is_hex_color_code("A1B2C"));
    assert!(!is_hex_color_code("#A1B2C"));
    assert!(!is_hex_color_code(""));
}

#[test]
fn test_validate_color_code_messages() {
    assert!(validate_color_code("A1B2C3").is_ok());
    assert!(validate_color_code("a1b2c3").is_ok());

    let err = validate_color_code("G1B2C3").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid color code: G1B2C3. It must be a 6-character hex code without #."
    );

    let err = validate_color_code("").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid color code: . It must be a 6-character hex code without #."
    );
}

// ============================================================================
// HexColor
// ============================================================================

#[test]
fn test_hex_color_rgb() {
    let color = HexColor::new("d73a4a").unwrap();
    assert_eq!(color.rgb(), (0xd7, 0x3a, 0x4a));
}

#[test]
fn test_hex_color_luminance_bounds() {
    let black = HexColor::new("000000").unwrap();
    let white = HexColor::new("FFFFFF").unwrap();

    assert!(black.relative_luminance().abs() < 1e-9);
    assert!((white.relative_luminance() - 1.0).abs() < 1e-9);
}

#[test]
fn test_hex_color_deserialization_validates() {
    let color: HexColor = serde_json::from_str("\"2ea44f\"").unwrap();
    assert_eq!(color.as_str(), "2ea44f");

    let invalid = serde_json::from_str::<HexColor>("\"#2ea44f\"");
    assert!(invalid.is_err());
}

#[test]
fn test_accessible_text_color() {
    let yellow = HexColor::new("ffff00").unwrap();
    assert_eq!(yellow.accessible_text_color().unwrap().as_str(), BLACK);

    let navy = HexColor::new("000080").unwrap();
    assert_eq!(navy.accessible_text_color().unwrap().as_str(), WHITE);
}

// ============================================================================
// contrast_ratio / has_accessible_contrast
// ============================================================================

#[test]
fn test_contrast_ratio_black_on_white_is_maximum() {
    let ratio = contrast_ratio("FFFFFF", "000000").unwrap();
    assert!((ratio - 21.0).abs() < 1e-9);
}

#[test]
fn test_contrast_ratio_is_symmetric() {
    let a = contrast_ratio("d73a4a", "ffffff").unwrap();
    let b = contrast_ratio("ffffff", "d73a4a").unwrap();
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn test_has_accessible_contrast() {
    assert!(has_accessible_contrast("FFFFFF", "000000").unwrap());
    assert!(!has_accessible_contrast("777777", "888888").unwrap());
}

#[test]
fn test_has_accessible_contrast_rejects_invalid_colors() {
    let err = has_accessible_contrast("GGGGGG", "000000").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid color code: GGGGGG. It must be a 6-character hex code without #."
    );

    let err = has_accessible_contrast("FFFFFF", "00000G").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid color code: 00000G. It must be a 6-character hex code without #."
    );
}

#[test]
fn test_hex_color_is_stored_in_lower_case() {
    let color = HexColor::new("D73A4A").unwrap();
    assert_eq!(color.as_str(), "d73a4a");
}
