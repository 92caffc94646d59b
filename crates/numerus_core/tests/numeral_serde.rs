use numerus_core::{RomanInteger, RomanNumeral};

#[test]
fn serializes_as_canonical_string() {
    let numeral = RomanNumeral::new(" -mcmxl ").unwrap();
    let json = serde_json::to_value(&numeral).unwrap();
    assert_eq!(json, serde_json::json!("-MCMXL"));
}

#[test]
fn deserialization_revalidates_and_canonicalizes() {
    let decoded: RomanNumeral = serde_json::from_str("\" x l i i \"").unwrap();
    assert_eq!(decoded.as_str(), "XLII");

    let decoded: RomanNumeral = serde_json::from_str("\"-NULLA\"").unwrap();
    assert!(decoded.is_nulla());
}

#[test]
fn deserialization_rejects_invalid_text() {
    let err = serde_json::from_str::<RomanNumeral>("\"IIII\"").unwrap_err();
    assert!(
        err.to_string().contains("four consecutive"),
        "unexpected error: {err}"
    );

    let err = serde_json::from_str::<RomanNumeral>("\"\"").unwrap_err();
    assert!(err.to_string().contains("empty"), "unexpected error: {err}");
}

#[test]
fn round_trips_inside_containers() {
    let values = vec![
        RomanInteger::from_value(-61).unwrap().numeral().clone(),
        RomanNumeral::nulla(),
        RomanNumeral::new("MMMCMXCIX").unwrap(),
    ];
    let json = serde_json::to_string(&values).unwrap();
    assert_eq!(json, r#"["-LXI","NULLA","MMMCMXCIX"]"#);

    let decoded: Vec<RomanNumeral> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, values);
}
