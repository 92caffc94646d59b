use numerus_core::{is_well_formed, validate, NumeralSyntaxError, RomanNumeral, NULLA};

#[test]
fn empty_input_is_rejected() {
    assert_eq!(validate("").unwrap_err(), NumeralSyntaxError::EmptyNumeral);
}

#[test]
fn twenty_characters_are_impossibly_long() {
    let err = validate("MMMMMMMMMMMMMMMMMMMM").unwrap_err();
    assert_eq!(err, NumeralSyntaxError::ImpossiblyLong);
}

#[test]
fn four_consecutive_ten_like_chars_are_named() {
    let err = validate("CCCC").unwrap_err();
    assert_eq!(err, NumeralSyntaxError::FourConsecutive("CCCC".to_string()));
    assert!(err.to_string().contains("CCCC"));

    let err = validate("MMMMXXXX").unwrap_err();
    assert_eq!(
        err,
        NumeralSyntaxError::FourConsecutive("MMMMXXXX".to_string())
    );
}

#[test]
fn repeated_five_like_chars_are_named() {
    let err = validate("DDXII").unwrap_err();
    assert_eq!(err, NumeralSyntaxError::RepeatedFiveLike("DD".to_string()));
    assert!(err.to_string().contains("DD"));
}

#[test]
fn non_roman_chars_are_collected_uppercased() {
    let err = validate("pPFXC-").unwrap_err();
    assert_eq!(err, NumeralSyntaxError::NonRomanChars("PPF-".to_string()));
}

#[test]
fn illegal_orderings_fall_through_to_generic_error() {
    for raw in ["MMCMIIIX", "IXV", "IIV", "VX", "XM", "CMM", "DM", "LC"] {
        assert_eq!(
            validate(raw).unwrap_err(),
            NumeralSyntaxError::GenericSyntaxError,
            "`{raw}` should be a generic syntax error"
        );
    }
}

#[test]
fn whitespace_and_case_are_normalized() {
    assert_eq!(validate("  xlI i ").unwrap(), validate("XLII").unwrap());
    assert_eq!(validate("  xlI i ").unwrap(), "XLII");
}

#[test]
fn zero_sentinel_is_unsigned() {
    assert_eq!(validate("NULLA").unwrap(), NULLA);
    assert_eq!(validate("-NULLA").unwrap(), validate("NULLA").unwrap());
    assert_eq!(
        RomanNumeral::new("-nulla").unwrap(),
        RomanNumeral::new("nulla").unwrap()
    );
}

#[test]
fn sentinel_combined_with_symbols_is_rejected() {
    assert!(!is_well_formed("NULLAX"));
    assert!(!is_well_formed("XNULLA"));
}

#[test]
fn predicate_agrees_with_constructor() {
    for raw in ["XXI", "-mcmxl", " nulla ", "", "IIII", "ABC", "XIIX", "-"] {
        assert_eq!(
            is_well_formed(raw),
            RomanNumeral::new(raw).is_ok(),
            "predicate disagrees for `{raw}`"
        );
    }
}

#[test]
fn every_tier_accepts_all_legal_tokens() {
    let thousands = ["", "M", "MM", "MMM"];
    let hundreds = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
    let tens = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
    let units = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

    for m in thousands {
        for c in hundreds {
            for x in tens {
                for i in units {
                    let text = format!("{m}{c}{x}{i}");
                    if text.is_empty() {
                        continue;
                    }
                    assert_eq!(validate(&text).unwrap(), text);
                }
            }
        }
    }
}
