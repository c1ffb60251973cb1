use chartable::latex::{texmath, unimath};
use chartable::{
    block, codepoint_to_bidi_class, codepoint_to_block, codepoint_to_category,
    codepoint_to_combining_class, codepoint_to_script, get_aliases, get_name,
    get_label, get_name_or_label, name_to_block, name_to_codepoint, script, typst,
    GeneralCategory, LookupError, MAX_CODEPOINT, NO_BLOCK, UNKNOWN_SCRIPT,
};
use proptest::prelude::*;

fn codepoint_strategy() -> BoxedStrategy<u32> {
    prop_oneof![
        0u32..0x80,
        0x80u32..0x3000,
        0u32..=0x10FFFF,
        0x10FFF0u32..0x110010,
    ]
    .boxed()
}

fn separator_strategy() -> BoxedStrategy<&'static str> {
    prop_oneof![Just("_"), Just("-"), Just(" "), Just("")].boxed()
}

fn respell(name: &str, separator: &str, upper: bool) -> String {
    let spelled = name.replace('_', separator);
    if upper {
        spelled.to_uppercase()
    } else {
        spelled.to_lowercase()
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn every_lookup_answers_without_panicking(cp in codepoint_strategy()) {
        let _ = codepoint_to_category(cp);
        let _ = codepoint_to_combining_class(cp);
        let _ = codepoint_to_script(cp);
        let _ = codepoint_to_block(cp);
        let _ = codepoint_to_bidi_class(cp);
        let _ = get_name_or_label(cp);
        let _ = get_aliases(cp);
        let _ = texmath::codepoint_to_notations(cp);
        let _ = typst::codepoint_to_notations(cp);
    }

    #[test]
    fn block_sentinel_matches_record_form(cp in codepoint_strategy()) {
        match block::codepoint_to_block_record(cp) {
            Ok(record) => {
                prop_assert!(record.start <= cp && cp <= record.end);
                prop_assert_eq!(codepoint_to_block(cp), record.name);
            }
            Err(err) => {
                prop_assert_eq!(err, LookupError::UnknownCodepoint(cp));
                prop_assert_eq!(codepoint_to_block(cp), NO_BLOCK);
            }
        }
    }

    #[test]
    fn script_ranges_cover_forward_lookup(cp in codepoint_strategy()) {
        let code = codepoint_to_script(cp);
        let (ranges, _) = script::script_to_codepoint_ranges(code).unwrap();
        if code == UNKNOWN_SCRIPT {
            prop_assert!(ranges.is_empty());
        } else {
            prop_assert!(ranges.iter().any(|&(start, end)| start <= cp && cp <= end));
        }
    }

    #[test]
    fn latin_extended_a_alternates_case(offset in 0u32..0x38) {
        let cp = 0x0100 + offset;
        let expected = if cp % 2 == 0 {
            GeneralCategory::UppercaseLetter
        } else {
            GeneralCategory::LowercaseLetter
        };
        prop_assert_eq!(codepoint_to_category(cp), expected);
    }

    #[test]
    fn names_round_trip(cp in codepoint_strategy()) {
        if let Ok(name) = get_name(cp) {
            prop_assert_eq!(name_to_codepoint(&name), Ok(cp));
            prop_assert_eq!(name_to_codepoint(&name.to_lowercase()), Ok(cp));
        }
    }

    #[test]
    fn hangul_syllables_round_trip(cp in 0xAC00u32..=0xD7A3) {
        let name = get_name(cp).unwrap();
        prop_assert!(name.starts_with("HANGUL SYLLABLE "));
        prop_assert_eq!(name_to_codepoint(&name), Ok(cp));
    }

    #[test]
    fn math_notations_resolve_back(cp in 0u32..0x2A00) {
        for notation in texmath::codepoint_to_notations(cp) {
            let (_, back) = texmath::notation_to_mathtype_codepoint(notation).unwrap();
            prop_assert_eq!(back, cp);
        }
        for notation in unimath::codepoint_to_notations(cp) {
            let (_, back) = unimath::notation_to_mathtype_codepoint(&format!("\\{}", notation)).unwrap();
            prop_assert_eq!(back, cp);
        }
    }

    #[test]
    fn typst_notations_resolve_back(c in any::<char>()) {
        let cp = u32::from(c);
        match typst::codepoint_to_notations(cp) {
            Ok(notations) => {
                prop_assert!(!notations.is_empty());
                for notation in notations {
                    prop_assert_eq!(typst::notation_to_codepoints(notation), Ok(vec![cp]));
                }
            }
            Err(err) => prop_assert_eq!(err, LookupError::UnknownCodepoint(cp)),
        }
    }

    #[test]
    fn named_code_points_are_assigned_and_unlabelled(cp in codepoint_strategy()) {
        if get_name(cp).is_ok() {
            prop_assert_ne!(codepoint_to_category(cp), GeneralCategory::Unassigned);
            prop_assert_eq!(get_label(cp), None);
        } else if cp <= MAX_CODEPOINT {
            prop_assert!(get_label(cp).is_some());
        }
    }

    #[test]
    fn block_names_match_loosely(
        index in 0usize..block::get_list().len(),
        separator in separator_strategy(),
        upper in any::<bool>(),
    ) {
        let name = block::get_list()[index];
        let spelled = respell(name, separator, upper);
        prop_assert_eq!(name_to_block(&spelled).map(|b| b.name), Ok(name));
    }

    #[test]
    fn script_names_match_loosely(
        index in 0usize..script::get_list().len(),
        separator in separator_strategy(),
        upper in any::<bool>(),
    ) {
        let code = script::get_list()[index];
        let long = script::short_name_to_long_name(code).unwrap();
        let spelled = respell(long, separator, upper);
        prop_assert_eq!(script::name_to_script(&spelled).map(|s| s.code), Ok(code));
        prop_assert_eq!(script::long_name_to_short_name(&spelled), Ok(code));
    }
}

#[test]
fn scenario_latin_capital_a() {
    assert_eq!(codepoint_to_category(0x41), GeneralCategory::UppercaseLetter);
    assert_eq!(codepoint_to_combining_class(0x41), 0);
    assert_eq!(codepoint_to_script(0x41), "latn");
    assert_eq!(codepoint_to_block(0x41), "Basic_Latin");
    assert_eq!(codepoint_to_bidi_class(0x41).map(|b| b.short_name()), Ok("L"));
    assert_eq!(get_name(0x41).unwrap(), "LATIN CAPITAL LETTER A");
    assert!(get_aliases(0x41).is_empty());
}

#[test]
fn scenario_combining_acute() {
    assert_eq!(codepoint_to_category(0x0301), GeneralCategory::NonspacingMark);
    assert_eq!(codepoint_to_combining_class(0x0301), 230);
    assert_eq!(codepoint_to_script(0x0301), "zinh");
    assert_eq!(codepoint_to_block(0x0301), "Combining_Diacritical_Marks");
}

#[test]
fn scenario_control_character() {
    assert_eq!(codepoint_to_category(0x0A), GeneralCategory::Control);
    assert!(get_name(0x0A).is_err());
    assert_eq!(get_name_or_label(0x0A).unwrap(), "<control-000A>");
    assert_eq!(name_to_codepoint("LINE FEED"), Ok(0x0A));
    assert_eq!(name_to_codepoint("lf"), Ok(0x0A));
}

#[test]
fn scenario_less_than_or_equal() {
    assert_eq!(codepoint_to_category(0x2264), GeneralCategory::MathSymbol);
    assert_eq!(texmath::codepoint_to_notations(0x2264), &["le", "leq"]);
    assert_eq!(unimath::codepoint_to_notations(0x2264), &["leq"]);
    assert_eq!(typst::codepoint_to_notations(0x2264), Ok(&["lt.eq", "<="][..]));
    assert_eq!(
        typst::codepoint_to_notations(0x41),
        Err(LookupError::UnknownCodepoint(0x41))
    );
    assert_eq!(chartable::latex::notation_to_codepoint("\\le"), Ok(0x2264));
}

#[test]
fn scenario_unassigned_code_point() {
    let cp = 0x0378;
    assert_eq!(codepoint_to_category(cp), GeneralCategory::Unassigned);
    assert_eq!(codepoint_to_script(cp), UNKNOWN_SCRIPT);
    assert_eq!(codepoint_to_block(cp), "Greek_And_Coptic");
    assert_eq!(get_name(cp), Err(LookupError::UnknownCodepoint(cp)));
    assert_eq!(get_name_or_label(cp).unwrap(), "<reserved-0378>");
}

#[test]
fn scenario_latin_small_letter_turned_a() {
    let cp = 0x0250;
    assert_eq!(codepoint_to_category(cp), GeneralCategory::LowercaseLetter);
    assert_eq!(codepoint_to_script(cp), "latn");
    assert_eq!(codepoint_to_block(cp), "IPA_Extensions");
    assert_eq!(codepoint_to_bidi_class(cp).map(|b| b.short_name()), Ok("L"));
    assert_eq!(get_name(cp).unwrap(), "LATIN SMALL LETTER TURNED A");
    assert_eq!(get_name_or_label(cp).unwrap(), "LATIN SMALL LETTER TURNED A");
    assert_eq!(get_label(cp), None);
}

#[test]
fn scenario_thai_ko_kai() {
    let cp = 0x0E01;
    assert_eq!(codepoint_to_category(cp), GeneralCategory::OtherLetter);
    assert_eq!(codepoint_to_script(cp), "thai");
    assert_eq!(codepoint_to_block(cp), "Thai");
    assert_eq!(get_name(cp).unwrap(), "THAI CHARACTER KO KAI");
    assert_eq!(get_label(cp), None);
}

#[test]
fn scenario_hebrew_accent_etnahta() {
    let cp = 0x0591;
    assert_eq!(codepoint_to_category(cp), GeneralCategory::NonspacingMark);
    assert_eq!(codepoint_to_combining_class(cp), 220);
    assert_eq!(codepoint_to_script(cp), "hebr");
    assert_eq!(codepoint_to_bidi_class(cp).map(|b| b.short_name()), Ok("NSM"));
    assert_eq!(get_name(cp).unwrap(), "HEBREW ACCENT ETNAHTA");
}

#[test]
fn every_script_is_listed() {
    let list = script::get_list();
    assert_eq!(list.len(), 163);
    for code in ["latn", "thai", "hrkt", "toto", "zinh", "zyyy", UNKNOWN_SCRIPT] {
        assert!(list.contains(&code), "{}", code);
    }
}

#[test]
fn tables_agree_on_assigned_code_points() {
    for cp in 0..=MAX_CODEPOINT {
        let category = codepoint_to_category(cp);
        if category != GeneralCategory::Unassigned {
            assert!(codepoint_to_bidi_class(cp).is_ok(), "U+{:04X} has no bidi class", cp);
            assert_ne!(codepoint_to_block(cp), NO_BLOCK, "U+{:04X} has no block", cp);
            continue;
        }
        assert_eq!(codepoint_to_script(cp), UNKNOWN_SCRIPT, "U+{:04X} has a script", cp);
        assert_eq!(codepoint_to_combining_class(cp), 0, "U+{:04X} has a class", cp);
        assert!(get_name(cp).is_err(), "U+{:04X} has a name", cp);
    }
}
