//! Integration tests for Translator phrase management and translation.

use phrasebook::{FamilyResolver, PhraseError, PluralFamily, Translator, Value};

fn english() -> Translator {
    Translator::with_phrases(
        "en",
        [
            ("items", vec!["{0} item", "{0} items"]),
            ("greeting", vec!["{0}, your name is {0}!"]),
            ("pair", vec!["{0} {1}"]),
        ],
    )
    .unwrap()
}

// =========================================================================
// Construction
// =========================================================================

#[test]
fn builder_sets_culture() {
    let translator = Translator::builder().culture("pl-PL").build();
    assert_eq!(translator.culture(), "pl-PL");
    assert_eq!(translator.family(), PluralFamily::Polish);
    assert!(translator.is_empty());
}

#[test]
fn with_culture_shorthand() {
    let translator = Translator::with_culture("ar");
    assert_eq!(translator.family(), PluralFamily::Arabic);
}

#[test]
fn default_uses_ambient_culture() {
    let translator = Translator::new();
    assert_eq!(
        translator.family(),
        FamilyResolver::standard().resolve(translator.culture())
    );
}

#[test]
fn unknown_culture_uses_language_then_invariant() {
    assert_eq!(
        Translator::with_culture("ru-MD").family(),
        PluralFamily::Russian
    );
    assert_eq!(
        Translator::with_culture("qq-QQ").family(),
        PluralFamily::German
    );
}

#[test]
fn builder_accepts_custom_resolver() {
    let rows: [(PluralFamily, &[&str]); 1] = [(PluralFamily::Chinese, &["en"])];
    let resolver = FamilyResolver::from_table(rows).unwrap();
    let translator = Translator::builder()
        .culture("en")
        .resolver(resolver)
        .build();
    translator.extend([("items", ["{0} item", "{0} items"])]).unwrap();
    assert_eq!(translator.translate("items", &[Value::from(5)]), "5 item");
}

#[test]
fn with_phrases_rejects_empty_variants() {
    let result = Translator::with_phrases("en", [("empty", Vec::<String>::new())]);
    assert!(matches!(result, Err(PhraseError::InvalidPhrase { key }) if key == "empty"));
}

// =========================================================================
// Pluralization
// =========================================================================

#[test]
fn german_family_pluralization() {
    let translator = english();
    assert_eq!(translator.translate("items", &[Value::from(0)]), "0 items");
    assert_eq!(translator.translate("items", &[Value::from(1)]), "1 item");
    assert_eq!(translator.translate("items", &[Value::from(2)]), "2 items");
}

#[test]
fn any_integer_width_pluralizes() {
    let translator = english();
    assert_eq!(translator.translate("items", &[Value::from(1u8)]), "1 item");
    assert_eq!(translator.translate("items", &[Value::from(7u64)]), "7 items");
    assert_eq!(translator.translate("items", &[Value::from(1i128)]), "1 item");
    assert_eq!(translator.translate("items", &[Value::from(3usize)]), "3 items");
}

#[test]
fn float_and_string_first_argument_select_default_variant() {
    let translator = english();
    assert_eq!(translator.translate("items", &[Value::from(2.0)]), "2 item");
    assert_eq!(translator.translate("items", &[Value::from("2")]), "2 item");
}

#[test]
fn only_first_argument_selects_variant() {
    let translator = english();
    let args = [Value::from("x"), Value::from(5)];
    assert_eq!(translator.translate("items", &args), "x item");
}

#[test]
fn arabic_selects_all_six_forms() {
    let translator = Translator::with_phrases(
        "ar-EG",
        [("n", ["zero {0}", "one {0}", "two {0}", "few {0}", "many {0}", "other {0}"])],
    )
    .unwrap();
    let pick = |n: i32| translator.translate("n", &[Value::from(n)]);
    assert_eq!(pick(0), "zero 0");
    assert_eq!(pick(1), "one 1");
    assert_eq!(pick(2), "two 2");
    assert_eq!(pick(3), "few 3");
    assert_eq!(pick(11), "many 11");
    assert_eq!(pick(100), "other 100");
}

#[test]
fn missing_forms_fall_back_to_first_variant() {
    let translator = Translator::with_phrases("ar", [("n", ["{0} a", "{0} b"])]).unwrap();
    assert_eq!(translator.translate("n", &[Value::from(1)]), "1 b");
    assert_eq!(translator.translate("n", &[Value::from(100)]), "100 a");
}

#[test]
fn single_variant_phrase_ignores_count() {
    let translator = Translator::with_phrases("ru", [("n", ["{0} шт."])]).unwrap();
    assert_eq!(translator.translate("n", &[Value::from(5)]), "5 шт.");
}

#[test]
fn translate_count_prepends_count() {
    let translator =
        Translator::with_phrases("en", [("files", ["{0} file in {1}", "{0} files in {1}"])])
            .unwrap();
    assert_eq!(
        translator.translate_count("files", 1, &[Value::from("docs")]),
        "1 file in docs"
    );
    assert_eq!(
        translator.translate_count("files", 4u32, &[Value::from("docs")]),
        "4 files in docs"
    );
}

#[test]
fn translate_count_supports_fractions() {
    let translator =
        Translator::with_phrases("cs", [("kg", ["{0} kilogram", "{0} kilogramy", "{0} kilogramů"])])
            .unwrap();
    assert_eq!(translator.translate_count("kg", 2.5, &[]), "2.5 kilogramy");
    assert_eq!(translator.translate_count("kg", 4.5, &[]), "4.5 kilogramů");
}

// =========================================================================
// Interpolation and Fallbacks
// =========================================================================

#[test]
fn repeated_placeholder_reuses_argument() {
    let translator = english();
    assert_eq!(
        translator.translate("greeting", &[Value::from("X")]),
        "X, your name is X!"
    );
}

#[test]
fn missing_key_returns_key() {
    let translator = english();
    assert_eq!(translator.translate("no.such.key", &[]), "no.such.key");
    assert_eq!(
        translator.translate("no.such.key", &[Value::from(3)]),
        "no.such.key"
    );
}

#[test]
fn missing_argument_returns_raw_template() {
    let translator = english();
    assert_eq!(translator.translate("pair", &[]), "{0} {1}");
    assert_eq!(translator.translate("pair", &[Value::from("a")]), "{0} {1}");
}

#[test]
fn malformed_template_returns_raw_template() {
    let translator = Translator::with_phrases("en", [("bad", ["{name} is {"])]).unwrap();
    assert_eq!(
        translator.translate("bad", &[Value::from("x")]),
        "{name} is {"
    );
}

#[test]
fn oversized_alignment_returns_raw_template() {
    let translator = Translator::with_phrases(
        "en",
        [("right", ["[{0,70000}]"]), ("left", ["[{0,-70000}]"])],
    )
    .unwrap();
    assert_eq!(translator.translate("right", &[Value::from("x")]), "[{0,70000}]");
    assert_eq!(translator.translate("left", &[Value::from(3)]), "[{0,-70000}]");
    assert_eq!(translator.translate_count("left", 3, &[]), "[{0,-70000}]");
}

#[test]
fn escaped_braces_are_unescaped() {
    let translator = Translator::with_phrases("en", [("json", ["{{\"n\": {0}}}"])]).unwrap();
    assert_eq!(
        translator.translate("json", &[Value::from(1)]),
        "{\"n\": 1}"
    );
}

// =========================================================================
// Phrase Bank Mutation
// =========================================================================

#[test]
fn extend_then_translate_reflects_new_phrase() {
    let translator = english();
    translator.extend([("new", ["fresh"])]).unwrap();
    assert_eq!(translator.translate("new", &[]), "fresh");
}

#[test]
fn extend_overwrites_existing_key() {
    let translator = english();
    translator.extend([("items", ["{0} thing", "{0} things"])]).unwrap();
    assert_eq!(translator.translate("items", &[Value::from(2)]), "2 things");
}

#[test]
fn failed_extend_applies_nothing() {
    let translator = english();
    let result = translator.extend([("ok", vec!["fine"]), ("bad", vec![])]);
    assert!(matches!(result, Err(PhraseError::InvalidPhrase { key }) if key == "bad"));
    assert!(!translator.contains("ok"));
    assert_eq!(translator.len(), 3);
}

#[test]
fn unset_then_translate_returns_key() {
    let translator = english();
    translator.unset(["items"]);
    assert_eq!(translator.translate("items", &[Value::from(2)]), "items");
}

#[test]
fn unset_absent_key_is_noop() {
    let translator = english();
    translator.unset(["absent", "also.absent"]);
    assert_eq!(translator.len(), 3);
}

#[test]
fn clear_removes_everything() {
    let translator = english();
    translator.clear();
    assert!(translator.is_empty());
    assert_eq!(translator.translate("greeting", &[]), "greeting");
}

#[test]
fn replace_swaps_whole_bank() {
    let translator = english();
    translator.replace([("only", ["one"])]).unwrap();
    assert_eq!(translator.len(), 1);
    assert!(!translator.contains("items"));
    assert_eq!(translator.translate("only", &[]), "one");
}

#[test]
fn failed_replace_keeps_existing_phrases() {
    let translator = english();
    assert!(translator.replace([("x", Vec::<&str>::new())]).is_err());
    assert_eq!(translator.len(), 3);
}

#[test]
fn phrases_snapshot_is_ordered_and_detached() {
    let translator = english();
    let snapshot = translator.phrases();
    let keys: Vec<&str> = snapshot.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["greeting", "items", "pair"]);
    assert_eq!(snapshot["items"].len(), 2);

    translator.clear();
    assert_eq!(snapshot.len(), 3);
}

#[test]
fn get_returns_variants() {
    let translator = english();
    let variants = translator.get("items").unwrap();
    assert_eq!(variants[1], "{0} items");
    assert!(translator.get("missing").is_none());
}

// =========================================================================
// Suggestions
// =========================================================================

#[test]
fn suggest_finds_close_keys() {
    let translator = english();
    assert_eq!(translator.suggest("itmes"), vec!["items".to_string()]);
    assert!(translator.suggest("zzzzzzzz").is_empty());
}
