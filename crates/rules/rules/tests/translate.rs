use predicat_core::{FALLBACK_TRANSLATION, SymbolTable};
use predicat_rules::{Translator, normalize};
use proptest::prelude::*;

fn translator() -> Translator {
    Translator::builtin().expect("builtin catalogue should compile")
}

fn assert_translation(sentence: &str, rule: &str, fol: &str, symbols: &[&str]) {
    let t = translator();
    let normalized = normalize(sentence);
    let found = t
        .find_match(&normalized)
        .unwrap_or_else(|| panic!("no rule matched {sentence:?}"));
    assert_eq!(found.rule.name, rule, "wrong rule for {sentence:?}");

    let result = t.translate(sentence);
    assert_eq!(result.fol_translation, fol, "wrong translation for {sentence:?}");
    assert_eq!(result.symbols_used, symbols, "wrong symbols for {sentence:?}");
}

// -- Catalogue coverage ---------------------------------------------------

#[test]
fn universal_forms() {
    assert_translation(
        "Tous les hommes sont mortels",
        "universal-plural",
        "∀x (hommes(x) → mortels(x))",
        &["∀", "→"],
    );
    assert_translation(
        "Tout homme est mortel",
        "universal-tout",
        "∀x (homme(x) → mortel(x))",
        &["∀", "→"],
    );
    assert_translation(
        "Chaque étudiant est curieux",
        "universal-chaque",
        "∀x (étudiant(x) → curieux(x))",
        &["∀", "→"],
    );
}

#[test]
fn existential_forms() {
    assert_translation(
        "Il existe un chat noir",
        "existential-il-existe",
        "∃x (chat(x) ∧ noir(x))",
        &["∃", "∧"],
    );
    assert_translation(
        "Il y a un oiseau bleu",
        "existential-il-y-a",
        "∃x (oiseau(x) ∧ bleu(x))",
        &["∃", "∧"],
    );
    assert_translation(
        "Certains oiseaux sont noirs",
        "existential-certains",
        "∃x (oiseaux(x) ∧ noirs(x))",
        &["∃", "∧"],
    );
}

#[test]
fn implication_forms() {
    assert_translation(
        "Si pluie alors humidité",
        "implication",
        "pluie → humidité",
        &["→"],
    );
    assert_translation(
        "Si Socrate est homme alors il est mortel",
        "implication-predicates",
        "homme(socrate) → mortel(socrate)",
        &["→"],
    );
}

#[test]
fn connectives() {
    assert_translation("Pierre et Marie", "conjunction", "pierre ∧ marie", &["∧"]);
    assert_translation("Thé ou café", "disjunction", "thé ∨ café", &["∨"]);
}

#[test]
fn negations() {
    assert_translation(
        "Socrate n'est pas immortel",
        "negation",
        "¬immortel(socrate)",
        &["¬"],
    );
    assert_translation(
        "Il n'y a pas de licorne rose",
        "existential-negation",
        "¬∃x (licorne(x) ∧ rose(x))",
        &["∃", "∧", "¬"],
    );
}

#[test]
fn simple_predicate() {
    assert_translation(
        "Socrate est philosophe",
        "simple-predicate",
        "philosophe(socrate)",
        &[],
    );
}

#[test]
fn predicate_implication_explanation() {
    let result = translator().translate("Si Paul est riche alors il est heureux");
    assert_eq!(
        result.explanation,
        "Implication avec prédicats : Si paul est riche, alors paul est heureux"
    );
}

// -- Ordering -------------------------------------------------------------

#[test]
fn specific_rules_precede_catch_all() {
    let t = translator();
    for sentence in [
        "tout homme est mortel",
        "chaque enfant est joueur",
        "si paul est riche alors il est heureux",
    ] {
        let found = t.find_match(sentence).unwrap();
        assert_ne!(found.rule.name, "simple-predicate", "{sentence}");
    }
}

#[test]
fn bare_implication_precedes_conjunction() {
    let result = translator().translate("si pluie alors vent et soleil");
    assert_eq!(result.fol_translation, "pluie → vent");
}

#[test]
fn match_may_start_mid_sentence() {
    let result = translator().translate("Je crois que Socrate est philosophe aujourd'hui");
    assert_eq!(result.fol_translation, "philosophe(socrate)");
}

// -- Fallback -------------------------------------------------------------

#[test]
fn unmatched_inputs_fall_back() {
    let t = translator();
    for sentence in ["xyz", "bonjour", "?!", "", "   ", "le chat dort"] {
        let result = t.translate(sentence);
        assert_eq!(result.fol_translation, FALLBACK_TRANSLATION, "{sentence:?}");
        assert!(result.symbols_used.is_empty());
    }
}

#[test]
fn case_variants_translate_identically() {
    let t = translator();
    let upper = t.translate("TOUS LES HOMMES SONT MORTELS");
    let lower = t.translate("tous les hommes sont mortels");
    assert_eq!(upper, lower);
    assert_eq!(upper.original_sentence, "tous les hommes sont mortels");
}

// -- Properties -----------------------------------------------------------

proptest! {
    #[test]
    fn translate_is_total(sentence in ".*") {
        let result = translator().translate(&sentence);
        prop_assert_eq!(result.original_sentence, normalize(&sentence));
        prop_assert!(!result.fol_translation.is_empty());
    }

    #[test]
    fn translate_ignores_ascii_case_and_padding(
        sentence in "[a-zA-Z' ]{0,40}",
        left in "[ \t]{0,3}",
        right in "[ \t\n]{0,3}",
    ) {
        let t = translator();
        let plain = t.translate(&sentence);
        let shouted = t.translate(&format!("{left}{}{right}", sentence.to_ascii_uppercase()));
        prop_assert_eq!(plain, shouted);
    }

    #[test]
    fn symbols_used_are_exactly_the_glyphs_present(sentence in "[a-zé' ]{0,40}") {
        let table = SymbolTable::standard();
        let result = translator().translate(&sentence);
        let expected: Vec<String> = table
            .glyphs()
            .filter(|g| result.fol_translation.contains(g))
            .map(str::to_owned)
            .collect();
        prop_assert_eq!(&result.symbols_used, &expected);

        let mut unique = result.symbols_used.clone();
        unique.dedup();
        prop_assert_eq!(unique.len(), result.symbols_used.len());
    }

    #[test]
    fn plural_universal_captures_words_verbatim(
        subject in "[a-z]{1,8}",
        property in "[a-z]{1,8}",
    ) {
        let result = translator().translate(&format!("Tous les {subject} sont {property}"));
        prop_assert_eq!(
            result.fol_translation,
            format!("∀x ({subject}(x) → {property}(x))")
        );
    }
}
