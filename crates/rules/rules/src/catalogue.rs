//! The compiled-in French rule catalogue.
//!
//! Order is priority. Specific phrasings come before the generic ones that
//! would also match them, and the bare `X est Y` predicate rule, which
//! matches nearly any clause containing "est", comes last.
//!
//! `\w` is Unicode-aware and also matches combining marks, so a word typed
//! in decomposed form (`e` followed by U+0301) is captured whole.

use crate::ir::rule::{RuleKind, RuleSpec};

const UNIVERSAL_TEMPLATE: &str = "∀x ({predicate1}(x) → {predicate2}(x))";
const EXISTENTIAL_TEMPLATE: &str = "∃x ({predicate1}(x) ∧ {predicate2}(x))";
const UNIVERSAL_EXPLANATION: &str = "Quantification universelle : Pour tout x, si x est un {predicate1}, alors x est {predicate2}";
const EXISTENTIAL_EXPLANATION: &str = "Quantification existentielle : Il existe un x tel que x est {predicate1} et x est {predicate2}";

/// Declarative specs of the built-in rules, in priority order.
#[allow(clippy::too_many_lines)]
pub fn builtin_specs() -> Vec<RuleSpec> {
    vec![
        // Universal quantification
        RuleSpec::new(
            "universal-plural",
            RuleKind::Universal,
            r"tous? les? (\w+) sont (\w+)",
            UNIVERSAL_TEMPLATE,
            UNIVERSAL_EXPLANATION,
        )
        .with_description("tous les X sont Y"),
        RuleSpec::new(
            "universal-tout",
            RuleKind::Universal,
            r"tout (\w+) est (\w+)",
            UNIVERSAL_TEMPLATE,
            UNIVERSAL_EXPLANATION,
        )
        .with_description("tout X est Y"),
        RuleSpec::new(
            "universal-chaque",
            RuleKind::Universal,
            r"chaque (\w+) est (\w+)",
            UNIVERSAL_TEMPLATE,
            "Quantification universelle : Pour chaque x, si x est un {predicate1}, alors x est {predicate2}",
        )
        .with_description("chaque X est Y"),
        // Existential quantification
        RuleSpec::new(
            "existential-il-existe",
            RuleKind::Existential,
            r"il existe un (\w+) (\w+)",
            EXISTENTIAL_TEMPLATE,
            EXISTENTIAL_EXPLANATION,
        )
        .with_description("il existe un X Y"),
        RuleSpec::new(
            "existential-il-y-a",
            RuleKind::Existential,
            r"il y a un (\w+) (\w+)",
            EXISTENTIAL_TEMPLATE,
            EXISTENTIAL_EXPLANATION,
        )
        .with_description("il y a un X Y"),
        RuleSpec::new(
            "existential-certains",
            RuleKind::Existential,
            r"certains (\w+) sont (\w+)",
            EXISTENTIAL_TEMPLATE,
            "Quantification existentielle : Il existe des x tels que x est {predicate1} et x est {predicate2}",
        )
        .with_description("certains X sont Y"),
        // Implication
        RuleSpec::new(
            "implication",
            RuleKind::Implication,
            r"si (\w+) alors (\w+)",
            "{predicate1} → {predicate2}",
            "Implication logique : Si {predicate1} alors {predicate2}",
        )
        .with_description("si X alors Y"),
        RuleSpec::new(
            "implication-predicates",
            RuleKind::Implication,
            r"si (\w+) est (\w+) alors il est (\w+)",
            "{predicate2}({predicate1}) → {predicate3}({predicate1})",
            "Implication avec prédicats : Si {predicate1} est {predicate2}, alors {predicate1} est {predicate3}",
        )
        .with_description("si X est Y alors il est Z"),
        // Connectives
        RuleSpec::new(
            "conjunction",
            RuleKind::Conjunction,
            r"(\w+) et (\w+)",
            "{predicate1} ∧ {predicate2}",
            "Conjonction logique : {predicate1} et {predicate2}",
        )
        .with_description("X et Y"),
        RuleSpec::new(
            "disjunction",
            RuleKind::Disjunction,
            r"(\w+) ou (\w+)",
            "{predicate1} ∨ {predicate2}",
            "Disjonction logique : {predicate1} ou {predicate2}",
        )
        .with_description("X ou Y"),
        // Negation
        RuleSpec::new(
            "negation",
            RuleKind::Negation,
            r"(\w+) n'est pas (\w+)",
            "¬{predicate2}({predicate1})",
            "Négation : {predicate1} n'est pas {predicate2}",
        )
        .with_description("X n'est pas Y"),
        RuleSpec::new(
            "existential-negation",
            RuleKind::ExistentialNegation,
            r"il n'y a pas de (\w+) (\w+)",
            "¬∃x ({predicate1}(x) ∧ {predicate2}(x))",
            "Négation existentielle : Il n'existe pas de x tel que x est {predicate1} et {predicate2}",
        )
        .with_description("il n'y a pas de X Y"),
        // Catch-all
        RuleSpec::new(
            "simple-predicate",
            RuleKind::Predicate,
            r"(\w+) est (\w+)",
            "{predicate2}({predicate1})",
            "Prédicat simple : {predicate1} a la propriété {predicate2}",
        )
        .with_description("X est Y"),
    ]
}
