use serde::{Deserialize, Serialize};

/// An illustrative sentence with its display translation.
///
/// These are shown to users as documentation. The display forms are
/// singularized and capitalized by hand, so they do not match what the
/// translator produces byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Example {
    /// The French sentence.
    #[serde(rename = "phrase")]
    #[cfg_attr(feature = "openapi", schema(example = "Tous les hommes sont mortels"))]
    pub sentence: String,
    /// Its first-order logic rendering.
    #[serde(rename = "traduction")]
    #[cfg_attr(feature = "openapi", schema(example = "∀x (Homme(x) → Mortel(x))"))]
    pub translation: String,
    /// A plain-language reading of the formula.
    #[serde(rename = "explication")]
    pub explanation: String,
}

impl Example {
    fn new(sentence: &str, translation: &str, explanation: &str) -> Self {
        Self {
            sentence: sentence.to_owned(),
            translation: translation.to_owned(),
            explanation: explanation.to_owned(),
        }
    }
}

/// The fixed list of examples served to clients.
pub fn canonical_examples() -> Vec<Example> {
    vec![
        Example::new(
            "Tous les hommes sont mortels",
            "∀x (Homme(x) → Mortel(x))",
            "Pour tout x, si x est un homme, alors x est mortel",
        ),
        Example::new(
            "Il existe un chat noir",
            "∃x (Chat(x) ∧ Noir(x))",
            "Il existe un x tel que x est un chat et x est noir",
        ),
        Example::new(
            "Si Paul est intelligent alors il réussit",
            "Intelligent(Paul) → Réussit(Paul)",
            "Si Paul est intelligent, alors Paul réussit",
        ),
        Example::new(
            "Socrate est philosophe",
            "Philosophe(Socrate)",
            "Socrate a la propriété d'être philosophe",
        ),
        Example::new(
            "Certains oiseaux sont noirs",
            "∃x (Oiseau(x) ∧ Noir(x))",
            "Il existe des x tels que x est un oiseau et x est noir",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_examples_in_order() {
        let examples = canonical_examples();
        assert_eq!(examples.len(), 5);
        assert_eq!(examples[0].sentence, "Tous les hommes sont mortels");
        assert_eq!(examples[4].sentence, "Certains oiseaux sont noirs");
    }

    #[test]
    fn serializes_with_french_keys() {
        let example = &canonical_examples()[3];
        let json = serde_json::to_value(example).unwrap();
        assert_eq!(json["phrase"], "Socrate est philosophe");
        assert_eq!(json["traduction"], "Philosophe(Socrate)");
        assert_eq!(
            json["explication"],
            "Socrate a la propriété d'être philosophe"
        );
    }
}
