//! French → English expansion of search criteria.

const DICTIONARY: &[(&str, &[&str])] = &[
    ("mur", &["wall", "walls"]),
    ("murs", &["wall", "walls"]),
    ("toit", &["roof", "roofing", "ceiling"]),
    ("toiture", &["roof", "roofing", "ceiling"]),
    ("porte", &["door", "doors"]),
    ("portes", &["door", "doors"]),
    ("fenêtre", &["window", "windows"]),
    ("fenêtres", &["window", "windows"]),
    ("sol", &["floor", "floors", "slab"]),
    ("plancher", &["floor", "floors", "slab"]),
    ("colonne", &["column", "columns", "pillar"]),
    ("colonnes", &["column", "columns", "pillar"]),
    ("poutre", &["beam", "beams"]),
    ("poutres", &["beam", "beams"]),
    ("escalier", &["stair", "stairs", "staircase"]),
    ("escaliers", &["stair", "stairs", "staircase"]),
    ("cloison", &["partition", "wall", "walls"]),
    ("dalle", &["slab", "floor", "floors"]),
    ("fondation", &["foundation", "footing"]),
    ("fondations", &["foundation", "footing"]),
    ("plafond", &["ceiling", "roof"]),
];

/// English translations of a French building term, if known.
#[must_use]
pub fn translations(term: &str) -> Option<&'static [&'static str]> {
    let lower = term.to_lowercase();
    DICTIONARY
        .iter()
        .find(|(key, _)| *key == lower)
        .map(|(_, english)| *english)
}

/// Ordered candidate terms for a raw criterion.
///
/// English translations come first, then the lowercased term itself. Terms
/// missing from the dictionary also get their singular/plural twin.
/// Duplicates are dropped, keeping the first occurrence.
#[must_use]
pub fn expand_terms(raw: &str) -> Vec<String> {
    let lower = raw.to_lowercase();
    let mut terms: Vec<String> = Vec::new();

    let english = translations(&lower);
    if let Some(english) = english {
        terms.extend(english.iter().map(ToString::to_string));
    }

    terms.push(lower.clone());

    if english.is_none() {
        let variant = match lower.strip_suffix('s') {
            Some(singular) => singular.to_string(),
            None => format!("{lower}s"),
        };
        terms.push(variant);
    }

    let mut deduped = Vec::with_capacity(terms.len());
    for term in terms {
        if !deduped.contains(&term) {
            deduped.push(term);
        }
    }
    deduped
}
