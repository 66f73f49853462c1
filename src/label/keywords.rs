//! Per-field keyword tables and the locator that finds which line names a
//! field.
//!
//! The tables are data, not control flow: adding a new label phrasing or
//! another language means appending a string here. Lists include Spanish
//! equivalents and misreadings that real OCR output produces often enough to
//! be worth matching ("total fal", "diary tiber").

use super::fields::NutrientField;

/// Ordered by priority; the first synonym found on a line wins.
const PROTEIN_TERMS: &[&str] = &["protein", "proteínas", "proteína"];

const TOTAL_FAT_TERMS: &[&str] = &["total fat", "total fal", "fat", "grasa total", "grasa"];

const TOTAL_CARBOHYDRATE_TERMS: &[&str] = &[
    "total carbohydrate",
    "carbohydrate",
    "carbohidrato total",
    "carbohidrato",
];

const DIETARY_FIBER_TERMS: &[&str] = &[
    "dietary fiber",
    "fiber",
    "fibra dietética",
    "fibra",
    "diary tiber",
    "deary her",
];

const TOTAL_SUGARS_TERMS: &[&str] = &["total sugars", "azúcares totales", "sugars", "azúcares"];

const SERVINGS_TERMS: &[&str] = &["servings per container", "raciones por envase"];

/// Variants that authoritatively name the total-sugars figure. Searched
/// across every line before the broader sugar synonyms, so a bare "sugars"
/// inside an earlier "added sugars" sub-line cannot shadow a "total sugars"
/// entry appearing later.
const PRIMARY_SUGAR_TERMS: &[&str] = &["total sugars", "azúcares totales"];

/// Full synonym list for a field, in priority order.
pub fn synonyms(field: NutrientField) -> &'static [&'static str] {
    match field {
        NutrientField::Protein => PROTEIN_TERMS,
        NutrientField::TotalFat => TOTAL_FAT_TERMS,
        NutrientField::TotalCarbohydrate => TOTAL_CARBOHYDRATE_TERMS,
        NutrientField::DietaryFiber => DIETARY_FIBER_TERMS,
        NutrientField::TotalSugars => TOTAL_SUGARS_TERMS,
        NutrientField::Servings => SERVINGS_TERMS,
    }
}

/// Where a field's label was found: line index plus the synonym that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordHit {
    pub line: usize,
    pub term: &'static str,
}

/// Find the line naming `field` among normalized (lowercased, trimmed) lines.
///
/// First line in document order containing any synonym wins; within a line,
/// synonym list order breaks ties. Sugars get a full-document pass over the
/// primary terms before the broad list is tried at all.
pub fn locate(lines: &[String], field: NutrientField) -> Option<KeywordHit> {
    if field == NutrientField::TotalSugars {
        if let Some(hit) = first_containing(lines, PRIMARY_SUGAR_TERMS) {
            return Some(hit);
        }
    }
    first_containing(lines, synonyms(field))
}

fn first_containing(lines: &[String], terms: &[&'static str]) -> Option<KeywordHit> {
    for (idx, line) in lines.iter().enumerate() {
        for &term in terms {
            if line.contains(term) {
                return Some(KeywordHit { line: idx, term });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn finds_exact_keyword() {
        let doc = lines(&["calories 230", "total fat 8g", "protein 3g"]);
        let hit = locate(&doc, NutrientField::TotalFat).unwrap();
        assert_eq!(hit.line, 1);
        assert_eq!(hit.term, "total fat");
    }

    #[test]
    fn matches_ocr_misreading() {
        let doc = lines(&["total fal 8g"]);
        assert_eq!(locate(&doc, NutrientField::TotalFat).unwrap().term, "total fal");

        let doc = lines(&["diary tiber 4g"]);
        assert_eq!(locate(&doc, NutrientField::DietaryFiber).unwrap().term, "diary tiber");
    }

    #[test]
    fn matches_spanish_synonyms() {
        let doc = lines(&["grasa total 10g", "proteína 6g", "raciones por envase 4"]);
        assert_eq!(locate(&doc, NutrientField::TotalFat).unwrap().line, 0);
        assert_eq!(locate(&doc, NutrientField::Protein).unwrap().line, 1);
        assert_eq!(locate(&doc, NutrientField::Servings).unwrap().line, 2);
    }

    #[test]
    fn primary_sugar_terms_beat_earlier_broad_match() {
        let doc = lines(&["includes added sugars 5g", "sodium 160mg", "total sugars 12g"]);
        let hit = locate(&doc, NutrientField::TotalSugars).unwrap();
        assert_eq!(hit.line, 2);
        assert_eq!(hit.term, "total sugars");
    }

    #[test]
    fn broad_sugar_list_used_when_no_primary_term() {
        let doc = lines(&["sugars 9g"]);
        let hit = locate(&doc, NutrientField::TotalSugars).unwrap();
        assert_eq!(hit.line, 0);
        assert_eq!(hit.term, "sugars");
    }

    #[test]
    fn synonym_order_breaks_ties_within_a_line() {
        // "dietary fiber" contains "fiber"; the longer, earlier-listed
        // synonym must be the one reported.
        let doc = lines(&["dietary fiber 3g"]);
        assert_eq!(locate(&doc, NutrientField::DietaryFiber).unwrap().term, "dietary fiber");
    }

    #[test]
    fn earliest_line_wins() {
        let doc = lines(&["fat 1g", "total fat 8g"]);
        let hit = locate(&doc, NutrientField::TotalFat).unwrap();
        assert_eq!(hit.line, 0);
        assert_eq!(hit.term, "fat");
    }

    #[test]
    fn absent_keyword_is_none() {
        let doc = lines(&["calories 230", "sodium 160mg"]);
        assert!(locate(&doc, NutrientField::Protein).is_none());
        assert!(locate(&doc, NutrientField::Servings).is_none());
    }
}
