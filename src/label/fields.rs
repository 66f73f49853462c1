//! The closed set of nutrient fields salvaged from label text, and the
//! fully-populated result mapping.

use serde::{Deserialize, Serialize};

/// Value a field resolves to when the text carries no usable evidence.
/// Distinct from 0.0, which is reserved for an explicit "0 g" on the label.
pub const DEFAULT_FIELD_VALUE: f64 = 1.0;

/// The six fields a nutrition facts label is salvaged into.
/// The set is closed; downstream consumers rely on exactly these six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NutrientField {
    Protein,
    TotalFat,
    TotalCarbohydrate,
    DietaryFiber,
    TotalSugars,
    Servings,
}

impl NutrientField {
    /// Every field, in resolution order.
    pub const ALL: [NutrientField; 6] = [
        NutrientField::Protein,
        NutrientField::TotalFat,
        NutrientField::TotalCarbohydrate,
        NutrientField::DietaryFiber,
        NutrientField::TotalSugars,
        NutrientField::Servings,
    ];

    /// Wire name, matching the serialized field names of [`NutrientFacts`].
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientField::Protein => "protein",
            NutrientField::TotalFat => "total_fat",
            NutrientField::TotalCarbohydrate => "total_carbohydrate",
            NutrientField::DietaryFiber => "dietary_fiber",
            NutrientField::TotalSugars => "total_sugars",
            NutrientField::Servings => "servings",
        }
    }
}

/// The salvage result: one non-negative value per field, always all six.
/// Construction via `Default` starts every field at [`DEFAULT_FIELD_VALUE`],
/// so the mapping is complete before any text is examined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientFacts {
    pub protein: f64,
    pub total_fat: f64,
    pub total_carbohydrate: f64,
    pub dietary_fiber: f64,
    pub total_sugars: f64,
    pub servings: f64,
}

impl Default for NutrientFacts {
    fn default() -> Self {
        Self {
            protein: DEFAULT_FIELD_VALUE,
            total_fat: DEFAULT_FIELD_VALUE,
            total_carbohydrate: DEFAULT_FIELD_VALUE,
            dietary_fiber: DEFAULT_FIELD_VALUE,
            total_sugars: DEFAULT_FIELD_VALUE,
            servings: DEFAULT_FIELD_VALUE,
        }
    }
}

impl NutrientFacts {
    pub fn get(&self, field: NutrientField) -> f64 {
        match field {
            NutrientField::Protein => self.protein,
            NutrientField::TotalFat => self.total_fat,
            NutrientField::TotalCarbohydrate => self.total_carbohydrate,
            NutrientField::DietaryFiber => self.dietary_fiber,
            NutrientField::TotalSugars => self.total_sugars,
            NutrientField::Servings => self.servings,
        }
    }

    pub fn set(&mut self, field: NutrientField, value: f64) {
        match field {
            NutrientField::Protein => self.protein = value,
            NutrientField::TotalFat => self.total_fat = value,
            NutrientField::TotalCarbohydrate => self.total_carbohydrate = value,
            NutrientField::DietaryFiber => self.dietary_fiber = value,
            NutrientField::TotalSugars => self.total_sugars = value,
            NutrientField::Servings => self.servings = value,
        }
    }
}
