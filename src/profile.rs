use crate::catalog::{lookup, Recipe, RECIPES_PER_DIET};
use std::fmt;
use std::num::NonZeroU32;

/// The diets offered by the form, in the order they are offered
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum DietCategory {
    Balanced,
    Keto,
    Mediterranean,
    Vegan,
    Vegetarian,
    Paleo,
    Dash,
}

impl DietCategory {
    pub(crate) const ALL: [DietCategory; 7] = [
        DietCategory::Balanced,
        DietCategory::Keto,
        DietCategory::Mediterranean,
        DietCategory::Vegan,
        DietCategory::Vegetarian,
        DietCategory::Paleo,
        DietCategory::Dash,
    ];

    /// The string under which the diet's recipes are looked up
    pub(crate) fn key(self) -> &'static str {
        match self {
            DietCategory::Balanced => "balanced",
            DietCategory::Keto => "keto",
            DietCategory::Mediterranean => "mediterranean",
            DietCategory::Vegan => "vegan",
            DietCategory::Vegetarian => "vegetarian",
            DietCategory::Paleo => "paleo",
            DietCategory::Dash => "dash",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            DietCategory::Balanced => "Balanced",
            DietCategory::Keto => "Keto",
            DietCategory::Mediterranean => "Mediterranean",
            DietCategory::Vegan => "Vegan",
            DietCategory::Vegetarian => "Vegetarian",
            DietCategory::Paleo => "Paleo",
            DietCategory::Dash => "DASH",
        }
    }

    pub(crate) fn recipes(self) -> &'static [Recipe; RECIPES_PER_DIET] {
        lookup(self.key())
    }

    fn index(self) -> usize {
        DietCategory::ALL
            .iter()
            .position(|&d| d == self)
            .expect("every diet should be listed in ALL")
    }

    /// The option after this one, wrapping around
    pub(crate) fn next(self) -> DietCategory {
        DietCategory::ALL[(self.index() + 1) % DietCategory::ALL.len()]
    }

    /// The option before this one, wrapping around
    pub(crate) fn previous(self) -> DietCategory {
        let len = DietCategory::ALL.len();
        DietCategory::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for DietCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A complete set of nutrition targets as submitted through the form
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct NutritionProfile {
    pub(crate) age: NonZeroU32,
    /// Body weight in kilograms
    pub(crate) weight: NonZeroU32,
    pub(crate) daily_calories: NonZeroU32,
    pub(crate) protein_grams: NonZeroU32,
    pub(crate) carb_grams: NonZeroU32,
    pub(crate) fat_grams: NonZeroU32,
    pub(crate) diet: DietCategory,
}

impl NutritionProfile {
    /// One-line description shown above the meal calendar
    pub(crate) fn summary(&self) -> String {
        format!(
            "{} diet • {} cal/day • {}g protein",
            self.diet, self.daily_calories, self.protein_grams
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_forwards() {
        let mut diet = DietCategory::Balanced;
        let mut seen = Vec::new();
        for _ in 0..DietCategory::ALL.len() {
            seen.push(diet);
            diet = diet.next();
        }
        assert_eq!(seen, DietCategory::ALL);
        assert_eq!(diet, DietCategory::Balanced);
    }

    #[test]
    fn test_cycle_backwards() {
        assert_eq!(DietCategory::Balanced.previous(), DietCategory::Dash);
        assert_eq!(DietCategory::Keto.previous(), DietCategory::Balanced);
        assert_eq!(DietCategory::Dash.next(), DietCategory::Balanced);
    }

    #[test]
    fn test_unlisted_diets_use_balanced_recipes() {
        let balanced = DietCategory::Balanced.recipes();
        for diet in [
            DietCategory::Vegetarian,
            DietCategory::Paleo,
            DietCategory::Dash,
        ] {
            assert_eq!(diet.recipes(), balanced, "{diet:?}");
        }
        assert_ne!(DietCategory::Keto.recipes(), balanced);
        assert_ne!(DietCategory::Vegan.recipes(), balanced);
        assert_ne!(DietCategory::Mediterranean.recipes(), balanced);
    }

    #[test]
    fn test_summary() {
        let profile = NutritionProfile {
            age: NonZeroU32::new(25).unwrap(),
            weight: NonZeroU32::new(70).unwrap(),
            daily_calories: NonZeroU32::new(2000).unwrap(),
            protein_grams: NonZeroU32::new(120).unwrap(),
            carb_grams: NonZeroU32::new(200).unwrap(),
            fat_grams: NonZeroU32::new(60).unwrap(),
            diet: DietCategory::Keto,
        };
        assert_eq!(profile.summary(), "Keto diet • 2000 cal/day • 120g protein");
    }
}
