use crate::theme::calendar::{BREAKFAST_STYLE, DINNER_STYLE, LUNCH_STYLE, SNACK_STYLE};
use ratatui::style::Style;

/// Number of recipes listed for every diet in the catalog
pub(crate) const RECIPES_PER_DIET: usize = 4;

/// Catalog key used when a diet has no recipes of its own
pub(crate) const DEFAULT_DIET_KEY: &str = "balanced";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub(crate) fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        }
    }

    pub(crate) fn style(self) -> Style {
        match self {
            MealSlot::Breakfast => BREAKFAST_STYLE,
            MealSlot::Lunch => LUNCH_STYLE,
            MealSlot::Dinner => DINNER_STYLE,
            MealSlot::Snack => SNACK_STYLE,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Recipe {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) calories: u32,
    pub(crate) protein: u32,
    pub(crate) carbs: u32,
    pub(crate) fats: u32,
    pub(crate) prep_time: &'static str,
    pub(crate) servings: u32,
    pub(crate) slot: MealSlot,
}

macro_rules! recipe {
    ($id:literal, $name:literal, $cal:literal, $p:literal, $c:literal, $f:literal, $prep:literal, $slot:ident) => {
        Recipe {
            id: $id,
            name: $name,
            calories: $cal,
            protein: $p,
            carbs: $c,
            fats: $f,
            prep_time: $prep,
            servings: 1,
            slot: MealSlot::$slot,
        }
    };
}

static BALANCED: [Recipe; RECIPES_PER_DIET] = [
    recipe!("1", "Oatmeal with fruit and nuts", 350, 12, 45, 15, "10 min", Breakfast),
    recipe!("2", "Grilled chicken with quinoa", 450, 35, 40, 12, "25 min", Lunch),
    recipe!("3", "Salmon with steamed vegetables", 400, 30, 15, 25, "20 min", Dinner),
    recipe!("4", "Greek yogurt with almonds", 200, 15, 12, 10, "5 min", Snack),
];

static KETO: [Recipe; RECIPES_PER_DIET] = [
    recipe!("5", "Scrambled eggs with avocado", 380, 18, 8, 32, "8 min", Breakfast),
    recipe!("6", "Chicken salad with olive oil", 420, 32, 6, 30, "15 min", Lunch),
    recipe!("7", "Salmon with broccoli and butter", 450, 35, 8, 32, "18 min", Dinner),
    recipe!("8", "Mixed nuts", 180, 6, 4, 16, "0 min", Snack),
];

static VEGAN: [Recipe; RECIPES_PER_DIET] = [
    recipe!("9", "Acai bowl with granola", 320, 8, 55, 12, "10 min", Breakfast),
    recipe!("10", "Lentil curry with brown rice", 380, 18, 65, 8, "30 min", Lunch),
    recipe!("11", "Stir-fried tofu with vegetables", 350, 20, 25, 20, "20 min", Dinner),
    recipe!("12", "Hummus with vegetables", 150, 6, 15, 8, "5 min", Snack),
];

static MEDITERRANEAN: [Recipe; RECIPES_PER_DIET] = [
    recipe!("13", "Avocado and tomato toast", 280, 8, 25, 18, "8 min", Breakfast),
    recipe!("14", "Greek salad with fish", 420, 28, 20, 25, "15 min", Lunch),
    recipe!("15", "Baked fish with olives", 380, 32, 12, 22, "25 min", Dinner),
    recipe!("16", "Olives and feta cheese", 170, 8, 5, 14, "2 min", Snack),
];

static CATALOG: &[(&str, &[Recipe; RECIPES_PER_DIET])] = &[
    (DEFAULT_DIET_KEY, &BALANCED),
    ("keto", &KETO),
    ("vegan", &VEGAN),
    ("mediterranean", &MEDITERRANEAN),
];

/// Returns the recipes listed under the diet key `key`.
///
/// Keys are matched exactly.  Any key without an entry of its own (including
/// several diets that the form offers) gets the recipes for
/// [`DEFAULT_DIET_KEY`] instead; this is not treated as an error.
pub(crate) fn lookup(key: &str) -> &'static [Recipe; RECIPES_PER_DIET] {
    if let Some(&(_, recipes)) = CATALOG.iter().find(|&&(k, _)| k == key) {
        recipes
    } else {
        tracing::debug!(
            diet = key,
            fallback = DEFAULT_DIET_KEY,
            "no recipes listed for diet; using fallback"
        );
        &BALANCED
    }
}
