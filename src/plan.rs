use crate::catalog::{Recipe, RECIPES_PER_DIET};
use crate::profile::NutritionProfile;
use std::num::NonZeroUsize;
use thiserror::Error;
use time::{Date, Weekday, Weekday::*};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) const MEALS_PER_DAY: usize = 3;

const WEEKDAYS: [Weekday; DAYS_IN_WEEK] = [
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];

/// Returns the indices into a list of `len` recipes of the meals shown on
/// weekday `day` of the week `week_offset` weeks away from the current one.
///
/// The first index is `(day + 7 * week_offset) mod len`, counting days from
/// Sunday = 0 and always taking the non-negative remainder; the other two
/// follow it cyclically.
pub(crate) fn meal_indices(
    len: NonZeroUsize,
    week_offset: i64,
    day: Weekday,
) -> [usize; MEALS_PER_DAY] {
    // i128 holds 7 * i64::MAX without overflowing
    let modulus = i128::try_from(len.get()).expect("usize should fit in i128");
    let day = i128::from(day.number_days_from_sunday());
    let base = (day + i128::from(week_offset) * 7).rem_euclid(modulus);
    let base = usize::try_from(base).expect("remainder should be less than len");
    let len = len.get();
    [base, (base + 1) % len, (base + 2) % len]
}

/// Returns the meals shown on weekday `day` of the week `week_offset` weeks
/// away from the current one
pub(crate) fn day_meals<T, const N: usize>(
    recipes: &[T; N],
    week_offset: i64,
    day: Weekday,
) -> [&T; MEALS_PER_DAY] {
    let len = const {
        match NonZeroUsize::new(N) {
            Some(len) => len,
            None => panic!("cannot plan meals from an empty recipe list"),
        }
    };
    meal_indices(len, week_offset, day).map(|i| &recipes[i])
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DayPlan {
    pub(crate) weekday: Weekday,
    /// `None` if the day lies outside the range of representable dates
    pub(crate) date: Option<Date>,
    pub(crate) meals: [&'static Recipe; MEALS_PER_DAY],
}

/// A submitted profile together with the week of meals currently on display
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MealPlan {
    profile: NutritionProfile,
    recipes: &'static [Recipe; RECIPES_PER_DIET],
    today: Date,
    week_offset: i64,
}

impl MealPlan {
    pub(crate) fn new(profile: NutritionProfile, today: Date) -> MealPlan {
        MealPlan {
            profile,
            recipes: profile.diet.recipes(),
            today,
            week_offset: 0,
        }
    }

    pub(crate) fn profile(&self) -> &NutritionProfile {
        &self.profile
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn week_offset(&self) -> i64 {
        self.week_offset
    }

    /// The 1-based week number shown to the user
    pub(crate) fn week_number(&self) -> i128 {
        i128::from(self.week_offset) + 1
    }

    pub(crate) fn recipes(&self) -> &'static [Recipe; RECIPES_PER_DIET] {
        self.recipes
    }

    pub(crate) fn next_week(&mut self) -> Result<(), WeekRangeError> {
        self.week_offset = self.week_offset.checked_add(1).ok_or(WeekRangeError)?;
        tracing::debug!(week_offset = self.week_offset, "moved to next week");
        Ok(())
    }

    pub(crate) fn previous_week(&mut self) -> Result<(), WeekRangeError> {
        self.week_offset = self.week_offset.checked_sub(1).ok_or(WeekRangeError)?;
        tracing::debug!(week_offset = self.week_offset, "moved to previous week");
        Ok(())
    }

    pub(crate) fn this_week(&mut self) {
        self.week_offset = 0;
        tracing::debug!("moved to current week");
    }

    pub(crate) fn day(&self, weekday: Weekday) -> DayPlan {
        DayPlan {
            weekday,
            date: self.date_of(weekday),
            meals: day_meals(self.recipes(), self.week_offset, weekday),
        }
    }

    /// The displayed week from Sunday to Saturday
    pub(crate) fn days(&self) -> [DayPlan; DAYS_IN_WEEK] {
        WEEKDAYS.map(|wd| self.day(wd))
    }

    // Weeks start on the Sunday on or before `today`, shifted by whole weeks.
    fn date_of(&self, weekday: Weekday) -> Option<Date> {
        let julian = i64::from(self.today.to_julian_day())
            .checked_sub(i64::from(self.today.weekday().number_days_from_sunday()))?
            .checked_add(self.week_offset.checked_mul(7)?)?
            .checked_add(i64::from(weekday.number_days_from_sunday()))?;
        Date::from_julian_day(i32::try_from(julian).ok()?).ok()
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("no weeks beyond this one can be shown")]
pub(crate) struct WeekRangeError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::DietCategory;
    use crate::testutil::capture_logs;
    use std::num::NonZeroU32;
    use time::macros::date;

    fn profile(diet: DietCategory) -> NutritionProfile {
        let n = |v| NonZeroU32::new(v).unwrap();
        NutritionProfile {
            age: n(25),
            weight: n(70),
            daily_calories: n(2000),
            protein_grams: n(120),
            carb_grams: n(200),
            fat_grams: n(60),
            diet,
        }
    }

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_meal_indices_week_zero() {
        let four = nz(4);
        assert_eq!(meal_indices(four, 0, Sunday), [0, 1, 2]);
        assert_eq!(meal_indices(four, 0, Monday), [1, 2, 3]);
        assert_eq!(meal_indices(four, 0, Tuesday), [2, 3, 0]);
        assert_eq!(meal_indices(four, 0, Wednesday), [3, 0, 1]);
        assert_eq!(meal_indices(four, 0, Thursday), [0, 1, 2]);
        assert_eq!(meal_indices(four, 0, Saturday), [2, 3, 0]);
    }

    #[test]
    fn test_meal_indices_other_weeks() {
        let four = nz(4);
        // 7 ≡ 3 (mod 4)
        assert_eq!(meal_indices(four, 1, Sunday), [3, 0, 1]);
        assert_eq!(meal_indices(four, 2, Sunday), [2, 3, 0]);
        assert_eq!(meal_indices(four, 4, Sunday), [0, 1, 2]);
        // -7 ≡ 1 (mod 4)
        assert_eq!(meal_indices(four, -1, Sunday), [1, 2, 3]);
        assert_eq!(meal_indices(four, -1, Saturday), [3, 0, 1]);
        assert_eq!(meal_indices(four, -2, Monday), [3, 0, 1]);
    }

    #[test]
    fn test_meal_indices_extreme_offsets() {
        let four = nz(4);
        // 7 * i64::MAX ≡ 7 * 3 ≡ 1 (mod 4)
        assert_eq!(meal_indices(four, i64::MAX, Sunday), [1, 2, 3]);
        // 7 * i64::MIN ≡ 0 (mod 4)
        assert_eq!(meal_indices(four, i64::MIN, Sunday), [0, 1, 2]);
    }

    #[test]
    fn test_meal_indices_match_formula() {
        for len in 1..=9 {
            for offset in -30..=30 {
                for (i, wd) in std::iter::zip(0i64.., WEEKDAYS) {
                    let n = i64::try_from(len).unwrap();
                    let base = usize::try_from((i + offset * 7).rem_euclid(n)).unwrap();
                    assert_eq!(
                        meal_indices(nz(len), offset, wd),
                        [base, (base + 1) % len, (base + 2) % len],
                        "len={len} offset={offset} weekday={wd}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_single_recipe() {
        assert_eq!(meal_indices(nz(1), -5, Friday), [0, 0, 0]);
        assert_eq!(day_meals(&["only"], 3, Tuesday), [&"only"; 3]);
    }

    #[test]
    fn test_each_day_omits_one_recipe() {
        let recipes = [0i64, 1, 2, 3];
        for offset in -8..=8 {
            for wd in WEEKDAYS {
                let meals = day_meals(&recipes, offset, wd);
                let omitted = recipes
                    .iter()
                    .filter(|r| !meals.contains(r))
                    .collect::<Vec<_>>();
                let skipped = (i64::from(wd.number_days_from_sunday()) + offset * 7 + 3)
                    .rem_euclid(4);
                assert_eq!(omitted, [&skipped]);
            }
        }
    }

    #[test]
    fn test_keto_first_day() {
        let plan = MealPlan::new(profile(DietCategory::Keto), date!(2025 - 01 - 22));
        let keto = DietCategory::Keto.recipes();
        assert_eq!(plan.recipes(), keto);
        let sunday = plan.day(Sunday);
        assert_eq!(sunday.meals, [&keto[0], &keto[1], &keto[2]]);
        assert_eq!(
            sunday.meals.map(|r| r.name),
            [
                "Scrambled eggs with avocado",
                "Chicken salad with olive oil",
                "Salmon with broccoli and butter",
            ]
        );
    }

    #[test]
    fn test_unknown_diet_uses_balanced() {
        let paleo = MealPlan::new(profile(DietCategory::Paleo), date!(2025 - 01 - 22));
        let balanced = MealPlan::new(profile(DietCategory::Balanced), date!(2025 - 01 - 22));
        assert_eq!(paleo.days(), balanced.days());
    }

    #[test]
    fn test_recipes_looked_up_once() {
        let logs = capture_logs(|| {
            let mut plan = MealPlan::new(profile(DietCategory::Paleo), date!(2025 - 01 - 22));
            for _ in 0..3 {
                assert_eq!(plan.days().len(), DAYS_IN_WEEK);
                plan.next_week().unwrap();
            }
        });
        assert_eq!(
            logs.matches("no recipes listed for diet").count(),
            1,
            "logs:\n{logs}"
        );
    }

    #[test]
    fn test_dates() {
        let plan = MealPlan::new(profile(DietCategory::Vegan), date!(2025 - 01 - 22));
        let dates = plan.days().map(|d| d.date);
        assert_eq!(
            dates,
            [
                Some(date!(2025 - 01 - 19)),
                Some(date!(2025 - 01 - 20)),
                Some(date!(2025 - 01 - 21)),
                Some(date!(2025 - 01 - 22)),
                Some(date!(2025 - 01 - 23)),
                Some(date!(2025 - 01 - 24)),
                Some(date!(2025 - 01 - 25)),
            ]
        );
        assert_eq!(plan.days().map(|d| d.weekday), WEEKDAYS);
    }

    #[test]
    fn test_dates_from_sunday() {
        let mut plan = MealPlan::new(profile(DietCategory::Vegan), date!(2025 - 01 - 19));
        assert_eq!(plan.day(Sunday).date, Some(date!(2025 - 01 - 19)));
        plan.next_week().unwrap();
        assert_eq!(plan.day(Sunday).date, Some(date!(2025 - 01 - 26)));
        assert_eq!(plan.day(Saturday).date, Some(date!(2025 - 02 - 01)));
        plan.previous_week().unwrap();
        plan.previous_week().unwrap();
        assert_eq!(plan.day(Sunday).date, Some(date!(2025 - 01 - 12)));
    }

    #[test]
    fn test_next_then_previous() {
        let mut plan = MealPlan::new(profile(DietCategory::Mediterranean), date!(2025 - 01 - 22));
        let before = plan.days();
        plan.next_week().unwrap();
        assert_eq!(plan.week_offset(), 1);
        assert_eq!(plan.week_number(), 2);
        assert_ne!(plan.days(), before);
        plan.previous_week().unwrap();
        assert_eq!(plan.week_offset(), 0);
        assert_eq!(plan.days(), before);
    }

    #[test]
    fn test_negative_weeks() {
        let mut plan = MealPlan::new(profile(DietCategory::Keto), date!(2025 - 01 - 22));
        plan.previous_week().unwrap();
        plan.previous_week().unwrap();
        assert_eq!(plan.week_offset(), -2);
        assert_eq!(plan.week_number(), -1);
        let keto = DietCategory::Keto.recipes();
        // (0 - 14) mod 4 = 2
        assert_eq!(plan.day(Sunday).meals, [&keto[2], &keto[3], &keto[0]]);
        plan.this_week();
        assert_eq!(plan.week_offset(), 0);
        assert_eq!(plan.day(Sunday).meals, [&keto[0], &keto[1], &keto[2]]);
    }

    #[test]
    fn test_week_offset_limits() {
        let mut plan = MealPlan::new(profile(DietCategory::Keto), date!(2025 - 01 - 22));
        plan.week_offset = i64::MAX;
        assert_eq!(plan.next_week(), Err(WeekRangeError));
        assert_eq!(plan.week_offset(), i64::MAX);
        assert_eq!(plan.week_number(), i128::from(i64::MAX) + 1);
        // Far beyond any representable date, but meals are still assigned:
        let day = plan.day(Monday);
        assert_eq!(day.date, None);
        let keto = DietCategory::Keto.recipes();
        assert_eq!(day.meals, [&keto[2], &keto[3], &keto[0]]);
        plan.week_offset = i64::MIN;
        assert_eq!(plan.previous_week(), Err(WeekRangeError));
        assert_eq!(plan.day(Sunday).date, None);
    }
}
