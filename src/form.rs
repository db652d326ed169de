use crate::profile::{DietCategory, NutritionProfile};
use crate::theme::{
    form::{FOCUSED_STYLE, PLACEHOLDER_STYLE, SUBMIT_STYLE},
    BASE_STYLE, TITLE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use std::num::NonZeroU32;

const LABEL_WIDTH: usize = 20;
const VALUE_WIDTH: usize = 17;
const OUTER_WIDTH: u16 = 43;
const OUTER_HEIGHT: u16 = 16;

/// Largest number of digits accepted in a numeric field
const MAX_DIGITS: u32 = 6;

static SUBMIT_LABEL: &str = "[Generate meal plan]";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NutritionForm;

impl StatefulWidget for NutritionForm {
    type State = FormState;

    /*
     * ...........................................
     * .┌──────── Set Up Your Nutrition Plan ────┐.
     * .│                                        │.
     * .│ Tell us your goals…                    │.
     * .│                                        │.
     * .│ Age (years)         25                 │.
     * .│ Weight (kg)         70                 │.
     * .│  ⋮                                     │.
     * .│ Diet type           Select a diet      │.
     * .│                                        │.
     * .│         [Generate meal plan]           │.
     * .└────────────────────────────────────────┘.
     * ...........................................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(" Set Up Your Nutrition Plan ")
            .title_alignment(Alignment::Center)
            .title_style(TITLE_STYLE)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state.to_text().render(text_area, buf);
    }
}

/// The form's inputs, in focus order
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Field {
    Age,
    Weight,
    Calories,
    Protein,
    Carbs,
    Fats,
    Diet,
    Submit,
}

impl Field {
    const ALL: [Field; 8] = [
        Field::Age,
        Field::Weight,
        Field::Calories,
        Field::Protein,
        Field::Carbs,
        Field::Fats,
        Field::Diet,
        Field::Submit,
    ];

    const NUMERIC: [Field; 6] = [
        Field::Age,
        Field::Weight,
        Field::Calories,
        Field::Protein,
        Field::Carbs,
        Field::Fats,
    ];

    fn label(self) -> &'static str {
        match self {
            Field::Age => "Age (years)",
            Field::Weight => "Weight (kg)",
            Field::Calories => "Daily calories",
            Field::Protein => "Protein (g)",
            Field::Carbs => "Carbohydrates (g)",
            Field::Fats => "Fats (g)",
            Field::Diet => "Diet type",
            Field::Submit => "",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Field::Age => "25",
            Field::Weight => "70",
            Field::Calories => "2000",
            Field::Protein => "120",
            Field::Carbs => "200",
            Field::Fats => "60",
            Field::Diet => "Select a diet",
            Field::Submit => "",
        }
    }

    fn position(self) -> usize {
        Field::ALL
            .iter()
            .position(|&f| f == self)
            .expect("every field should be listed in ALL")
    }

    fn next(self) -> Field {
        Field::ALL[(self.position() + 1) % Field::ALL.len()]
    }

    fn previous(self) -> Field {
        let len = Field::ALL.len();
        Field::ALL[(self.position() + len - 1) % len]
    }
}

/// The partially filled-in form
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FormState {
    age: Option<u32>,
    weight: Option<u32>,
    calories: Option<u32>,
    protein: Option<u32>,
    carbs: Option<u32>,
    fats: Option<u32>,
    diet: Option<DietCategory>,
    focus: Field,
}

impl Default for FormState {
    fn default() -> FormState {
        FormState {
            age: None,
            weight: None,
            calories: None,
            protein: None,
            carbs: None,
            fats: None,
            diet: None,
            focus: Field::Age,
        }
    }
}

impl FormState {
    pub(crate) fn new() -> FormState {
        FormState::default()
    }

    fn value(&self, field: Field) -> Option<u32> {
        match field {
            Field::Age => self.age,
            Field::Weight => self.weight,
            Field::Calories => self.calories,
            Field::Protein => self.protein,
            Field::Carbs => self.carbs,
            Field::Fats => self.fats,
            Field::Diet | Field::Submit => None,
        }
    }

    fn value_mut(&mut self, field: Field) -> Option<&mut Option<u32>> {
        match field {
            Field::Age => Some(&mut self.age),
            Field::Weight => Some(&mut self.weight),
            Field::Calories => Some(&mut self.calories),
            Field::Protein => Some(&mut self.protein),
            Field::Carbs => Some(&mut self.carbs),
            Field::Fats => Some(&mut self.fats),
            Field::Diet | Field::Submit => None,
        }
    }

    /// Returns the profile described by the form, or `None` if any field is
    /// blank or zero
    pub(crate) fn profile(&self) -> Option<NutritionProfile> {
        let nonzero = |v: Option<u32>| v.and_then(NonZeroU32::new);
        Some(NutritionProfile {
            age: nonzero(self.age)?,
            weight: nonzero(self.weight)?,
            daily_calories: nonzero(self.calories)?,
            protein_grams: nonzero(self.protein)?,
            carb_grams: nonzero(self.carbs)?,
            fat_grams: nonzero(self.fats)?,
            diet: self.diet?,
        })
    }

    pub(crate) fn handle_input(&mut self, input: FormInput) -> FormOutput {
        match (input, self.focus) {
            (FormInput::Next, _) => {
                self.focus = self.focus.next();
                FormOutput::Ok
            }
            (FormInput::Previous, _) => {
                self.focus = self.focus.previous();
                FormOutput::Ok
            }
            (FormInput::Enter, _) => self.submit(),
            (FormInput::Right, Field::Diet) => {
                let first = DietCategory::ALL[0];
                self.diet = Some(self.diet.map_or(first, DietCategory::next));
                FormOutput::Ok
            }
            (FormInput::Left, Field::Diet) => {
                let last = DietCategory::ALL[DietCategory::ALL.len() - 1];
                self.diet = Some(self.diet.map_or(last, DietCategory::previous));
                FormOutput::Ok
            }
            (FormInput::Digit(d), field) => {
                let Some(slot) = self.value_mut(field) else {
                    return FormOutput::Invalid;
                };
                let value = slot
                    .unwrap_or_default()
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u32::from(d)));
                match value {
                    Some(v) if d < 10 && v < 10u32.pow(MAX_DIGITS) => {
                        *slot = Some(v);
                        FormOutput::Ok
                    }
                    _ => FormOutput::Invalid,
                }
            }
            (FormInput::Backspace, Field::Diet) if self.diet.is_some() => {
                self.diet = None;
                FormOutput::Ok
            }
            (FormInput::Backspace, field) => match self.value_mut(field) {
                Some(slot) if slot.is_some() => {
                    *slot = slot.map(|v| v / 10).filter(|&v| v != 0);
                    FormOutput::Ok
                }
                _ => FormOutput::Invalid,
            },
            _ => FormOutput::Invalid,
        }
    }

    fn submit(&self) -> FormOutput {
        if let Some(profile) = self.profile() {
            tracing::info!(
                age = profile.age.get(),
                weight = profile.weight.get(),
                daily_calories = profile.daily_calories.get(),
                protein_grams = profile.protein_grams.get(),
                carb_grams = profile.carb_grams.get(),
                fat_grams = profile.fat_grams.get(),
                diet = profile.diet.key(),
                "nutrition profile submitted"
            );
            FormOutput::Submit(profile)
        } else {
            tracing::debug!("ignoring submission of incomplete form");
            FormOutput::Incomplete
        }
    }

    fn to_text(self) -> Text<'static> {
        let mut lines = vec![
            Line::styled("", BASE_STYLE),
            Line::styled("Tell us your goals to build a plan.", BASE_STYLE),
            Line::styled("", BASE_STYLE),
        ];
        lines.extend(
            Field::NUMERIC.map(|f| self.field_line(f, self.value(f).map(|v| v.to_string()))),
        );
        lines.push(self.diet_line());
        lines.push(Line::styled("", BASE_STYLE));
        // Style a span and convert it to a line rather than creating a styled
        // line directly so that only the button text and not any of its
        // centering padding will be highlighted:
        lines.push(
            Line::from(Span::styled(
                SUBMIT_LABEL,
                if self.focus == Field::Submit {
                    FOCUSED_STYLE
                } else {
                    SUBMIT_STYLE
                },
            ))
            .centered(),
        );
        Text::from(lines)
    }

    fn field_line(self, field: Field, value: Option<String>) -> Line<'static> {
        let label = Span::styled(format!("{:LABEL_WIDTH$}", field.label()), BASE_STYLE);
        let value = match value {
            Some(s) => Span::styled(
                format!("{s:VALUE_WIDTH$}"),
                self.value_style(field, BASE_STYLE),
            ),
            None => Span::styled(
                format!("{:VALUE_WIDTH$}", field.placeholder()),
                self.value_style(field, PLACEHOLDER_STYLE),
            ),
        };
        Line::from_iter([label, value])
    }

    fn diet_line(self) -> Line<'static> {
        let value = self.diet.map(|d| {
            if self.focus == Field::Diet {
                format!("◀ {d} ▶")
            } else {
                d.to_string()
            }
        });
        self.field_line(Field::Diet, value)
    }

    fn value_style(self, field: Field, style: Style) -> Style {
        if self.focus == field {
            style.patch(FOCUSED_STYLE)
        } else {
            style
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FormInput {
    Digit(u8),
    Backspace,
    Next,
    Previous,
    Left,
    Right,
    Enter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FormOutput {
    Ok,
    Invalid,
    /// The form was submitted with a blank or zero field.  Nothing is
    /// reported to the user.
    Incomplete,
    Submit(NutritionProfile),
}
