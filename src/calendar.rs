use crate::catalog::Recipe;
use crate::plan::{DayPlan, MealPlan, MEALS_PER_DAY};
use crate::theme::{
    calendar::{DETAIL_STYLE, RECIPE_STYLE, SUMMARY_STYLE, TODAY_STYLE, WEEKDAY_STYLE},
    BASE_STYLE, TITLE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};
use std::borrow::Cow;
use time::{Date, Weekday};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of lines taken up by each day of the week, one per meal
const DAY_LINES: u16 = 3;

/// Number of columns in which the weekday and date are written
const DAY_LABEL_WIDTH: u16 = 7;

/// Width of the meal slot column ("Breakfast")
const SLOT_WIDTH: u16 = 9;

/// Width of the column giving calories, macros and prep time; the longest
/// entry is "450 cal · P35 C40 F12 · 25 min"
const DETAIL_WIDTH: u16 = 30;

const COLUMN_GAP: u16 = 1;

const ACS_HLINE: char = '─';

/// The week of meals for a [`MealPlan`].
///
/// The first three lines show the week number, a summary of the profile, and
/// a rule.  Below them, each day from Sunday to Saturday gets [`DAY_LINES`]
/// lines, one per meal.  At 80 columns every recipe name fits in full;
/// narrower terminals cut names short with an ellipsis.  If there is not room
/// for the whole week, the last line names the days left out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Calendar<'a> {
    plan: &'a MealPlan,
}

impl<'a> Calendar<'a> {
    pub(crate) fn new(plan: &'a MealPlan) -> Calendar<'a> {
        Calendar { plan }
    }
}

impl Widget for Calendar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title_area, summary_area, rule_area, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        Line::from_iter([
            Span::styled("◀  ", BASE_STYLE),
            Span::styled(format!("Week {}", self.plan.week_number()), TITLE_STYLE),
            Span::styled("  ▶", BASE_STYLE),
        ])
        .centered()
        .render(title_area, buf);
        Line::styled(self.plan.profile().summary(), SUMMARY_STYLE)
            .centered()
            .render(summary_area, buf);
        Line::styled(
            String::from(ACS_HLINE).repeat(rule_area.width.into()),
            BASE_STYLE,
        )
        .render(rule_area, buf);
        let days = self.plan.days();
        let shown = if usize::from(body_area.height / DAY_LINES) >= days.len() {
            days.len()
        } else {
            // Leave a line for saying what's missing
            usize::from(body_area.height.saturating_sub(1) / DAY_LINES)
        };
        let today = self.plan.today();
        let mut y = body_area.y;
        for day in &days[..shown] {
            let row = Rect {
                y,
                height: DAY_LINES,
                ..body_area
            };
            draw_day(day, today, row, buf);
            y = y.saturating_add(DAY_LINES);
        }
        if shown < days.len() {
            let names = days[shown..]
                .iter()
                .map(|d| weekday_abbrev(d.weekday))
                .collect::<Vec<_>>()
                .join(", ");
            Line::styled(
                format!("▼ {names} not shown; enlarge the terminal"),
                DETAIL_STYLE,
            )
            .render(
                Rect {
                    y,
                    height: 1,
                    ..body_area
                },
                buf,
            );
        }
    }
}

fn draw_day(day: &DayPlan, today: Date, area: Rect, buf: &mut Buffer) {
    let [label_area, meals_area] = Layout::horizontal([
        Constraint::Length(DAY_LABEL_WIDTH),
        Constraint::Fill(1),
    ])
    .spacing(COLUMN_GAP)
    .areas(area);
    let weekday_style = if day.date == Some(today) {
        TODAY_STYLE
    } else {
        WEEKDAY_STYLE
    };
    let date = match day.date {
        Some(d) => format!("{}/{}", d.day(), u8::from(d.month())),
        None => String::from("--"),
    };
    Paragraph::new(Text::from_iter([
        Line::styled(weekday_abbrev(day.weekday), weekday_style),
        Line::styled(date, BASE_STYLE),
    ]))
    .render(label_area, buf);
    let meal_areas: [Rect; MEALS_PER_DAY] =
        Layout::vertical([Constraint::Length(1); MEALS_PER_DAY]).areas(meals_area);
    for (recipe, meal_area) in std::iter::zip(day.meals, meal_areas) {
        draw_meal(recipe, meal_area, buf);
    }
}

fn draw_meal(recipe: &Recipe, area: Rect, buf: &mut Buffer) {
    let [slot_area, name_area, detail_area] = Layout::horizontal([
        Constraint::Length(SLOT_WIDTH),
        Constraint::Fill(1),
        Constraint::Length(DETAIL_WIDTH),
    ])
    .spacing(COLUMN_GAP)
    .areas(area);
    Span::styled(recipe.slot.label(), recipe.slot.style()).render(slot_area, buf);
    Span::styled(
        ellipsize(recipe.name, usize::from(name_area.width)),
        RECIPE_STYLE,
    )
    .render(name_area, buf);
    Line::styled(
        format!(
            "{} cal · P{} C{} F{} · {}",
            recipe.calories, recipe.protein, recipe.carbs, recipe.fats, recipe.prep_time
        ),
        DETAIL_STYLE,
    )
    .right_aligned()
    .render(detail_area, buf);
}

/// Shortens `s` to at most `width` columns, ending it with an ellipsis if
/// anything had to be cut
fn ellipsize(s: &str, width: usize) -> Cow<'_, str> {
    if s.width() <= width {
        return Cow::Borrowed(s);
    }
    let Some(target) = width.checked_sub(1) else {
        return Cow::Borrowed("");
    };
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.truncate(out.trim_end().len());
    out.push('…');
    Cow::Owned(out)
}

fn weekday_abbrev(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Sunday => "Sun",
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
    }
}
