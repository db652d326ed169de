use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) mod form {
    use super::*;

    pub(crate) const PLACEHOLDER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const FOCUSED_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);

    pub(crate) const SUBMIT_STYLE: Style = BASE_STYLE
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD);
}

pub(crate) mod calendar {
    use super::*;

    pub(crate) const SUMMARY_STYLE: Style = BASE_STYLE.fg(Color::Gray);

    pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const TODAY_STYLE: Style = BASE_STYLE
        .fg(Color::LightCyan)
        .add_modifier(Modifier::BOLD);

    pub(crate) const RECIPE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const DETAIL_STYLE: Style = BASE_STYLE.fg(Color::Gray);

    pub(crate) const BREAKFAST_STYLE: Style = BASE_STYLE.fg(Color::LightYellow);

    pub(crate) const LUNCH_STYLE: Style = BASE_STYLE.fg(Color::LightGreen);

    pub(crate) const DINNER_STYLE: Style = BASE_STYLE.fg(Color::LightMagenta);

    pub(crate) const SNACK_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);
}
