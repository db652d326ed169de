use crate::theme::BASE_STYLE;
use ratatui::{
    buffer::Buffer,
    layout::Flex,
    layout::{Alignment, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub(crate) static FORM_KEYS: &[&str] = &[
    "0-9             Enter digits",
    "BACKSPACE       Delete last digit",
    "TAB, DOWN       Next field",
    "S-TAB, UP       Previous field",
    "LEFT, RIGHT     Choose diet",
    "ENTER           Generate meal plan",
    "?               Show this help",
    "q, ESC          Quit",
];

pub(crate) static CALENDAR_KEYS: &[&str] = &[
    "h, LEFT, UP     Previous week",
    "l, RIGHT, DOWN  Next week",
    "0, HOME         Jump to week 1",
    "n               New plan",
    "?               Show this help",
    "q, ESC          Quit",
];

/// Popup listing the keys in `self.0`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) &'static [&'static str]);

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self
            .0
            .iter()
            .map(|&s| Line::raw(s))
            .chain([Line::raw(""), Line::raw("Press the Any Key to dismiss.")])
            .collect::<Vec<_>>();
        let text = Text::from(lines);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(BASE_STYLE);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        let outer_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        };
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        para.render(help_area, buf);
    }
}
