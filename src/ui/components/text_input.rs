use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

/// A single-line bordered input. Long values are scrolled so the end of the
/// text stays visible.
pub struct TextInput<'a> {
    label: &'a str,
    value: &'a str,
    focused: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(label: &'a str, value: &'a str, focused: bool) -> Self {
        Self {
            label,
            value,
            focused,
        }
    }

    /// Where the terminal cursor belongs when this input has focus.
    pub fn cursor(&self, area: Rect) -> Option<Position> {
        if !self.focused || area.width < 3 || area.height < 3 {
            return None;
        }
        let inner_width = area.width - 2;
        let width = UnicodeWidthStr::width(self.value) as u16;
        Some(Position::new(
            area.x + 1 + width.min(inner_width.saturating_sub(1)),
            area.y + 1,
        ))
    }

    fn border_style(&self) -> Style {
        if self.focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        }
    }
}

impl<'a> Widget for TextInput<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(self.border_style())
            .title(self.label);

        let inner_width = area.width.saturating_sub(2);
        let width = UnicodeWidthStr::width(self.value) as u16;
        let offset = (width + 1).saturating_sub(inner_width);

        Paragraph::new(self.value)
            .block(block)
            .scroll((0, offset))
            .render(area, buf);
    }
}

pub struct SubmitButton {
    focused: bool,
}

impl SubmitButton {
    pub fn new(focused: bool) -> Self {
        Self { focused }
    }
}

impl Widget for SubmitButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.focused {
            Style::default()
                .fg(colors::BACKGROUND)
                .bg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::PRIMARY)
        };

        Paragraph::new("Submit")
            .centered()
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::default().fg(colors::NEUTRAL)),
            )
            .render(area, buf);
    }
}
