use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    model::{Song, SongId, WordTally},
    request::{FetchState, FetchStatus},
    ui::components::spinner::Spinner,
    util::colors,
};

pub const EMPTY_RESULTS: &str = "No songs found";

#[derive(Debug, PartialEq)]
pub struct SongCard<'a> {
    pub key: &'a SongId,
    pub title: &'a str,
    pub artist: &'a str,
    pub lyrics: &'a str,
    pub tally: WordTally,
}

impl<'a> SongCard<'a> {
    fn new(song: &'a Song, words: &str) -> Self {
        Self {
            key: &song.id,
            title: &song.title,
            artist: &song.artist,
            lyrics: &song.lyrics,
            tally: WordTally::count(&song.lyrics, words),
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(
                self.title,
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(self.artist, Style::default().fg(colors::SECONDARY)),
        ])];

        if let Some(summary) = self.tally.summary() {
            lines.push(Line::styled(summary, Style::default().fg(colors::ACCENT)));
        }

        if self.lyrics.trim().is_empty() {
            lines.push(Line::styled(
                "No lyrics available",
                Style::default().fg(colors::NEUTRAL),
            ));
        } else {
            lines.extend(self.lyrics.lines().map(Line::raw));
        }
        lines
    }
}

/// What the results pane shows for a given fetch state.
#[derive(Debug, PartialEq)]
pub enum ResultView<'a> {
    Nothing,
    Loading,
    Error(&'a str),
    Empty,
    Songs(Vec<SongCard<'a>>),
}

impl<'a> ResultView<'a> {
    pub fn from_state(state: &'a FetchState, words: &str) -> Self {
        match state.status {
            FetchStatus::Idle => ResultView::Nothing,
            FetchStatus::Loading => ResultView::Loading,
            FetchStatus::Error => ResultView::Error(
                state
                    .error
                    .as_ref()
                    .map(|e| e.message.as_str())
                    .unwrap_or("Search failed"),
            ),
            FetchStatus::Success => match &state.data {
                Some(data) if !data.is_empty() => ResultView::Songs(
                    data.songs
                        .iter()
                        .map(|song| SongCard::new(song, words))
                        .collect(),
                ),
                _ => ResultView::Empty,
            },
        }
    }
}

pub struct ResultRenderer<'a> {
    view: ResultView<'a>,
    scroll: u16,
}

impl<'a> ResultRenderer<'a> {
    pub fn new(state: &'a FetchState, words: &str) -> Self {
        Self {
            view: ResultView::from_state(state, words),
            scroll: 0,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl<'a> Widget for ResultRenderer<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match self.view {
            ResultView::Nothing => {}
            ResultView::Loading => {
                Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Searching...".to_string())
                    .render(area, buf);
            }
            ResultView::Error(message) => {
                Paragraph::new(message)
                    .style(Style::default().fg(colors::ERROR))
                    .wrap(Wrap { trim: true })
                    .render(area, buf);
            }
            ResultView::Empty => {
                Paragraph::new(EMPTY_RESULTS)
                    .style(Style::default().fg(colors::NEUTRAL))
                    .render(area, buf);
            }
            ResultView::Songs(cards) => {
                let mut lines = Vec::new();
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        lines.push(Line::styled(
                            "─".repeat(area.width as usize),
                            Style::default().fg(colors::NEUTRAL),
                        ));
                    }
                    lines.extend(card.lines());
                }
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((self.scroll, 0))
                    .render(area, buf);
            }
        }
    }
}
