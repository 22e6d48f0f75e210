use std::{sync::Arc, time::Duration};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    config::AppConfig,
    http::{ApiService, SearchApi},
    request::RequestController,
    util::colors,
};

use super::{
    components::text_input::{SubmitButton, TextInput},
    form::{FormField, SearchForm},
    message::AppMessage,
    results::ResultRenderer,
    tui,
    util::handler::EventHandler,
};

const PAGE: u16 = 10;
const SHUTDOWN_GRACE: Duration = Duration::from_millis(250);
const HELP: &str = "Tab: next field  Enter: search  ↑/↓: scroll  Esc: quit";

pub struct App {
    pub config: AppConfig,
    pub form: SearchForm,
    pub search: RequestController,
    pub scroll: u16,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> color_eyre::Result<Self> {
        let api = Arc::new(ApiService::new(&config)?);
        Ok(Self::with_api(config, api))
    }

    pub fn with_api(config: AppConfig, api: Arc<dyn SearchApi>) -> Self {
        Self {
            config,
            form: SearchForm::new(),
            search: RequestController::new(api),
            scroll: 0,
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new(self.config.tick_rate)?.paste(true);
        tui.enter()?;
        tracing::info!(url = %self.config.search_url, "search view mounted");

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.shutdown().await;
        tui.exit()?;
        Ok(())
    }

    /// Detaches the search view and gives running searches a short grace
    /// period to wind down. Searches still running after that are left behind.
    pub async fn shutdown(&mut self) {
        self.search.teardown();
        if tokio::time::timeout(SHUTDOWN_GRACE, self.search.join_pending())
            .await
            .is_err()
        {
            tracing::debug!("search still running at exit, leaving it behind");
        }
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::FocusNext => self.form.focus_next(),
            AppMessage::FocusPrevious => self.form.focus_prev(),
            AppMessage::Input(c) => self.form.insert(c),
            AppMessage::Paste(s) => self.form.paste(&s),
            AppMessage::Backspace => self.form.backspace(),
            AppMessage::ClearField => self.form.clear_field(),
            AppMessage::Submit => {
                self.form.submit();
                self.scroll = 0;
            }
            AppMessage::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            AppMessage::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            AppMessage::PageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            AppMessage::PageDown => self.scroll = self.scroll.saturating_add(PAGE),
        }
    }

    pub fn ui(&mut self, frame: &mut Frame) {
        if !self.has_focus {
            return;
        }

        let area = frame.area();
        frame
            .buffer_mut()
            .set_style(area, Style::new().bg(colors::BACKGROUND));

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title_top("Search for a song...")
            .title_alignment(Alignment::Center);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        self.render_form(frame, chunks[0]);

        let state = self
            .search
            .evaluate(&self.config.search_url, self.form.query());
        frame.render_widget(
            ResultRenderer::new(state, &self.form.query().words).scroll(self.scroll),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(HELP).style(Style::default().fg(colors::NEUTRAL)),
            chunks[2],
        );
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let fields = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Min(10),
                Constraint::Length(10),
            ])
            .split(area);

        let focus = self.form.focus();
        let text = TextInput::new(
            FormField::Text.label(),
            self.form.text(),
            focus == FormField::Text,
        );
        let words = TextInput::new(
            FormField::Words.label(),
            self.form.words(),
            focus == FormField::Words,
        );

        let cursor = text.cursor(fields[0]).or(words.cursor(fields[1]));
        frame.render_widget(text, fields[0]);
        frame.render_widget(words, fields[1]);
        frame.render_widget(SubmitButton::new(focus == FormField::Submit), fields[2]);

        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }
}
