use crate::request::SearchQuery;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Text,
    Words,
    Submit,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Text => FormField::Words,
            FormField::Words => FormField::Submit,
            FormField::Submit => FormField::Text,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Text => FormField::Submit,
            FormField::Words => FormField::Text,
            FormField::Submit => FormField::Words,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Text => "Search",
            FormField::Words => "Words",
            FormField::Submit => "Submit",
        }
    }
}

/// The search inputs.
///
/// Typing only edits the drafts. `submit` copies them into the committed
/// query and bumps its trigger version, which is what the request controller
/// watches.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    text: String,
    words: String,
    focus: FormField,
    committed: SearchQuery,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &SearchQuery {
        &self.committed
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &str {
        &self.words
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn insert(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            field.push(c);
        }
    }

    pub fn paste(&mut self, s: &str) {
        if let Some(field) = self.focused_field() {
            field.extend(s.chars().filter(|c| !c.is_control()));
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            field.pop();
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(field) = self.focused_field() {
            field.clear();
        }
    }

    /// Empty drafts are submitted as-is; validating them is the server's job.
    pub fn submit(&mut self) -> &SearchQuery {
        self.committed = SearchQuery {
            text: self.text.clone(),
            words: self.words.clone(),
            trigger: self.committed.trigger.wrapping_add(1).max(1),
        };
        &self.committed
    }

    fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Text => Some(&mut self.text),
            FormField::Words => Some(&mut self.words),
            FormField::Submit => None,
        }
    }
}
