/// The inputs that decide whether a new search is issued.
///
/// `trigger` is bumped by the search form on every submit; the default value
/// (`trigger == 0`) stands for a form that was never submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    pub text: String,
    pub words: String,
    pub trigger: u64,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, words: impl Into<String>, trigger: u64) -> Self {
        Self {
            text: text.into(),
            words: words.into(),
            trigger,
        }
    }
}
