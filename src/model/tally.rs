/// How often the terms of a words filter occur in a block of lyrics.
///
/// A lyric token counts towards a term when it contains the term, ignoring
/// case, so "Loving" counts for "love".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordTally {
    pub total_words: usize,
    pub hits: Vec<(String, usize)>,
}

impl WordTally {
    pub fn count(lyrics: &str, words: &str) -> Self {
        let mut hits: Vec<(String, usize)> = Vec::new();
        for term in words.split_whitespace().map(str::to_lowercase) {
            if !hits.iter().any(|(t, _)| *t == term) {
                hits.push((term, 0));
            }
        }

        let mut total_words = 0;
        for token in lyrics.split_whitespace() {
            total_words += 1;
            if hits.is_empty() {
                continue;
            }
            let token = token.to_lowercase();
            for (term, count) in hits.iter_mut() {
                if token.contains(term.as_str()) {
                    *count += 1;
                }
            }
        }

        Self { total_words, hits }
    }

    pub fn summary(&self) -> Option<String> {
        if self.hits.is_empty() {
            return None;
        }
        let parts = self
            .hits
            .iter()
            .map(|(term, n)| format!("{} ×{}", term, n))
            .collect::<Vec<_>>();
        Some(format!("{} ({} words)", parts.join(" · "), self.total_words))
    }
}
