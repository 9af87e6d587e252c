//! Search modal: a tiny in-page index and focus trapping.

#[derive(Clone, Debug, PartialEq)]
pub struct SearchEntry {
    pub title: String,
    pub anchor: String,
    pub body: String,
}

impl SearchEntry {
    pub fn new(
        title: impl Into<String>,
        anchor: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            anchor: anchor.into(),
            body: body.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchHit<'a> {
    pub entry: &'a SearchEntry,
    pub score: u32,
}

/// Index built from the page's sections at startup.
#[derive(Clone, Debug, Default)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
    // lowercase (title, body), parallel to `entries`
    folded: Vec<(String, String)>,
}

impl SearchIndex {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        let folded = entries
            .iter()
            .map(|e| (e.title.to_lowercase(), e.body.to_lowercase()))
            .collect();
        Self { entries, folded }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every term must appear in the title or body. Title hits weigh 3,
    /// body hits 1; ties keep page order. A blank query returns nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit<'_>> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if terms.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<SearchHit<'_>> = self
            .entries
            .iter()
            .zip(&self.folded)
            .filter_map(|(entry, (title, body))| {
                let mut score = 0u32;
                for term in &terms {
                    let in_title = title.contains(term.as_str());
                    let in_body = body.contains(term.as_str());
                    if !in_title && !in_body {
                        return None;
                    }
                    if in_title {
                        score += 3;
                    }
                    if in_body {
                        score += 1;
                    }
                }
                Some(SearchHit { entry, score })
            })
            .collect();
        // sort_by is stable, so equal scores stay in page order
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(limit);
        hits
    }
}

/// Keeps keyboard focus cycling inside an open modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusTrap {
    len: usize,
    index: usize,
}

impl FocusTrap {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Tab: next focusable element, wrapping to the first.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Shift+Tab: previous focusable element, wrapping to the last.
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// The modal content changed (e.g. new results); keep the index in range.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }
}
