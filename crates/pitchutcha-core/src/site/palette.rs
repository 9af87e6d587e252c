//! Command palette: fuzzy filtering and keyboard selection.

#[derive(Clone, Debug, PartialEq)]
pub enum CommandAction {
    ScrollTo(String),
    Navigate(String),
    ToggleTheme,
    OpenSearch,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    pub id: &'static str,
    pub title: String,
    pub keywords: Vec<String>,
    pub action: CommandAction,
}

impl Command {
    pub fn new(id: &'static str, title: impl Into<String>, action: CommandAction) -> Self {
        Self {
            id,
            title: title.into(),
            keywords: Vec::new(),
            action,
        }
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }
}

/// Ordered, case-insensitive subsequence match.
///
/// Each matched char scores 1, plus 2 when it directly follows the previous
/// match and 3 when it starts a word. `None` if `query` is not a subsequence.
/// An empty query matches everything with score 0.
pub fn fuzzy_score(query: &str, text: &str) -> Option<u32> {
    let query: Vec<char> = query
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    if query.is_empty() {
        return Some(0);
    }
    let mut score = 0u32;
    let mut qi = 0usize;
    let mut prev_matched = false;
    let mut prev_char: Option<char> = None;
    for c in text.chars().flat_map(char::to_lowercase) {
        if qi < query.len() && c == query[qi] {
            score += 1;
            if prev_matched {
                score += 2;
            }
            if prev_char.map_or(true, |p| !p.is_alphanumeric()) {
                score += 3;
            }
            qi += 1;
            prev_matched = true;
        } else {
            prev_matched = false;
        }
        prev_char = Some(c);
    }
    (qi == query.len()).then_some(score)
}

#[derive(Clone, Debug)]
pub struct CommandPalette {
    commands: Vec<Command>,
    open: bool,
    query: String,
    results: Vec<usize>,
    selected: usize,
}

impl CommandPalette {
    pub fn new(commands: Vec<Command>) -> Self {
        let results = (0..commands.len()).collect();
        Self {
            commands,
            open: false,
            query: String::new(),
            results,
            selected: 0,
        }
    }

    /// The site's default command set.
    pub fn pitchutcha() -> Self {
        Self::new(vec![
            Command::new(
                "go-humanity",
                "Go to Humanity",
                CommandAction::ScrollTo("chapter-humanity".into()),
            )
            .with_keywords(&["chapter", "people", "origins"]),
            Command::new(
                "go-science",
                "Go to Science",
                CommandAction::ScrollTo("chapter-science".into()),
            )
            .with_keywords(&["chapter", "research"]),
            Command::new(
                "go-technology",
                "Go to Technology",
                CommandAction::ScrollTo("chapter-technology".into()),
            )
            .with_keywords(&["chapter", "tech", "engineering"]),
            Command::new(
                "go-future",
                "Go to Future",
                CommandAction::ScrollTo("chapter-future".into()),
            )
            .with_keywords(&["chapter", "vision"]),
            Command::new("toggle-theme", "Toggle theme", CommandAction::ToggleTheme)
                .with_keywords(&["dark", "light", "appearance"]),
            Command::new("search", "Search the page", CommandAction::OpenSearch)
                .with_keywords(&["find"]),
            Command::new("contact", "Contact us", CommandAction::Navigate("/contact".into()))
                .with_keywords(&["email", "hello"]),
        ])
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.set_query("");
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Refilter; results ordered by best score, ties by declaration order.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        let mut scored: Vec<(u32, usize)> = self
            .commands
            .iter()
            .enumerate()
            .filter_map(|(i, cmd)| {
                std::iter::once(cmd.title.as_str())
                    .chain(cmd.keywords.iter().map(String::as_str))
                    .filter_map(|text| fuzzy_score(query, text))
                    .max()
                    .map(|s| (s, i))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        self.results = scored.into_iter().map(|(_, i)| i).collect();
        self.selected = 0;
    }

    pub fn results(&self) -> impl Iterator<Item = &Command> {
        self.results.iter().filter_map(|&i| self.commands.get(i))
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Command> {
        self.results.get(self.selected).and_then(|&i| self.commands.get(i))
    }

    /// Move the highlight by `delta`, wrapping at both ends.
    pub fn move_selection(&mut self, delta: i32) {
        let n = self.results.len();
        if n == 0 {
            self.selected = 0;
            return;
        }
        let n = n as i64;
        self.selected = (self.selected as i64 + delta as i64).rem_euclid(n) as usize;
    }

    /// Run the highlighted command: closes the palette and returns its action.
    pub fn activate(&mut self) -> Option<CommandAction> {
        let cmd = self.selected()?;
        let action = cmd.action.clone();
        log::info!("[palette] run {}", cmd.id);
        self.close();
        Some(action)
    }
}
