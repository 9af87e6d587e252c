#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    TogglePalette,
    OpenSearch,
    ToggleTheme,
    Close,
    SelectPrev,
    SelectNext,
    Activate,
    FocusNext,
    FocusPrev,
}

/// Map a `KeyboardEvent.key` plus modifiers to a page shortcut.
///
/// Single-letter shortcuts only fire without Ctrl/Cmd so browser shortcuts
/// keep working; the front-end also skips them while typing in an input.
#[inline]
pub fn shortcut_for(key: &str, ctrl: bool, meta: bool, shift: bool) -> Option<Shortcut> {
    let command = ctrl || meta;
    match key {
        "k" | "K" if command => Some(Shortcut::TogglePalette),
        "/" if !command => Some(Shortcut::OpenSearch),
        "t" | "T" if !command => Some(Shortcut::ToggleTheme),
        "Escape" => Some(Shortcut::Close),
        "ArrowUp" => Some(Shortcut::SelectPrev),
        "ArrowDown" => Some(Shortcut::SelectNext),
        "Enter" => Some(Shortcut::Activate),
        "Tab" if shift => Some(Shortcut::FocusPrev),
        "Tab" => Some(Shortcut::FocusNext),
        _ => None,
    }
}

/// Shortcuts that still apply while an input has focus.
#[inline]
pub fn allowed_while_typing(shortcut: Shortcut) -> bool {
    !matches!(shortcut, Shortcut::OpenSearch | Shortcut::ToggleTheme)
}
