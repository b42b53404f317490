/// A key-down as seen by the page-level listener.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

#[cfg(test)]
impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

impl KeyInput {
    fn has_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    TogglePalette,
    ToggleTheme,
    FocusSearch,
    DismissOverlays,
}

impl Shortcut {
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::TogglePalette | Self::FocusSearch)
    }
}

pub fn shortcut_for(input: &KeyInput) -> Option<Shortcut> {
    let key = input.key.to_lowercase();

    match key.as_str() {
        "k" if input.has_modifier() => Some(Shortcut::TogglePalette),
        "escape" => Some(Shortcut::DismissOverlays),
        _ if input.has_modifier() => None,
        "d" => Some(Shortcut::ToggleTheme),
        "/" => Some(Shortcut::FocusSearch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn modifier_k_toggles_palette() {
        assert_eq!(
            shortcut_for(&KeyInput::new("k").with_ctrl()),
            Some(Shortcut::TogglePalette)
        );
        assert_eq!(
            shortcut_for(&KeyInput::new("K").with_meta()),
            Some(Shortcut::TogglePalette)
        );
        assert_eq!(shortcut_for(&KeyInput::new("k")), None);
    }

    #[test]
    fn bare_keys_map_to_theme_and_search() {
        assert_eq!(shortcut_for(&KeyInput::new("d")), Some(Shortcut::ToggleTheme));
        assert_eq!(shortcut_for(&KeyInput::new("D")), Some(Shortcut::ToggleTheme));
        assert_eq!(shortcut_for(&KeyInput::new("/")), Some(Shortcut::FocusSearch));
    }

    #[test]
    fn modified_bare_keys_are_ignored() {
        assert_eq!(shortcut_for(&KeyInput::new("d").with_ctrl()), None);
        assert_eq!(shortcut_for(&KeyInput::new("/").with_meta()), None);
    }

    #[test]
    fn escape_always_dismisses() {
        assert_eq!(
            shortcut_for(&KeyInput::new("Escape")),
            Some(Shortcut::DismissOverlays)
        );
        assert_eq!(
            shortcut_for(&KeyInput::new("Escape").with_ctrl()),
            Some(Shortcut::DismissOverlays)
        );
    }

    #[test]
    fn only_palette_and_search_suppress_the_browser_default() {
        assert!(Shortcut::TogglePalette.prevents_default());
        assert!(Shortcut::FocusSearch.prevents_default());
        assert!(!Shortcut::ToggleTheme.prevents_default());
        assert!(!Shortcut::DismissOverlays.prevents_default());
    }
}
