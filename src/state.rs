use crate::catalog::CATEGORY_ALL;

pub const DEFAULT_ACCENT_COLOR: &str = "#6f7cff";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    /// Text for the theme button, naming the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self.toggled() {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Every mutation the page can make to [`ViewState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewAction {
    ToggleTheme,
    TogglePalette,
    ClosePalette,
    ToggleMobileMenu,
    CloseMobileMenu,
    /// Escape: close both overlays.
    DismissOverlays,
    SetCategory(String),
    SetQuery(String),
    SetAccentColor(String),
    MarkLoaded,
}

/// Ephemeral UI state. Lives for the page session only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    accent_color: String,
    theme: Theme,
    selected_category: String,
    query_text: String,
    palette_open: bool,
    mobile_menu_open: bool,
    has_loaded: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            theme: Theme::default(),
            selected_category: CATEGORY_ALL.to_string(),
            query_text: String::new(),
            palette_open: false,
            mobile_menu_open: false,
            has_loaded: false,
        }
    }
}

impl ViewState {
    pub fn accent_color(&self) -> &str {
        &self.accent_color
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn palette_open(&self) -> bool {
        self.palette_open
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_palette(&mut self) {
        self.palette_open = !self.palette_open;
    }

    pub fn close_palette(&mut self) {
        self.palette_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn dismiss_overlays(&mut self) {
        self.palette_open = false;
        self.mobile_menu_open = false;
    }

    /// Unknown categories are accepted; they simply filter everything out.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    /// Stored verbatim. Trimming happens when filtering.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query_text = query.into();
    }

    /// Stored verbatim; the color is not validated.
    pub fn set_accent_color(&mut self, color: impl Into<String>) {
        self.accent_color = color.into();
    }

    pub fn mark_loaded(&mut self) {
        self.has_loaded = true;
    }

    /// Applies `action` and reports whether the state changed.
    pub fn apply(&mut self, action: ViewAction) -> bool {
        let before = self.clone();

        match action {
            ViewAction::ToggleTheme => self.toggle_theme(),
            ViewAction::TogglePalette => self.toggle_palette(),
            ViewAction::ClosePalette => self.close_palette(),
            ViewAction::ToggleMobileMenu => self.toggle_mobile_menu(),
            ViewAction::CloseMobileMenu => self.close_mobile_menu(),
            ViewAction::DismissOverlays => self.dismiss_overlays(),
            ViewAction::SetCategory(category) => self.set_category(category),
            ViewAction::SetQuery(query) => self.set_query(query),
            ViewAction::SetAccentColor(color) => self.set_accent_color(color),
            ViewAction::MarkLoaded => self.mark_loaded(),
        }

        *self != before
    }
}
