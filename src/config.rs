pub const PROJECTS_REGION_ID: &str = "projects";
pub const SEARCH_FIELD_ID: &str = "projectSearch";
pub const PALETTE_ID: &str = "command-palette";
pub const NAVBAR_ID: &str = "navbar";

/// Elements that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = "section, .card, .hero-copy, .hero-card";

const NAV_ELEVATION_THRESHOLD_PX: f64 = 12.0;
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// How far above the viewport's bottom edge the trigger line sits.
    pub bottom_margin_px: f64,
}

impl RevealOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            bottom_margin_px: REVEAL_BOTTOM_MARGIN_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListenerConfig {
    pub nav_elevation_px: f64,
    pub reveal: RevealOptions,
}

impl ListenerConfig {
    pub fn nav_elevated(&self, scroll_offset: f64) -> bool {
        scroll_offset > self.nav_elevation_px
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            nav_elevation_px: NAV_ELEVATION_THRESHOLD_PX,
            reveal: RevealOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn root_margin_pulls_the_bottom_edge_in() {
        assert_eq!(RevealOptions::default().root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn nav_elevates_strictly_past_the_threshold() {
        let config = ListenerConfig::default();

        assert!(!config.nav_elevated(0.0));
        assert!(!config.nav_elevated(12.0));
        assert!(config.nav_elevated(12.5));
    }
}
