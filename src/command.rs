pub const RESUME_NOTICE: &str = "Resume download is mocked in this demo.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteEffect {
    ScrollToProjects,
    ToggleTheme,
    ResumeNotice,
}

const KEYWORDS: [(&str, PaletteEffect); 3] = [
    ("project", PaletteEffect::ScrollToProjects),
    ("dark", PaletteEffect::ToggleTheme),
    ("resume", PaletteEffect::ResumeNotice),
];

/// Effects named by a palette command. Keywords are independent substrings,
/// so one command may trigger several effects; unknown text triggers none.
pub fn interpret(input: &str) -> Vec<PaletteEffect> {
    let command = input.to_lowercase();

    KEYWORDS
        .iter()
        .filter(|(keyword, _)| command.contains(keyword))
        .map(|(_, effect)| *effect)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_keywords() {
        assert_eq!(interpret("Go to projects"), vec![PaletteEffect::ScrollToProjects]);
        assert_eq!(interpret("Toggle DARK"), vec![PaletteEffect::ToggleTheme]);
        assert_eq!(interpret("Download resume"), vec![PaletteEffect::ResumeNotice]);
    }

    #[test]
    fn several_keywords_fire_together() {
        assert_eq!(
            interpret("toggle dark and go to projects"),
            vec![PaletteEffect::ScrollToProjects, PaletteEffect::ToggleTheme]
        );
        assert_eq!(
            interpret("resume, project, dark"),
            vec![
                PaletteEffect::ScrollToProjects,
                PaletteEffect::ToggleTheme,
                PaletteEffect::ResumeNotice,
            ]
        );
    }

    #[test]
    fn unknown_text_does_nothing() {
        assert!(interpret("open settings").is_empty());
        assert!(interpret("").is_empty());
    }
}
