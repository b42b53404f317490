use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::filter::filter_projects;

/// Sentinel category that selects every project.
pub const CATEGORY_ALL: &str = "All";

/// Link value used by projects that have no external destination.
pub const PLACEHOLDER_LINK: &str = "#";

const BUILTIN_PROJECTS: &str = include_str!("../content/projects.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("project list is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("project id {0} appears more than once")]
    DuplicateId(u32),

    #[error("project {id} has a blank category")]
    BlankCategory { id: u32 },

    #[error("project {id} uses the reserved category \"All\"")]
    ReservedCategory { id: u32 },

    #[error("project {id} category {category:?} has surrounding whitespace")]
    PaddedCategory { id: u32, category: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub tags: Vec<String>,
    pub category: String,
    pub description: String,
    pub year: u16,
    pub link: String,
}

impl ProjectRecord {
    pub fn has_destination(&self) -> bool {
        !self.link.is_empty() && self.link != PLACEHOLDER_LINK
    }

    /// Lower-cased text the query stage matches against.
    pub(crate) fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.tags.join(" ")).to_lowercase()
    }
}

/// The ordered, read-only list of projects shown on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());

        for project in &projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }

            let category = project.category.trim();
            if category.is_empty() {
                return Err(CatalogError::BlankCategory { id: project.id });
            }
            // Categories are compared verbatim by the filter and the pills.
            if category != project.category {
                return Err(CatalogError::PaddedCategory {
                    id: project.id,
                    category: project.category.clone(),
                });
            }
            if category == CATEGORY_ALL {
                return Err(CatalogError::ReservedCategory { id: project.id });
            }
        }

        Ok(Self { projects })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(raw)?;
        Self::new(projects)
    }

    /// Projects compiled into the binary from `content/projects.json`.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_PROJECTS)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// `"All"` followed by every category in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![CATEGORY_ALL];

        for project in &self.projects {
            if !categories.contains(&project.category.as_str()) {
                categories.push(project.category.as_str());
            }
        }

        categories
    }

    pub fn filter(&self, category: &str, query: &str) -> Vec<&ProjectRecord> {
        filter_projects(&self.projects, category, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: u32, category: &str) -> ProjectRecord {
        ProjectRecord {
            id,
            title: format!("Project {id}"),
            tags: vec!["Rust".to_string()],
            category: category.to_string(),
            description: "A project.".to_string(),
            year: 2025,
            link: PLACEHOLDER_LINK.to_string(),
        }
    }

    #[test]
    fn builtin_catalog_loads_in_declaration_order() {
        let catalog = Catalog::builtin().expect("embedded projects parse");

        let ids: Vec<u32> = catalog.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            catalog.projects()[1].tags,
            vec!["Node.js".to_string(), "React".to_string(), "MongoDb".to_string()]
        );
    }

    #[test]
    fn categories_start_with_all_and_keep_first_appearance_order() {
        let catalog = Catalog::builtin().expect("embedded projects parse");

        assert_eq!(catalog.categories(), vec!["All", "Web", "Infra", "Backend"]);
    }

    #[test]
    fn placeholder_link_has_no_destination() {
        let catalog = Catalog::builtin().expect("embedded projects parse");

        assert!(catalog.projects()[0].has_destination());
        assert!(!catalog.projects()[5].has_destination());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![record(1, "Web"), record(2, "Web"), record(1, "Infra")]);

        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn blank_and_reserved_categories_are_rejected() {
        assert!(matches!(
            Catalog::new(vec![record(7, "  ")]),
            Err(CatalogError::BlankCategory { id: 7 })
        ));
        assert!(matches!(
            Catalog::new(vec![record(8, "All")]),
            Err(CatalogError::ReservedCategory { id: 8 })
        ));
    }

    #[test]
    fn padded_categories_are_rejected() {
        let result = Catalog::new(vec![record(1, "Web"), record(2, "Web ")]);

        assert!(matches!(
            result,
            Err(CatalogError::PaddedCategory { id: 2, ref category }) if category == "Web "
        ));
        assert!(matches!(
            Catalog::new(vec![record(3, " All")]),
            Err(CatalogError::PaddedCategory { id: 3, .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = Catalog::from_json(r#"[{"id": "one"}]"#);

        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::from_json("[]").expect("empty list parses");

        assert!(catalog.is_empty());
        assert_eq!(catalog.categories(), vec!["All"]);
    }
}
