// src/analysis/resources.rs

use std::collections::BTreeMap;
use std::path::Path;

use crate::models::swot::{Resource, ResourceType};

/// Read-only lookup table from category name to learning resources.
///
/// Owned by the analyzer; unknown categories get templated placeholder entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCatalog {
    entries: BTreeMap<String, Vec<Resource>>,
}

impl ResourceCatalog {
    pub fn new(entries: BTreeMap<String, Vec<Resource>>) -> Self {
        Self { entries }
    }

    /// Loads a catalog from a JSON object of `category -> [{title, url, type}]`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)?;
        let entries: BTreeMap<String, Vec<Resource>> = serde_json::from_str(&raw)?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resources_for(&self, category: &str) -> Vec<Resource> {
        match self.entries.get(category) {
            Some(resources) => resources.clone(),
            None => vec![
                Resource::new(format!("{} Fundamentals", category), "#", ResourceType::Course),
                Resource::new(
                    format!("{} Practice Problems", category),
                    "#",
                    ResourceType::Practice,
                ),
            ],
        }
    }
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            "Data Structures".to_string(),
            vec![
                Resource::new(
                    "Data Structures and Algorithms",
                    "https://www.coursera.org/learn/data-structures",
                    ResourceType::Course,
                ),
                Resource::new(
                    "Visualizing Data Structures",
                    "https://visualgo.net",
                    ResourceType::Practice,
                ),
            ],
        );
        entries.insert(
            "Algorithms".to_string(),
            vec![
                Resource::new(
                    "Introduction to Algorithms",
                    "https://www.khanacademy.org/computing/computer-science/algorithms",
                    ResourceType::Course,
                ),
                Resource::new(
                    "LeetCode Algorithm Practice",
                    "https://leetcode.com/problemset/algorithms/",
                    ResourceType::Practice,
                ),
            ],
        );
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_uses_table() {
        let catalog = ResourceCatalog::default();
        let resources = catalog.resources_for("Algorithms");
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[1].url, "https://leetcode.com/problemset/algorithms/");
    }

    #[test]
    fn test_unknown_category_gets_template() {
        let resources = ResourceCatalog::default().resources_for("Graphs");
        assert_eq!(
            resources,
            vec![
                Resource::new("Graphs Fundamentals", "#", ResourceType::Course),
                Resource::new("Graphs Practice Problems", "#", ResourceType::Practice),
            ]
        );
    }

    #[test]
    fn test_load_from_json_file() {
        let path = std::env::temp_dir().join(format!("catalog_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"SQL": [{"title": "SQL Zoo", "url": "https://sqlzoo.net", "type": "practice"}]}"#,
        )
        .unwrap();

        let catalog = ResourceCatalog::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.resources_for("SQL"),
            vec![Resource::new("SQL Zoo", "https://sqlzoo.net", ResourceType::Practice)]
        );
    }
}
