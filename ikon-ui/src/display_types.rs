//! Display types shared between views and the app

use ikon_common::IconData;

/// One of the three generated snippets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnippetKind {
    Install,
    Import,
    Usage,
}

impl SnippetKind {
    pub const ALL: [SnippetKind; 3] = [Self::Install, Self::Import, Self::Usage];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Install => "Install",
            Self::Import => "Import",
            Self::Usage => "Usage",
        }
    }
}

/// An icon as listed in the grid
#[derive(Clone, Debug, PartialEq)]
pub struct IconEntry {
    pub icon: IconData,
    pub category: String,
    pub tags: Vec<String>,
}

impl IconEntry {
    /// Case-insensitive match against name, component name, category and tags.
    /// An empty (or whitespace) query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.icon.name.to_lowercase().contains(&query)
            || self.icon.component_name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}

/// Entries matching `query`, in their original order.
pub fn filter_icons<'a>(entries: &'a [IconEntry], query: &str) -> Vec<&'a IconEntry> {
    entries.iter().filter(|e| e.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(component: &str, name: &str, category: &str, tags: &[&str]) -> IconEntry {
        IconEntry {
            icon: IconData::new(component, name, "outline"),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn matches_name_tags_and_category() {
        let home = entry("IconHome", "home", "Buildings", &["house", "dashboard"]);
        assert!(home.matches(""));
        assert!(home.matches("  "));
        assert!(home.matches("HOME"));
        assert!(home.matches("iconho"));
        assert!(home.matches("dash"));
        assert!(home.matches("build"));
        assert!(!home.matches("heart"));
    }

    #[test]
    fn filter_keeps_order() {
        let entries = vec![
            entry("IconArrowUp", "arrow-up", "Arrows", &[]),
            entry("IconHome", "home", "Buildings", &[]),
            entry("IconArrowDown", "arrow-down", "Arrows", &[]),
        ];
        let names: Vec<_> = filter_icons(&entries, "arrow")
            .iter()
            .map(|e| e.icon.name.as_str())
            .collect();
        assert_eq!(names, vec!["arrow-up", "arrow-down"]);
    }
}
