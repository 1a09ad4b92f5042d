use serde::Serialize;

const FAMILY_SAMPLE: usize = 10;
const NAME_SAMPLE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Whole-model summary of the classified elements.
///
/// Rebuilt from scratch on every model load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelIndex {
    pub total_count: usize,
    /// Sorted by count, most frequent first.
    pub category_counts: Vec<CategoryCount>,
    pub materials: Vec<String>,
    pub families: Vec<String>,
    pub element_names: Vec<String>,
    pub levels: Vec<String>,
}

impl ModelIndex {
    #[must_use]
    pub fn category_count(&self, name: &str) -> Option<usize> {
        self.category_counts
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.count)
    }

    /// Text context describing what the model contains, one bullet per
    /// non-empty section.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut lines = vec![format!("• Total: {} elements", self.total_count)];

        if !self.category_counts.is_empty() {
            let categories: Vec<String> = self
                .category_counts
                .iter()
                .map(|c| format!("{} ({}x)", c.name, c.count))
                .collect();
            lines.push(format!("• Categories: {}", categories.join(", ")));
        }
        if !self.materials.is_empty() {
            lines.push(format!("• Materials: {}", self.materials.join(", ")));
        }
        if !self.families.is_empty() {
            lines.push(format!("• Families: {}", sample(&self.families, FAMILY_SAMPLE)));
        }
        if !self.levels.is_empty() {
            lines.push(format!("• Levels: {}", self.levels.join(", ")));
        }
        if !self.element_names.is_empty() {
            lines.push(format!(
                "• Element names: {}",
                sample(&self.element_names, NAME_SAMPLE)
            ));
        }

        lines.join("\n")
    }
}

fn sample(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
