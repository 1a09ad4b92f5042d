use crate::model::{CategoryCount, ElementRecord, ModelIndex};
use std::collections::{BTreeSet, HashMap};

/// Folds classified records into a [`ModelIndex`].
///
/// Categories are ordered by descending count, ties by name; every other
/// collection is deduplicated and sorted lexicographically.
#[must_use]
pub fn build_index(records: &[ElementRecord]) -> ModelIndex {
    let mut categories: HashMap<&str, usize> = HashMap::new();
    let mut materials = BTreeSet::new();
    let mut families = BTreeSet::new();
    let mut names = BTreeSet::new();
    let mut levels = BTreeSet::new();

    for record in records {
        if let Some(category) = &record.category {
            *categories.entry(category.as_str()).or_insert(0) += 1;
        }
        if let Some(material) = &record.material {
            materials.insert(material.clone());
        }
        if let Some(family) = &record.family {
            families.insert(family.clone());
        }
        if let Some(level) = &record.level {
            levels.insert(level.clone());
        }
        names.insert(record.name.clone());
    }

    let mut category_counts: Vec<CategoryCount> = categories
        .into_iter()
        .map(|(name, count)| CategoryCount {
            name: name.to_string(),
            count,
        })
        .collect();
    category_counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

    ModelIndex {
        total_count: records.len(),
        category_counts,
        materials: materials.into_iter().collect(),
        families: families.into_iter().collect(),
        element_names: names.into_iter().collect(),
        levels: levels.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classify;
    use crate::model::PropertyBag;
    use pretty_assertions::assert_eq;

    fn record(id: u64, name: &str, category: &str, material: &str, level: &str) -> ElementRecord {
        let mut bag = PropertyBag::new(name);
        for (field, value) in [("Category", category), ("Material", material), ("Level", level)] {
            if !value.is_empty() {
                bag = bag.with(field, value);
            }
        }
        classify(id, &bag).unwrap()
    }

    #[test]
    fn histogram_and_sets() {
        let records = vec![
            record(1, "Wall-01", "Walls", "Concrete", "L1"),
            record(2, "Wall-02", "Walls", "Brick", "L2"),
            record(3, "Door-01", "Doors", "Wood", "L1"),
            record(4, "Wall-01", "Walls", "Concrete", ""),
            record(5, "Slab-01", "Floors", "", "L1"),
        ];

        let index = build_index(&records);

        assert_eq!(index.total_count, 5);
        assert_eq!(
            index.category_counts,
            vec![
                CategoryCount {
                    name: "Walls".into(),
                    count: 3
                },
                CategoryCount {
                    name: "Doors".into(),
                    count: 1
                },
                CategoryCount {
                    name: "Floors".into(),
                    count: 1
                },
            ]
        );
        assert_eq!(index.materials, vec!["Brick", "Concrete", "Wood"]);
        assert_eq!(index.levels, vec!["L1", "L2"]);
        assert_eq!(index.element_names, vec!["Door-01", "Slab-01", "Wall-01", "Wall-02"]);
        assert!(index.families.is_empty());
    }

    #[test]
    fn empty_input_gives_empty_index() {
        assert_eq!(build_index(&[]), ModelIndex::default());
    }
}
