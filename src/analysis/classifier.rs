//! Heuristic mapping from a property bag to an [`ElementRecord`].

use crate::model::{ElementRecord, NodeId, Property, PropertyBag};

pub const CATEGORY_FIELDS: &[&str] = &[
    "Category",
    "Catégorie",
    "Object Type",
    "Type d'objet",
    "Element Type",
];
pub const MATERIAL_FIELDS: &[&str] = &[
    "Material",
    "Matériau",
    "Matériel",
    "Structural Material",
    "Finish Material",
];
pub const FAMILY_FIELDS: &[&str] = &["Family", "Famille", "Family Name", "Type Name"];
pub const TYPE_FIELDS: &[&str] = &["Type", "Element Type", "Type Name", "Nom du type"];
pub const LEVEL_FIELDS: &[&str] = &[
    "Level",
    "Niveau",
    "Reference Level",
    "Constraint",
    "Elevation",
];

/// First property whose display name contains `field` (case-insensitive).
#[must_use]
pub fn find_property<'a>(properties: &'a [Property], field: &str) -> Option<&'a Property> {
    let field = field.to_lowercase();
    properties
        .iter()
        .find(|p| p.display_name.to_lowercase().contains(&field))
}

/// First property matching any of `fields`, tried in order.
#[must_use]
pub fn find_any<'a>(properties: &'a [Property], fields: &[&str]) -> Option<&'a Property> {
    fields
        .iter()
        .find_map(|field| find_property(properties, field))
}

/// Value of the first candidate field that resolves to a non-empty value.
///
/// For each candidate only the first property whose name matches is
/// considered; when its value is empty the next candidate is tried.
#[must_use]
pub fn find_value(properties: &[Property], fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| {
        find_property(properties, field)
            .filter(|p| !p.display_value.is_empty())
            .map(|p| p.display_value.clone())
    })
}

/// Classifies one element.
///
/// Returns `None` when the bag carries no usable name; such nodes are left
/// out of every aggregate.
#[must_use]
pub fn classify(id: NodeId, bag: &PropertyBag) -> Option<ElementRecord> {
    let name = bag.usable_name()?;
    let props = bag.properties.as_slice();

    Some(ElementRecord {
        id,
        name: name.to_string(),
        category: find_value(props, CATEGORY_FIELDS),
        material: find_value(props, MATERIAL_FIELDS),
        family: find_value(props, FAMILY_FIELDS),
        element_type: find_value(props, TYPE_FIELDS),
        level: find_value(props, LEVEL_FIELDS),
        properties: bag.properties.clone(),
    })
}
