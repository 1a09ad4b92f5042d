#![allow(dead_code)]

use eco_inspector::model::{NodeId, PropertyBag};
use eco_inspector::scene::SceneSnapshot;

pub const WALL: NodeId = 11;
pub const DOOR: NodeId = 12;
pub const ROOF: NodeId = 21;

/// Three-element house: a concrete wall, a wooden door and a steel roof.
pub fn house() -> SceneSnapshot {
    SceneSnapshot::new("House", 1)
        .with_element(
            10,
            WALL,
            PropertyBag::new("Wall-01")
                .with("Material", "Concrete")
                .with("Surface", "10 m²")
                .with("Height", "3 m"),
        )
        .with_element(
            10,
            DOOR,
            PropertyBag::new("Door-01")
                .with("Material", "Wood")
                .with("Surface", "2 m²"),
        )
        .with_element(
            20,
            ROOF,
            PropertyBag::new("Roof-01")
                .with("Material", "Steel")
                .with("Surface", "15 m²"),
        )
}

pub fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}
