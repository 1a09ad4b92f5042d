mod common;

use common::{house, relative_eq};
use eco_inspector::analysis::{build_model_index, compute_metrics};
use eco_inspector::model::PropertyBag;
use eco_inspector::query::expand_terms;
use eco_inspector::scene::{SceneGraph, SceneSnapshot};
use pretty_assertions::assert_eq;

/// A messier model: nameless bags, derived dimensions, mixed materials.
fn site() -> SceneSnapshot {
    let materials = ["Concrete", "Steel", "Oak Wood", "Glass", "", "Brick", "Gypsum"];
    let mut scene = SceneSnapshot::new("Site", 0);

    for i in 0..40u64 {
        let material = materials[(i as usize) % materials.len()];
        let name = if i % 9 == 0 { "  ".to_string() } else { format!("Element-{i}") };
        let mut bag = PropertyBag::new(name)
            .with("Length", &format!("{}.5 m", i % 5 + 1))
            .with("Width", "0.3 m")
            .with("Hauteur", &format!("{}", i % 4 + 2));
        if !material.is_empty() {
            bag = bag.with("Material", material);
        }
        if i % 3 == 0 {
            bag = bag.with("Volume", &format!("{} m³", i as f64 / 7.0));
        }
        scene = scene.with_element(100 + i % 6, 1000 + i, bag);
    }

    scene
        .with_failing_element(200, 2000, "timeout")
        .with_failing_element(200, 2001, "timeout")
}

#[tokio::test]
async fn total_count_is_the_number_of_named_elements() {
    let scene = site();
    let ids = scene.walk(scene.root());
    assert_eq!(ids.len(), 42);

    let index = build_model_index(&ids, &scene).await.unwrap();

    // Elements 0, 9, 18, 27 and 36 have blank names.
    assert_eq!(index.total_count, 35);
    let summed: usize = index.category_counts.iter().map(|c| c.count).sum();
    assert!(summed <= index.total_count);
}

#[tokio::test]
async fn breakdown_sums_to_totals() {
    let scene = site();
    let ids = scene.walk(scene.root());
    let metrics = compute_metrics(&ids, &scene).await.unwrap();

    let surface: f64 = metrics.material_breakdown.iter().map(|b| b.surface).sum();
    let volume: f64 = metrics.material_breakdown.iter().map(|b| b.volume).sum();
    let count: usize = metrics.material_breakdown.iter().map(|b| b.count).sum();

    assert!(relative_eq(surface, metrics.surface_total));
    assert!(relative_eq(volume, metrics.volume_total));
    assert_eq!(count, metrics.elements_analyzed);
    assert!(metrics
        .material_breakdown
        .iter()
        .any(|b| b.material == "Unknown"));
}

#[tokio::test]
async fn recyclability_stays_in_range() {
    let scene = site();
    let ids = scene.walk(scene.root());

    // Every prefix of the model is a valid model on its own.
    for len in 1..=ids.len() {
        let metrics = compute_metrics(&ids[..len], &scene).await.unwrap();
        assert!((0.0..=100.0).contains(&metrics.recyclability_percent));
        if metrics.mass_total == 0.0 {
            assert_eq!(metrics.recyclability_percent, 0.0);
        }
    }
}

#[tokio::test]
async fn massless_model_has_zero_recyclability() {
    let scene = house();
    let ids = scene.walk(scene.root());
    let metrics = compute_metrics(&ids[1..], &scene).await.unwrap();

    assert_eq!(metrics.mass_total, 0.0);
    assert_eq!(metrics.recyclability_percent, 0.0);
}

#[tokio::test]
async fn metrics_are_idempotent() {
    let scene = site();
    let ids = scene.walk(scene.root());

    let first = compute_metrics(&ids, &scene).await.unwrap();
    let second = compute_metrics(&ids, &scene).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.carbon_footprint.to_bits(),
        second.carbon_footprint.to_bits()
    );
}

#[test]
fn candidate_order_is_deterministic() {
    assert_eq!(expand_terms("murs"), vec!["wall", "walls", "murs"]);
    assert_eq!(expand_terms("portique"), vec!["portique", "portiques"]);
}
