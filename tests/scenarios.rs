mod common;

use common::{house, DOOR, ROOF, WALL};
use eco_inspector::analysis::{build_model_index, compute_metrics, element_dimensions};
use eco_inspector::error::AnalysisError;
use eco_inspector::model::{Certification, PropertyBag};
use eco_inspector::scene::{AnalysisContext, SceneGraph, SceneSnapshot};
use eco_inspector::session::Session;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn impact_report_of_a_small_house() {
    let scene = house();
    let ids = scene.walk(scene.root());
    assert_eq!(ids, vec![WALL, DOOR, ROOF]);

    let metrics = compute_metrics(&ids, &scene).await.unwrap();

    assert_eq!(metrics.elements_analyzed, 3);
    assert_eq!(metrics.surface_total, 27.0);
    assert_eq!(metrics.volume_total, 30.0);
    assert_eq!(metrics.carbon_footprint, 14400.0);
    assert_eq!(metrics.energy_consumption, 174.0);
    assert_eq!(metrics.cost_estimate, 1500.0 + 800.0 + 12000.0);
    assert_eq!(metrics.mass_total, 72000.0);

    let materials: Vec<&str> = metrics
        .material_breakdown
        .iter()
        .map(|b| b.material.as_str())
        .collect();
    assert_eq!(materials, vec!["Concrete", "Wood", "Steel"]);
    assert_eq!(metrics.material_breakdown[0].volume, 30.0);

    // Only concrete has mass, at a 10 % recycling rate.
    assert!((metrics.recyclability_percent - 10.0).abs() < 1e-9);
    assert_eq!(metrics.certification, Certification::Standard);
    assert_eq!(metrics.estimated_lifetime_years, 50);
}

#[test]
fn wall_volume_is_derived_from_height() {
    let bag = PropertyBag::new("Wall-01")
        .with("Surface", "10 m²")
        .with("Height", "3 m");
    assert_eq!(element_dimensions(&bag.properties), (10.0, 30.0));
}

#[tokio::test]
async fn toit_finds_the_roof() {
    let scene = house();
    let session = Session::load(AnalysisContext::new(&scene, &scene)).await.unwrap();

    assert_eq!(session.resolve("toit"), vec![ROOF]);
}

#[tokio::test]
async fn empty_node_set_is_rejected() {
    let scene = house();

    assert_eq!(
        compute_metrics(&[], &scene).await.unwrap_err(),
        AnalysisError::EmptyModel
    );
    assert_eq!(
        build_model_index(&[], &scene).await.unwrap_err(),
        AnalysisError::EmptyModel
    );
}

#[tokio::test]
async fn failed_fetch_only_shrinks_the_report() {
    let scene = house().with_failing_element(20, 22, "service unavailable");
    let ids = scene.walk(scene.root());
    assert_eq!(ids.len(), 4);

    let metrics = compute_metrics(&ids, &scene).await.unwrap();
    let index = build_model_index(&ids, &scene).await.unwrap();

    assert_eq!(metrics.elements_analyzed, 3);
    assert_eq!(metrics.surface_total, 27.0);
    assert_eq!(index.total_count, 3);
}

#[tokio::test]
async fn repeated_node_ids_count_once() {
    let scene = house();

    let metrics = compute_metrics(&[WALL, WALL, DOOR, WALL], &scene).await.unwrap();
    let index = build_model_index(&[WALL, WALL], &scene).await.unwrap();

    assert_eq!(metrics.elements_analyzed, 2);
    assert_eq!(metrics.volume_total, 30.0);
    assert_eq!(metrics.surface_total, 12.0);
    assert_eq!(index.total_count, 1);
}

#[tokio::test]
async fn nameless_elements_are_never_found() {
    let scene = house().with_element(20, 30, PropertyBag::new("").with("Category", "Walls"));
    let mut session = Session::load(AnalysisContext::new(&scene, &scene)).await.unwrap();

    assert_eq!(session.resolve("walls"), vec![WALL]);
    assert_eq!(session.search_live("walls").await, vec![WALL]);
    assert!(session.search_live("category").await.is_empty());
}

#[tokio::test]
async fn unknown_term_matches_nothing() {
    let scene = house();
    let mut session = Session::load(AnalysisContext::new(&scene, &scene)).await.unwrap();

    assert!(session.resolve("xyzzy").is_empty());
    assert!(session.search_live("xyzzy").await.is_empty());
}

#[tokio::test]
async fn live_search_matches_cached_search() {
    let scene = house()
        .with_element(20, 30, PropertyBag::new("").with("Category", "Walls"))
        .with_element(20, 31, PropertyBag::new("   ").with("Material", "Steel"));
    let mut session = Session::load(AnalysisContext::new(&scene, &scene)).await.unwrap();

    for term in ["toit", "murs", "porte", "steel", "Surface", "Category"] {
        let cached = session.resolve(term);
        assert_eq!(session.search_live(term).await, cached, "term {term}");
    }
}

#[tokio::test]
async fn model_without_leaves_cannot_be_loaded() {
    let scene = SceneSnapshot::new("Empty", 1);
    let result = Session::load(AnalysisContext::new(&scene, &scene)).await;
    assert!(matches!(result, Err(AnalysisError::EmptyModel)));
}
