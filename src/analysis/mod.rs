//! Whole-model analysis: fetch, classify, then fold into an index or an
//! impact report.

pub mod classifier;
pub mod fetch;
pub mod index;
pub mod metrics;

use crate::error::AnalysisError;
use crate::model::{MetricsResult, ModelIndex, NodeId};
use crate::scene::PropertyService;
use tracing::info;

pub use classifier::classify;
pub use fetch::{classify_all, fetch_all};
pub use index::build_index;
pub use metrics::{element_dimensions, metrics_from_records, parse_numeric, MetricsAccumulator};

/// Builds the [`ModelIndex`] of the given nodes.
///
/// Every node is fetched concurrently; nodes whose fetch fails or whose
/// bag has no usable name are left out.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyModel`] if `node_ids` is empty.
pub async fn build_model_index<S: PropertyService>(
    node_ids: &[NodeId],
    service: &S,
) -> Result<ModelIndex, AnalysisError> {
    if node_ids.is_empty() {
        return Err(AnalysisError::EmptyModel);
    }

    let records = classify_all(service, node_ids).await;
    let index = build_index(&records);

    info!(
        elements = index.total_count,
        categories = index.category_counts.len(),
        materials = index.materials.len(),
        families = index.families.len(),
        "model index built"
    );

    Ok(index)
}

/// Computes the environmental impact report of the given nodes.
///
/// Fetch failures only shrink the report; they never fail the call.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyModel`] if `node_ids` is empty.
pub async fn compute_metrics<S: PropertyService>(
    node_ids: &[NodeId],
    service: &S,
) -> Result<MetricsResult, AnalysisError> {
    if node_ids.is_empty() {
        return Err(AnalysisError::EmptyModel);
    }

    let records = classify_all(service, node_ids).await;
    let result = metrics_from_records(&records);

    info!(
        requested = node_ids.len(),
        analyzed = result.elements_analyzed,
        materials = result.material_breakdown.len(),
        "impact report computed"
    );

    Ok(result)
}
