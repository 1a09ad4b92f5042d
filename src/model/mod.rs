pub mod element;
pub mod index;
pub mod material;
pub mod metrics;

pub use element::{ElementRecord, NodeId, Property, PropertyBag};
pub use index::{CategoryCount, ModelIndex};
pub use material::{recyclability_rate, MaterialProfile, DEFAULT_PROFILE};
pub use metrics::{Certification, MaterialBreakdown, MetricsResult, UNKNOWN_MATERIAL};
