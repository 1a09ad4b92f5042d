//! # Eco Inspector
//!
//! Environmental impact reports and bilingual element search over BIM
//! scene graphs.
//!
//! ## Features
//!
//! - Walk a scene graph and fetch every element's properties concurrently
//! - Classify elements (category, material, family, type, level)
//! - Model index and environmental/economic impact report
//! - French/English search and assistant viewer commands
//! - Export to CSV and JSON, browse in a terminal dashboard
//!
//! ## Example
//!
//! ```no_run
//! use eco_inspector::scene::{AnalysisContext, SceneSnapshot};
//! use eco_inspector::session::Session;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let scene = SceneSnapshot::from_file("house.json")?;
//! let session = Session::load(AnalysisContext::new(&scene, &scene)).await?;
//! println!("Carbon: {:.1} kg", session.metrics().carbon_footprint);
//! println!("Roof elements: {:?}", session.resolve("toit"));
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod error;
pub mod export;
pub mod format;
pub mod model;
pub mod query;
pub mod scene;
pub mod session;
pub mod ui;
