//! Contract module containing trait definitions for the analysis stages

mod dataset_provider;
mod scenario_modeler;
mod trend_projector;

pub use dataset_provider::DatasetProvider;
pub use scenario_modeler::ScenarioModeler;
pub use trend_projector::TrendProjector;
