pub mod domain;
pub mod error;
pub mod series;
pub mod state;

pub use domain::MetricDomain;
pub use error::{Result, TelemonError};
pub use series::{CoreLoads, Series};
pub use state::MetricsFrame;
