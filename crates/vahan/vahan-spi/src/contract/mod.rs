//! Contract module containing collaborator traits

mod metrics_sink;
mod registration_source;
mod trend_classifier;

pub use metrics_sink::MetricsSink;
pub use registration_source::RegistrationSource;
pub use trend_classifier::TrendClassifier;
