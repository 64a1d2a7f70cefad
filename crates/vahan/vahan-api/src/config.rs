//! Analysis configuration types.

use serde::{Deserialize, Serialize};
use vahan_spi::{Dimension, Granularity, RecordFilter};

/// Configuration for one analysis pass over a record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Period granularity for aggregation and growth
    pub granularity: Granularity,
    /// Grouping dimensions, in order
    pub dimensions: Vec<Dimension>,
    /// Pre-analysis record filter
    pub filter: RecordFilter,
}

impl AnalysisConfig {
    /// Create a new analysis configuration.
    pub fn new(granularity: Granularity, dimensions: Vec<Dimension>) -> Self {
        Self {
            granularity,
            dimensions,
            filter: RecordFilter::new(),
        }
    }

    /// Yearly analysis grouped by category and manufacturer.
    pub fn yearly() -> Self {
        Self::new(
            Granularity::Year,
            vec![Dimension::Category, Dimension::Manufacturer],
        )
    }

    /// Quarterly analysis grouped by category and manufacturer.
    pub fn quarterly() -> Self {
        Self::new(
            Granularity::Quarter,
            vec![Dimension::Category, Dimension::Manufacturer],
        )
    }

    /// Monthly analysis grouped by category and manufacturer.
    pub fn monthly() -> Self {
        Self::new(
            Granularity::Month,
            vec![Dimension::Category, Dimension::Manufacturer],
        )
    }
}

/// Builder for AnalysisConfig.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    granularity: Option<Granularity>,
    dimensions: Vec<Dimension>,
    filter: RecordFilter,
}

impl AnalysisConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the granularity.
    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = Some(granularity);
        self
    }

    /// Append a grouping dimension.
    pub fn dimension(mut self, dimension: Dimension) -> Self {
        self.dimensions.push(dimension);
        self
    }

    /// Set the record filter.
    pub fn filter(mut self, filter: RecordFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<AnalysisConfig, &'static str> {
        Ok(AnalysisConfig {
            granularity: self.granularity.ok_or("granularity is required")?,
            dimensions: self.dimensions,
            filter: self.filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(AnalysisConfig::yearly().granularity, Granularity::Year);
        assert_eq!(AnalysisConfig::quarterly().granularity, Granularity::Quarter);
        assert_eq!(AnalysisConfig::monthly().granularity, Granularity::Month);
        assert_eq!(
            AnalysisConfig::yearly().dimensions,
            vec![Dimension::Category, Dimension::Manufacturer]
        );
    }

    #[test]
    fn test_builder_success() {
        let config = AnalysisConfigBuilder::new()
            .granularity(Granularity::Quarter)
            .dimension(Dimension::Manufacturer)
            .build()
            .unwrap();

        assert_eq!(config.granularity, Granularity::Quarter);
        assert_eq!(config.dimensions, vec![Dimension::Manufacturer]);
        assert!(config.filter.is_empty());
    }

    #[test]
    fn test_builder_missing_granularity() {
        let result = AnalysisConfigBuilder::new()
            .dimension(Dimension::Category)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = AnalysisConfig::monthly();
        let json = serde_json::to_string(&config).unwrap();
        let back: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.granularity, Granularity::Month);
    }
}
