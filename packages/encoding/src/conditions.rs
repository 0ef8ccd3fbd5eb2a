//! Condition distribution pie chart.

use weather_dash_encoding_models::ChartDataset;
use weather_dash_weather_models::{ConditionCount, UNKNOWN_LABEL};

use crate::color_scale::categorical_color;

/// Encodes a ranked condition distribution as a categorical dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionDistributionEncoder {
    max_slices: usize,
}

impl ConditionDistributionEncoder {
    /// Default number of slices.
    pub const DEFAULT_MAX_SLICES: usize = 10;

    /// Creates an encoder that keeps at most `max_slices` entries.
    #[must_use]
    pub const fn new(max_slices: usize) -> Self {
        Self { max_slices }
    }

    /// Maximum number of slices this encoder emits.
    #[must_use]
    pub const fn max_slices(&self) -> usize {
        self.max_slices
    }

    /// Encodes the first `max_slices` entries in delivered order.
    ///
    /// The input is not re-sorted; the backend ranks it. Colors come from
    /// the categorical palette by position only, so they do not depend on
    /// the counts.
    #[must_use]
    pub fn encode(&self, distribution: &[ConditionCount]) -> ChartDataset {
        let take = distribution.len().min(self.max_slices);
        let mut dataset = ChartDataset::with_capacity(take);

        for (index, entry) in distribution.iter().take(take).enumerate() {
            let label = entry.label();
            if label == UNKNOWN_LABEL {
                log::warn!("Condition at position {index} has no name");
            }
            #[allow(clippy::cast_precision_loss)] // counts stay far below 2^52
            let value = entry.count as f64;
            dataset.push(label, Some(value), categorical_color(index));
        }

        dataset
    }
}

impl Default for ConditionDistributionEncoder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_SLICES)
    }
}
