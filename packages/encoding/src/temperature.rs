//! Average temperature by country bar chart.

use weather_dash_encoding_models::ChartDataset;
use weather_dash_weather_models::{CountryTemperature, UNKNOWN_LABEL};

use crate::color_scale::{BarTemperatureScale, ColorScale};

/// Encodes per-country average temperatures as a bar dataset.
///
/// Bars are colored by `S`, which defaults to the coarse
/// [`BarTemperatureScale`]. The map uses the finer
/// [`crate::TemperatureColorScale`]; the two views therefore disagree on
/// colors for the same temperature unless the map scale is passed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryTemperatureEncoder<S = BarTemperatureScale> {
    max_bars: usize,
    scale: S,
}

impl CountryTemperatureEncoder {
    /// Default number of bars.
    pub const DEFAULT_MAX_BARS: usize = 15;

    /// Creates an encoder that keeps at most `max_bars` entries, colored
    /// with the bar chart scale.
    #[must_use]
    pub const fn new(max_bars: usize) -> Self {
        Self {
            max_bars,
            scale: BarTemperatureScale,
        }
    }
}

impl<S: ColorScale> CountryTemperatureEncoder<S> {
    /// Creates an encoder with a custom color scale.
    #[must_use]
    pub const fn with_scale(max_bars: usize, scale: S) -> Self {
        Self { max_bars, scale }
    }

    /// Maximum number of bars this encoder emits.
    #[must_use]
    pub const fn max_bars(&self) -> usize {
        self.max_bars
    }

    /// Encodes the first `max_bars` entries in delivered order.
    ///
    /// Values are passed through untouched, including `None` and `NaN`.
    #[must_use]
    pub fn encode(&self, by_country: &[CountryTemperature]) -> ChartDataset {
        let take = by_country.len().min(self.max_bars);
        let mut dataset = ChartDataset::with_capacity(take);

        for (index, entry) in by_country.iter().take(take).enumerate() {
            let label = entry.label();
            if label == UNKNOWN_LABEL {
                log::warn!("Country at position {index} has no name");
            }
            let temp = entry.average_temperature;
            dataset.push(label, temp, self.scale.color_for(temp));
        }

        dataset
    }
}

impl Default for CountryTemperatureEncoder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_BARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_scale::TemperatureColorScale;

    #[test]
    fn single_hot_country_is_red() {
        let dataset = CountryTemperatureEncoder::new(15)
            .encode(&[CountryTemperature::new("A", Some(26.0))]);
        assert_eq!(dataset.labels(), ["A"]);
        assert_eq!(dataset.values(), [Some(26.0)]);
        assert_eq!(dataset.colors(), [BarTemperatureScale::HOT]);
    }

    #[test]
    fn empty_input_gives_empty_dataset() {
        assert!(CountryTemperatureEncoder::default().encode(&[]).is_empty());
    }

    #[test]
    fn truncates_to_first_fifteen() {
        let input: Vec<CountryTemperature> = (0..20_i32)
            .map(|i| CountryTemperature::new(format!("C{i}"), Some(f64::from(i))))
            .collect();
        let dataset = CountryTemperatureEncoder::default().encode(&input);
        assert_eq!(dataset.len(), 15);
        assert_eq!(dataset.labels()[0], "C0");
        assert_eq!(dataset.labels()[14], "C14");
    }

    #[test]
    fn missing_and_nan_pass_through() {
        let input = vec![
            CountryTemperature::new("Nowhere", None),
            CountryTemperature::new("Glitch", Some(f64::NAN)),
        ];
        let dataset = CountryTemperatureEncoder::default().encode(&input);
        assert_eq!(dataset.values()[0], None);
        assert!(dataset.values()[1].is_some_and(f64::is_nan));
        assert_eq!(dataset.colors()[0], BarTemperatureScale::COOL);
        assert_eq!(dataset.colors()[1], BarTemperatureScale::COOL);
    }

    #[test]
    fn bar_bands() {
        let input = vec![
            CountryTemperature::new("Hot", Some(25.1)),
            CountryTemperature::new("Edge", Some(25.0)),
            CountryTemperature::new("Mild", Some(15.5)),
            CountryTemperature::new("Cool", Some(15.0)),
        ];
        let dataset = CountryTemperatureEncoder::default().encode(&input);
        assert_eq!(
            dataset.colors(),
            [
                BarTemperatureScale::HOT,
                BarTemperatureScale::WARM,
                BarTemperatureScale::WARM,
                BarTemperatureScale::COOL,
            ]
        );
    }

    #[test]
    fn scale_is_swappable() {
        let encoder = CountryTemperatureEncoder::with_scale(15, TemperatureColorScale);
        let dataset = encoder.encode(&[CountryTemperature::new("A", Some(30.0))]);
        assert_eq!(dataset.colors()[0].as_str(), "#FF0000");
    }

    #[test]
    fn missing_country_name_uses_fallback() {
        let input = vec![CountryTemperature {
            country: Some(String::new()),
            average_temperature: Some(12.0),
        }];
        let dataset = CountryTemperatureEncoder::default().encode(&input);
        assert_eq!(dataset.labels(), [UNKNOWN_LABEL]);
        assert_eq!(dataset.values(), [Some(12.0)]);
    }
}
