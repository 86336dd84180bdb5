use crate::median::MedianStrategy;

/// Full scale reading of a 10-bit ADC
pub const ADC_MAX_10_BIT: u16 = 1023;

/// Full scale reading of a 12-bit ADC
pub const ADC_MAX_12_BIT: u16 = 4095;

/// Sensor output voltage corresponding to a full scale reading, in millivolts
pub const FULL_SCALE_MILLIVOLTS: u32 = 5000;

/// Platform and filtering settings for a [`crate::DistanceSensor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Highest raw value the ADC can return
    pub adc_max: u16,
    /// How the sample buffer is reduced to a single reading
    pub strategy: MedianStrategy,
}

impl Default for Config {
    /// A 10-bit ADC with the exact sorting median
    fn default() -> Self {
        Self::ten_bit()
    }
}

impl Config {
    /// Settings for a 10-bit ADC, such as on most AVR boards
    pub fn ten_bit() -> Self {
        Self {
            adc_max: ADC_MAX_10_BIT,
            strategy: MedianStrategy::Sort,
        }
    }

    /// Settings for a 12-bit ADC
    pub fn twelve_bit() -> Self {
        Self {
            adc_max: ADC_MAX_12_BIT,
            strategy: MedianStrategy::Sort,
        }
    }

    /// Replaces the median strategy
    pub fn with_strategy(self, strategy: MedianStrategy) -> Self {
        Self { strategy, ..self }
    }

    /// Scales a raw ADC value onto `0..=5000` mV, truncating
    ///
    /// Values above [`Self::adc_max`] are treated as full scale.
    /// An `adc_max` of zero maps everything to 0 mV.
    pub fn to_millivolts(&self, raw: u16) -> u16 {
        let raw = u32::from(raw.min(self.adc_max));

        // At most FULL_SCALE_MILLIVOLTS, so the narrowing is lossless
        (raw * FULL_SCALE_MILLIVOLTS)
            .checked_div(u32::from(self.adc_max))
            .unwrap_or(0) as u16
    }
}
