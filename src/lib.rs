#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

use core::fmt;

mod config;
pub mod median;
pub mod model;

pub use config::{Config, ADC_MAX_10_BIT, ADC_MAX_12_BIT, FULL_SCALE_MILLIVOLTS};
pub use median::MedianStrategy;
pub use model::{SensorModel, UnknownModel};

/// Number of samples taken per measurement unless another count is chosen
pub const DEFAULT_SAMPLE_COUNT: usize = 25;

/// An analog input channel that a sensor's output is wired to
///
/// Implement this over your HAL's ADC and pin types.
/// The channel itself is the opaque handle: a [`DistanceSensor`] only ever talks to it through this trait.
pub trait AnalogSource {
    /// Error returned by the underlying hardware
    type Error;

    /// Prepares the channel for analog reads
    ///
    /// Called once when a [`DistanceSensor`] is constructed. Does nothing by default.
    fn configure_as_input(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Takes a single raw ADC reading
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

impl<S: AnalogSource + ?Sized> AnalogSource for &mut S {
    type Error = S::Error;

    fn configure_as_input(&mut self) -> Result<(), Self::Error> {
        (**self).configure_as_input()
    }

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        (**self).read_raw()
    }
}

/// Errors from constructing or reading a [`DistanceSensor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The numeric model code does not name a supported sensor
    UnknownModel(u32),
    /// The analog source could not be configured
    Configure(E),
    /// A sample could not be read from the analog source
    Read(E),
    /// The sensor was built with a sample count of zero
    NoSamples,
}

impl<E> From<UnknownModel> for Error<E> {
    fn from(err: UnknownModel) -> Self {
        Self::UnknownModel(err.0)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownModel(code) => fmt::Display::fmt(&UnknownModel(*code), f),
            Self::Configure(e) => write!(f, "failed to configure analog input: {e:?}"),
            Self::Read(e) => write!(f, "failed to read analog sample: {e:?}"),
            Self::NoSamples => write!(f, "sample count is zero"),
        }
    }
}

/// A Sharp infrared distance sensor on an analog input
///
/// Every call to [`Self::distance`] takes `N` raw samples back to back,
/// reduces them with the configured [`MedianStrategy`] and converts the result
/// with the curve for the sensor's [`SensorModel`].
///
/// `N` should be odd. With an even count, the upper of the two middle samples is used.
#[derive(Debug)]
pub struct DistanceSensor<S, const N: usize = DEFAULT_SAMPLE_COUNT> {
    /// Channel the sensor output is wired to
    source: S,
    /// Which sensor is attached, fixed for the lifetime of the driver
    model: SensorModel,
    /// ADC resolution and filtering settings
    config: Config,
}

impl<S: AnalogSource, const N: usize> DistanceSensor<S, N> {
    /// Constructs a new [`Self`], configuring `source` as an analog input
    ///
    /// Fails with [`Error::Configure`] if the source cannot be configured.
    pub fn new(
        mut source: S,
        model: SensorModel,
        config: Config,
    ) -> Result<Self, Error<S::Error>> {
        if N % 2 == 0 {
            #[cfg(feature = "log")]
            log::warn!(
                "Got even sample count: {}. The median will be biased upward.",
                N
            );
        }

        source.configure_as_input().map_err(Error::Configure)?;

        #[cfg(feature = "log")]
        log::debug!(
            "Sharp sensor {} ready: {} samples, adc max {}, {:?}",
            model.code(),
            N,
            config.adc_max,
            config.strategy
        );

        Ok(Self {
            source,
            model,
            config,
        })
    }

    /// Like [`Self::new`], but takes the numeric model code (e.g. `1080`)
    ///
    /// Fails with [`Error::UnknownModel`] before touching `source` if the code is not recognized.
    pub fn from_code(source: S, code: u32, config: Config) -> Result<Self, Error<S::Error>> {
        let model = SensorModel::try_from(code)?;
        Self::new(source, model, config)
    }

    /// The attached sensor model
    pub fn model(&self) -> SensorModel {
        self.model
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gives back the analog source
    pub fn release(self) -> S {
        self.source
    }

    /// Reads `N` raw samples with no delay in between
    ///
    /// The first failing read aborts the whole batch.
    pub fn read_samples(&mut self) -> Result<[u16; N], Error<S::Error>> {
        let mut samples = [0; N];
        for sample in samples.iter_mut() {
            *sample = self.source.read_raw().map_err(Error::Read)?;
        }

        Ok(samples)
    }

    /// Reads a batch of samples and reduces it to one raw value
    pub fn read_median(&mut self) -> Result<u16, Error<S::Error>> {
        let mut samples = self.read_samples()?;

        self.config
            .strategy
            .representative(&mut samples)
            .ok_or(Error::NoSamples)
    }

    /// Reads the filtered sensor output voltage in millivolts
    pub fn read_millivolts(&mut self) -> Result<u16, Error<S::Error>> {
        let median = self.read_median()?;
        let millivolts = self.config.to_millivolts(median);

        #[cfg(feature = "log")]
        log::trace!("Median raw value {} is {} mV", median, millivolts);

        Ok(millivolts)
    }

    /// Measures the distance in whole centimeters
    ///
    /// Returns `Ok(0)` when the reading is outside the range the model trusts
    /// (only the GP2Y0A710K0F rejects readings). Distances too large to represent,
    /// such as from a 0 mV reading, saturate at [`u16::MAX`].
    pub fn distance(&mut self) -> Result<u16, Error<S::Error>> {
        let millivolts = self.read_millivolts()?;
        let distance = self.model.distance_cm(f64::from(millivolts));

        #[cfg(feature = "log")]
        log::trace!("{} mV is {} cm", millivolts, distance);

        // Float to int casts truncate toward zero and saturate
        Ok(distance as u16)
    }
}
