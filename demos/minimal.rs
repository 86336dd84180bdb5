//! A basic example showing minimal usage
//!
//! We wire a [`DistanceSensor`] to a simulated ADC channel and print one measurement

use sharp_ir::{AnalogSource, Config, DistanceSensor, SensorModel};

/// Raw readings from a GP2Y0A21Y pointed at a wall roughly 16 cm away
///
/// Note the two spikes, which the median throws out
const READINGS: [u16; 25] = [
    338, 337, 339, 338, 1010, 338, 336, 338, 339, 337, 338, 338, 340, 338, 337, 12, 338, 339, 338,
    337, 338, 338, 339, 338, 337,
];

/// A channel that replays [`READINGS`]
struct Replay {
    cursor: usize,
}

impl AnalogSource for Replay {
    type Error = core::convert::Infallible;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        let sample = READINGS[self.cursor % READINGS.len()];
        self.cursor += 1;
        Ok(sample)
    }
}

fn main() {
    // The default config matches a 10-bit ADC and uses the exact median
    let mut sensor: DistanceSensor<_> =
        match DistanceSensor::new(Replay { cursor: 0 }, SensorModel::Gp2y0a21y, Config::default()) {
            Ok(sensor) => sensor,
            Err(e) => panic!("{e}"),
        };

    match sensor.distance() {
        Ok(distance) => println!("Distance: {distance} cm"),
        Err(e) => println!("Measurement failed: {e}"),
    }
}
