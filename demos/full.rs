//! A more fully-fledged example, showcasing custom configuration and the other methods on [`DistanceSensor`]

use sharp_ir::{AnalogSource, Config, DistanceSensor, Error, MedianStrategy, SensorModel};

/// A simulated 12-bit ADC channel
///
/// It sweeps the sensor output across the long range sensor's band,
/// and fails every read once `fail_after` samples have been taken.
struct Sweep {
    raw: u16,
    taken: usize,
    fail_after: usize,
}

impl AnalogSource for Sweep {
    type Error = &'static str;

    fn configure_as_input(&mut self) -> Result<(), Self::Error> {
        println!("Configuring channel as analog input");
        Ok(())
    }

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        if self.taken >= self.fail_after {
            return Err("ADC conversion timed out");
        }

        self.taken += 1;
        Ok(self.raw)
    }
}

fn main() -> Result<(), Error<&'static str>> {
    let source = Sweep {
        raw: 0,
        taken: 0,
        fail_after: 2000,
    };

    // Model codes from configuration files can be validated up front
    if let Err(e) = SensorModel::try_from(9999) {
        println!("Rejected: {e}");
    }

    // 51 samples per measurement, approximate median, 12-bit ADC
    let config = Config::twelve_bit().with_strategy(MedianStrategy::MedianOfMedians);
    let mut sensor: DistanceSensor<_, 51> = DistanceSensor::from_code(source, 100500, config)?;

    let (near, far) = sensor.model().range_cm();
    println!("Measuring with {:?}, rated for {near} to {far} cm", sensor.model());

    let mut source = sensor.release();
    for raw in (800..=3000).step_by(200) {
        source.raw = raw;

        let mut sensor: DistanceSensor<_, 51> =
            DistanceSensor::new(&mut source, SensorModel::Gp2y0a710k0f, config)?;
        let millivolts = sensor.read_millivolts()?;

        // A distance of 0 means the reading was outside the trusted band
        match sensor.distance()? {
            0 => println!("raw {raw:>4} = {millivolts:>4} mV: out of range"),
            distance => println!("raw {raw:>4} = {millivolts:>4} mV: {distance} cm"),
        }
    }

    // Keep reading until the simulated ADC gives out
    let mut sensor: DistanceSensor<_, 51> =
        DistanceSensor::new(source, SensorModel::Gp2y0a710k0f, config)?;
    loop {
        match sensor.distance() {
            Ok(_) => continue,
            Err(e) => {
                println!("Stopped: {e}");
                break;
            }
        }
    }

    Ok(())
}
