// src/poller.rs

//! Periodic measurement loop around a ready [`Sht40`].
//!
//! Failures are logged and handed to the caller; the loop itself never
//! retries early or stops on its own.

use core::ops::ControlFlow;
use core::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::common::{error::Sht40Error, hal_traits::I2cDevice, timing, types::Measurement};
use crate::driver::Sht40;

pub struct Poller<D, T>
where
    D: I2cDevice,
    T: DelayNs,
{
    sensor: Sht40<D>,
    delay: T,
    period: Duration,
}

impl<D, T> Poller<D, T>
where
    D: I2cDevice,
    T: DelayNs,
{
    /// Polls every [`timing::DEFAULT_POLL_PERIOD`].
    pub fn new(sensor: Sht40<D>, delay: T) -> Self {
        Poller { sensor, delay, period: timing::DEFAULT_POLL_PERIOD }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Takes one measurement and logs the outcome.
    pub fn poll_once(&mut self) -> Result<Measurement, Sht40Error<D::Error>> {
        match self.sensor.read_measurement() {
            Ok(m) => {
                info!("Temperature {} Humidity {}", m.temperature, m.humidity);
                Ok(m)
            }
            Err(e) => {
                error!("Failed to get sensor readings: {}", e.kind().as_str());
                Err(e)
            }
        }
    }

    /// Polls forever, passing each result to `on_result` and sleeping one period in between.
    ///
    /// Returns once `on_result` breaks; no sleep follows the final poll.
    pub fn run<F>(&mut self, mut on_result: F)
    where
        F: FnMut(Result<Measurement, Sht40Error<D::Error>>) -> ControlFlow<()>,
    {
        loop {
            let result = self.poll_once();
            if on_result(result).is_break() {
                return;
            }
            self.sleep();
        }
    }

    fn sleep(&mut self) {
        let ms = u32::try_from(self.period.as_millis()).unwrap_or(u32::MAX);
        self.delay.delay_ms(ms);
    }

    pub fn sensor_mut(&mut self) -> &mut Sht40<D> {
        &mut self.sensor
    }

    pub fn into_inner(self) -> (Sht40<D>, T) {
        (self.sensor, self.delay)
    }
}
