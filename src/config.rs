use embedded_hal::spi::Mode;

use crate::{AccelScaleRange, ClockSource, DLPFMode, GyroScaleRange, SPI_MAX_FREQUENCY_HZ, SPI_MODE};

/// Settings written to the MPU6000 by [`crate::Mpu6000::initialize`]. These are fixed once the
/// driver is constructed, there are no setters to change them on a running sensor.
/// 
/// The defaults are tuned for a small aircraft: the airframe is not expected to oscillate above
/// ~100Hz and fast spins stay well below 1000 deg/s.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config
{
    pub clock_source: ClockSource,
    pub dlpf: DLPFMode,
    pub gyro_range: GyroScaleRange,
    pub accel_range: AccelScaleRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder
{
    MsbFirst,
    LsbFirst,
}

/// Timing the SPI peripheral must be set up with before it is handed to the driver, the
/// [`embedded_hal::spi::SpiBus`] trait offers no way to change this after construction.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig
{
    pub mode: Mode,
    pub bit_order: BitOrder,
    pub max_frequency_hz: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        BusConfig {
            mode: SPI_MODE,
            bit_order: BitOrder::MsbFirst,
            max_frequency_hz: SPI_MAX_FREQUENCY_HZ,
        }
    }
}
