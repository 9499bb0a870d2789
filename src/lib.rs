#![cfg_attr(not(test), no_std)]

use embedded_hal::spi::{Mode, MODE_3};

pub mod accel_scale_range;
pub use accel_scale_range::*;

pub mod gyro_scale_range;
pub use gyro_scale_range::*;

pub mod clock_source;
pub use clock_source::*;

pub mod dlpf_mode;
pub use dlpf_mode::*;

pub mod config;
pub use config::*;

pub mod data;
pub use data::*;

pub mod error;
pub use error::*;

pub mod bus;
pub use bus::*;

pub mod registers;

pub mod mpu6000;
pub use mpu6000::*;

#[cfg(test)]
mod tests;

/// Contents of the `WHO_AM_I` register of a MPU6000 chip.
/// 
pub const MPU6000_DEVICE_ID: u8 = 0x68;

/// Scale reported when a range field could not be decoded. Any scaled sample computed with it
/// has the wrong sign and magnitude, so callers should check [`ScaleFactor::is_valid`].
/// 
pub const SCALE_DECODE_FAULT: f32 = -1.0;

/// Half the span of the 16 bit signed ADC output, i.e. the count that maps to full scale.
pub const ADC_HALF_RANGE: f32 = 32768.0;

/// Clock idles high, data is sampled on the trailing (rising) edge.
pub const SPI_MODE: Mode = MODE_3;

/// All registers may be accessed at up to 1MHz, only the sensor output registers tolerate more.
pub const SPI_MAX_FREQUENCY_HZ: u32 = 1_000_000;

/// Time the chip needs after a reset before its registers can be accessed reliably.
pub const RESET_DELAY_MS: u32 = 100;
