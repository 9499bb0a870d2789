use crate::registers::{range_index, FS_SEL_SHIFT};
use crate::{ADC_HALF_RANGE, SCALE_DECODE_FAULT};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GyroScaleRange
{
    D250 = 0,
    D500 = 1,
    D1000 = 2,
    D2000 = 3,
}

impl GyroScaleRange {

    /// Converts the given full scale range setting into the bits one would need to write into the
    /// `GYRO_CONFIG` register to configure the sensor to use that scale range.
    /// 
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) << FS_SEL_SHIFT
    }

    /// Gets the full scale range currently configured in the `GYRO_CONFIG` register based on its
    /// contents.
    /// 
    pub fn from_register(value: u8) -> Self {
        match range_index(value) {
            0 => Self::D250,
            1 => Self::D500,
            2 => Self::D1000,
            _ => Self::D2000,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::D250),
            1 => Some(Self::D500),
            2 => Some(Self::D1000),
            3 => Some(Self::D2000),
            _ => None,
        }
    }

    /// Largest angular rate (in deg/s) the gyroscope can report with this range.
    /// 
    pub fn full_scale(&self) -> f32 {
        match self {
            Self::D250 => 250.0,
            Self::D500 => 500.0,
            Self::D1000 => 1000.0,
            Self::D2000 => 2000.0,
        }
    }

    /// Gets the value of a single count of the raw reading (in (deg/s)/LSB).
    /// 
    pub fn lsb_scale(&self) -> f32 {
        self.full_scale() / ADC_HALF_RANGE
    }

    /// See [`crate::AccelScaleRange::scale_for_index`].
    pub fn scale_for_index(index: u8) -> f32 {
        Self::from_index(index)
            .map(|range| range.lsb_scale())
            .unwrap_or(SCALE_DECODE_FAULT)
    }
}

impl Default for GyroScaleRange {
    fn default() -> Self {
        GyroScaleRange::D1000
    }
}
