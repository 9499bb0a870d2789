use crate::registers::{range_index, FS_SEL_SHIFT};
use crate::{ADC_HALF_RANGE, SCALE_DECODE_FAULT};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelScaleRange
{
    G2 = 0,
    G4 = 1,
    G8 = 2,
    G16 = 3,
}

impl AccelScaleRange {

    /// Converts the given full scale range setting into the bits one would need to write into the
    /// `ACCEL_CONFIG` register to configure the sensor to use that scale range.
    /// 
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) << FS_SEL_SHIFT
    }

    /// Gets the full scale range currently configured in the `ACCEL_CONFIG` register based on its
    /// contents.
    /// 
    pub fn from_register(value: u8) -> Self {
        match range_index(value) {
            0 => Self::G2,
            1 => Self::G4,
            2 => Self::G8,
            _ => Self::G16,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::G2),
            1 => Some(Self::G4),
            2 => Some(Self::G8),
            3 => Some(Self::G16),
            _ => None,
        }
    }

    /// Largest magnitude (in g) the accelerometer can report with this range.
    /// 
    pub fn full_scale(&self) -> f32 {
        match self {
            Self::G2 => 2.0,
            Self::G4 => 4.0,
            Self::G8 => 8.0,
            Self::G16 => 16.0,
        }
    }

    /// Gets the value of a single count of the raw reading (in g/LSB).
    /// 
    pub fn lsb_scale(&self) -> f32 {
        self.full_scale() / ADC_HALF_RANGE
    }

    /// Decodes a 2 bit range index straight into a g/LSB scale, any index the sensor cannot
    /// produce yields [`SCALE_DECODE_FAULT`].
    /// 
    pub fn scale_for_index(index: u8) -> f32 {
        Self::from_index(index)
            .map(|range| range.lsb_scale())
            .unwrap_or(SCALE_DECODE_FAULT)
    }
}

impl Default for AccelScaleRange {
    fn default() -> Self {
        AccelScaleRange::G4
    }
}
