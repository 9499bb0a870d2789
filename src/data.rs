use crate::registers::SENSOR_DATA_LEN;
use crate::SCALE_DECODE_FAULT;

/// One burst of sensor output registers exactly as the chip reports them.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawSample
{
    pub accel: [i16; 3],
    pub temperature: i16,
    pub gyro: [i16; 3],
}

impl RawSample {

    /// Splits the 14 bytes starting at `ACCEL_XOUT_H` into big endian words, in register order:
    /// accel x/y/z, temperature, gyro x/y/z.
    /// 
    pub fn from_be_bytes(data: &[u8; SENSOR_DATA_LEN]) -> Self {
        let word = |i: usize| i16::from_be_bytes([data[i*2], data[i*2+1]]);
        RawSample {
            accel: [word(0), word(1), word(2)],
            temperature: word(3),
            gyro: [word(4), word(5), word(6)],
        }
    }

    /// Temperature of the on chip sensor in degrees celsius.
    /// 
    pub fn temperature_celsius(&self) -> f32 {
        // Formula from the register map data sheet.
        (self.temperature as f32) / 340.0 + 36.53
    }
}

/// Accelerometer values in g, gyroscope values in deg/s.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaledSample
{
    pub accel: [f32; 3],
    pub gyro: [f32; 3],
}

/// Physical value of a single count of the raw readings, resolved from the range the chip
/// reports it is configured with.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor
{
    /// g/LSB
    pub accel: f32,
    /// (deg/s)/LSB
    pub gyro: f32,
}

impl ScaleFactor {

    /// Scale before the ranges have been read back from the chip.
    pub const UNRESOLVED: ScaleFactor = ScaleFactor {
        accel: SCALE_DECODE_FAULT,
        gyro: SCALE_DECODE_FAULT,
    };

    /// False if either component holds the decode fault sentinel (or is otherwise not positive),
    /// in which case scaled samples are garbage.
    /// 
    pub fn is_valid(&self) -> bool {
        self.accel > 0.0 && self.gyro > 0.0
    }

    /// Converts raw counts into physical units, the temperature word is not touched.
    /// 
    pub fn scale(&self, raw: &RawSample) -> ScaledSample {
        let mut scaled = ScaledSample::default();
        for i in 0..3 {
            scaled.accel[i] = (raw.accel[i] as f32) * self.accel;
            scaled.gyro[i] = (raw.gyro[i] as f32) * self.gyro;
        }
        scaled
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        ScaleFactor::UNRESOLVED
    }
}
