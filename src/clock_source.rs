#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSource
{
    InternalOscillator = 0,

    GyroX = 1,
    GyroY = 2,
    GyroZ = 3,

    External32kHz = 4,
    External19MHz = 5,

    // 6 is reserved.

    /// Stops the clock and keeps the timing generator in reset
    Stop = 7,
}

impl ClockSource {
    /// Value of the `CLKSEL` bits in `PWR_MGMT_1`, all other bits (sleep, reset) are left clear.
    /// 
    pub fn as_register(&self) -> u8 {
        (*self) as u8
    }
}

impl Default for ClockSource {
    fn default() -> Self {
        ClockSource::GyroZ
    }
}
