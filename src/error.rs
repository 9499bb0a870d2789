use core::fmt;

/// Failure reported by one of the hardware traits the driver is built on. Faults the sensor
/// itself cannot signal (wrong chip, bad range decode) are not errors, see
/// [`crate::Mpu6000::test_connection`] and [`crate::ScaleFactor::is_valid`].
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<SpiE, PinE>
{
    /// The SPI bus failed to transfer a byte.
    Spi(SpiE),

    /// The chip select pin could not be driven.
    Pin(PinE),
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> core::error::Error for Error<SpiE, PinE> {}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> fmt::Display for Error<SpiE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Spi(err) => write!(f, "SPI bus error: {:?}", err),
            Self::Pin(err) => write!(f, "Chip select pin error: {:?}", err),
        }
    }
}
