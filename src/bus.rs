use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::registers::READ_BIT;
use crate::{BusConfig, Error};

/// Error type of every operation that goes over the bus of a [`DeviceHandle`].
pub type BusError<SPI, CS> = Error<
    <SPI as embedded_hal::spi::ErrorType>::Error,
    <CS as embedded_hal::digital::ErrorType>::Error,
>;

/// The SPI bus and the chip select line of one MPU6000, owned exclusively by its driver.
/// 
/// Each register access is framed by its own select span: the line is pulled low, the bytes are
/// clocked out, the bus is flushed and the line goes high again before control returns to the
/// caller. The line is released even when the transfer itself failed.
/// 
pub struct DeviceHandle<SPI, CS>
{
    spi: SPI,
    cs: CS,
    config: BusConfig,
}

impl<SPI, CS> DeviceHandle<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self::with_config(spi, cs, BusConfig::default())
    }

    pub fn with_config(spi: SPI, cs: CS, config: BusConfig) -> Self {
        DeviceHandle { spi, cs, config }
    }

    /// Timing the SPI peripheral is expected to run at.
    /// 
    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Drives the chip select line high, i.e. puts the device in its idle state.
    /// 
    pub fn deselect(&mut self) -> Result<(), BusError<SPI, CS>> {
        self.cs.set_high().map_err(Error::Pin)
    }

    /// Reads a single register: the address byte with the read bit set followed by one dummy
    /// byte, the reply to which is the register contents.
    /// 
    pub fn read_register(&mut self, register: u8) -> Result<u8, BusError<SPI, CS>> {
        let mut frame = [ register | READ_BIT, 0x00 ];
        self.transaction(|spi| spi.transfer_in_place(&mut frame))?;
        Ok(frame[1])
    }

    /// Writes a single register: the address byte with the read bit cleared followed by the new
    /// value. Whatever the chip clocks back is discarded.
    /// 
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), BusError<SPI, CS>> {
        self.transaction(|spi| spi.write(&[ register & !READ_BIT, value ]))
    }

    /// Reads `data.len()` consecutive registers starting at `register` in one select span, relying
    /// on the chip incrementing the register address after every byte. Nothing else may touch the
    /// bus until the span is closed, which `&mut self` guarantees.
    /// 
    pub fn burst_read(&mut self, register: u8, data: &mut [u8]) -> Result<(), BusError<SPI, CS>> {
        data.fill(0x00);
        self.transaction(|spi| {
            spi.write(&[ register | READ_BIT ])?;
            spi.transfer_in_place(data)
        })
    }

    /// Gives back the bus and the chip select pin.
    /// 
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    fn transaction<R>(
        &mut self,
        f: impl FnOnce(&mut SPI) -> Result<R, SPI::Error>,
    ) -> Result<R, BusError<SPI, CS>> {
        self.cs.set_low().map_err(Error::Pin)?;
        let spi = &mut self.spi;
        let result = f(&mut *spi).and_then(|value| spi.flush().map(|_| value));
        let deselected = self.cs.set_high().map_err(Error::Pin);
        let value = result.map_err(Error::Spi)?;
        deselected?;
        Ok(value)
    }
}
