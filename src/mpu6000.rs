use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::registers::*;
use crate::{
    AccelScaleRange, BusError, Config, DeviceHandle, GyroScaleRange, RawSample, ScaleFactor,
    ScaledSample, MPU6000_DEVICE_ID, RESET_DELAY_MS,
};

pub struct Mpu6000<SPI, CS, DELAY>
{
    /// SPI bus and chip select line used to talk to the chip.
    bus: DeviceHandle<SPI, CS>,

    /// Used to wait out the reset.
    delay: DELAY,

    config: Config,

    /// Resolved from the chip at the end of `initialize`.
    scale: ScaleFactor,
    initialized: bool,
}

impl<SPI, CS, DELAY> Mpu6000<SPI, CS, DELAY>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new MPU 6000 instance with the default configuration. The SPI bus must already
    /// be set up as described by [`crate::BusConfig::default`].
    ///
    pub fn new(spi: SPI, cs: CS, delay: DELAY) -> Self {
        Self::with_config(spi, cs, delay, Config::default())
    }

    pub fn with_config(spi: SPI, cs: CS, delay: DELAY, config: Config) -> Self {
        Self::from_handle(DeviceHandle::new(spi, cs), delay, config)
    }

    pub fn from_handle(bus: DeviceHandle<SPI, CS>, delay: DELAY, config: Config) -> Self {
        Mpu6000 {
            bus,
            delay,
            config,
            scale: ScaleFactor::UNRESOLVED,
            initialized: false,
        }
    }

    /// Resets the chip and writes the full configuration, then reads the configured ranges back
    /// to work out the scale factors used by [`Self::read_scaled`]. Blocks for at least 100ms.
    ///
    /// None of the configuration writes are verified, a miswired chip only shows up through
    /// [`Self::test_connection`] or an invalid [`Self::scale_factor`].
    ///
    pub fn initialize(&mut self) -> Result<(), BusError<SPI, CS>> {
        log::info!("Configuring MPU6000 with {:?}", self.config);

        self.bus.deselect()?;
        let bus = self.bus.config();
        log::debug!(
            "Expecting SPI bus in {:?}, {:?}, at most {} Hz",
            bus.mode, bus.bit_order, bus.max_frequency_hz
        );

        self.bus.write_register(PWR_MGMT_1, BIT_H_RESET)?;
        self.delay.delay_ms(RESET_DELAY_MS);
        self.bus.write_register(PWR_MGMT_1, self.config.clock_source.as_register())?;

        self.bus.write_register(USER_CTRL, BIT_I2C_IF_DIS)?;

        // Shares ACCEL_CONFIG with the range, so the range write below replaces it.
        self.bus.write_register(ACCEL_CONFIG, self.config.dlpf.as_register())?;
        self.bus.write_register(GYRO_CONFIG, self.config.gyro_range.as_register())?;
        self.bus.write_register(ACCEL_CONFIG, self.config.accel_range.as_register())?;

        // Sampling is paced externally off the data ready interrupt.
        self.bus.write_register(FIFO_EN, FIFO_DISABLED)?;
        self.bus.write_register(INT_ENABLE, BIT_DATA_RDY_EN)?;

        let gyro = self.resolve_gyro_scale()?;
        let accel = self.resolve_accel_scale()?;
        self.scale = ScaleFactor { accel, gyro };
        self.initialized = true;

        log::info!("MPU6000 configured, scale accel={} gyro={}", accel, gyro);
        Ok(())
    }

    /// Checks if the SPI connection with the MPU6000 chip is working as expected, practically
    /// speaking this function just checks if it can read the device ID and if the device ID is
    /// the expected value.
    ///
    pub fn test_connection(&mut self) -> bool {
        match self.device_id() {
            Ok(MPU6000_DEVICE_ID) => true,
            Ok(id) => {
                log::warn!("Unexpected device ID 0x{:02X}", id);
                false
            },
            Err(_) => false,
        }
    }

    /// Gets the contents of the `WHO_AM_I` register.
    ///
    pub fn device_id(&mut self) -> Result<u8, BusError<SPI, CS>> {
        let id = self.bus.read_register(WHO_AM_I)?;
        log::debug!("WHO_AM_I: 0x{:02X}", id);
        Ok(id)
    }

    /// Reads the accelerometer range from `ACCEL_CONFIG` and converts it into g/LSB.
    ///
    pub fn resolve_accel_scale(&mut self) -> Result<f32, BusError<SPI, CS>> {
        let index = self.read_range_index(ACCEL_CONFIG)?;
        log::debug!("Accelerometer range index: {}", index);
        let scale = AccelScaleRange::scale_for_index(index);
        if scale <= 0.0 {
            log::warn!("Could not decode accelerometer range index {}", index);
        }
        Ok(scale)
    }

    /// Reads the gyroscope range from `GYRO_CONFIG` and converts it into (deg/s)/LSB.
    ///
    pub fn resolve_gyro_scale(&mut self) -> Result<f32, BusError<SPI, CS>> {
        let index = self.read_range_index(GYRO_CONFIG)?;
        log::debug!("Gyroscope range index: {}", index);
        let scale = GyroScaleRange::scale_for_index(index);
        if scale <= 0.0 {
            log::warn!("Could not decode gyroscope range index {}", index);
        }
        Ok(scale)
    }

    /// Gets accelerometer, temperature and gyroscope output registers in a single burst.
    ///
    pub fn read_raw(&mut self) -> Result<RawSample, BusError<SPI, CS>> {
        let mut data = [ 0u8; SENSOR_DATA_LEN ];
        self.bus.burst_read(ACCEL_XOUT_H, &mut data)?;
        Ok(RawSample::from_be_bytes(&data))
    }

    /// Same as [`Self::read_raw`] but with accelerometer values in g and gyroscope values in
    /// deg/s, using the scale resolved by [`Self::initialize`].
    ///
    pub fn read_scaled(&mut self) -> Result<ScaledSample, BusError<SPI, CS>> {
        let raw = self.read_raw()?;
        Ok(self.scale.scale(&raw))
    }

    pub fn scale_factor(&self) -> ScaleFactor {
        self.scale
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Destroys the driver, giving back the bus handle and the delay.
    ///
    pub fn release(self) -> (DeviceHandle<SPI, CS>, DELAY) {
        (self.bus, self.delay)
    }

    fn read_range_index(&mut self, register: u8) -> Result<u8, BusError<SPI, CS>> {
        let value = self.bus.read_register(register)?;
        Ok(range_index(value))
    }
}
