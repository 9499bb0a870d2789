
// Register addresses.

pub const GYRO_CONFIG: u8 = 0x01B;  //[4:3] FS_SEL
pub const ACCEL_CONFIG: u8 = 0x01C; //[4:3] AFS_SEL

pub const FIFO_EN: u8 = 0x023;

pub const INT_ENABLE: u8 = 0x038;

pub const ACCEL_XOUT_H: u8 = 0x03B;
pub const ACCEL_XOUT_L: u8 = 0x03C;
pub const ACCEL_YOUT_H: u8 = 0x03D;
pub const ACCEL_YOUT_L: u8 = 0x03E;
pub const ACCEL_ZOUT_H: u8 = 0x03F;
pub const ACCEL_ZOUT_L: u8 = 0x040;

pub const TEMP_OUT_H: u8 = 0x041;
pub const TEMP_OUT_L: u8 = 0x042;

pub const GYRO_XOUT_H: u8 = 0x043;
pub const GYRO_XOUT_L: u8 = 0x044;
pub const GYRO_YOUT_H: u8 = 0x045;
pub const GYRO_YOUT_L: u8 = 0x046;
pub const GYRO_ZOUT_H: u8 = 0x047;
pub const GYRO_ZOUT_L: u8 = 0x048;

pub const USER_CTRL: u8 = 0x06A;
pub const PWR_MGMT_1: u8 = 0x06B;

pub const WHO_AM_I: u8 = 0x075;

// Register bits and values.

/// Set on the address byte of every SPI read, cleared for writes.
pub const READ_BIT: u8 = 0x80;

/// `PWR_MGMT_1`: resets all internal registers to their defaults.
pub const BIT_H_RESET: u8 = 0x80;

/// `USER_CTRL`: disables the primary I2C interface so SPI has sole control.
pub const BIT_I2C_IF_DIS: u8 = 0x10;

/// `INT_ENABLE`: raise the interrupt pin whenever a new sample is ready.
pub const BIT_DATA_RDY_EN: u8 = 0x01;

/// `FIFO_EN`: nothing is pushed into the FIFO.
pub const FIFO_DISABLED: u8 = 0x00;

/// Mask of the 2 bit full scale field in `GYRO_CONFIG` and `ACCEL_CONFIG`.
pub const FS_SEL_MASK: u8 = 0b0001_1000;
pub const FS_SEL_SHIFT: u8 = 3;

/// Extracts the 2 bit full scale index from a `GYRO_CONFIG` or `ACCEL_CONFIG` value.
pub fn range_index(value: u8) -> u8 {
    (value & FS_SEL_MASK) >> FS_SEL_SHIFT
}

/// Number of bytes from `ACCEL_XOUT_H` up to and including `GYRO_ZOUT_L`.
pub const SENSOR_DATA_LEN: usize = (GYRO_ZOUT_L - ACCEL_XOUT_H + 1) as usize;
