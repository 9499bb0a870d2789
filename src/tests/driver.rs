use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

use crate::registers::*;
use crate::*;

use super::bus::{read_frame, select_spans, write_frame};
use super::init_logger;

fn sample_burst(response: [u8; 14]) -> Vec<SpiTransaction<u8>> {
    vec![
        SpiTransaction::write_vec(vec![ 0xBB ]),
        SpiTransaction::transfer_in_place(vec![ 0x00; 14 ], response.to_vec()),
        SpiTransaction::flush(),
    ]
}

#[test]
fn test_connection_accepts_only_mpu6000_id() {
    init_logger();
    for (id, expected) in [ (0x68u8, true), (0x00, false), (0x69, false), (0xFF, false), (0x34, false) ] {
        let mut spi = SpiMock::new(&read_frame(0x75, id));
        let mut cs = PinMock::new(&select_spans(1));

        let mut mpu = Mpu6000::new(spi.clone(), cs.clone(), NoopDelay::new());
        assert_eq!(mpu.test_connection(), expected, "id 0x{:02X}", id);

        spi.done();
        cs.done();
    }
}

#[test]
fn initialize_writes_configuration_then_reads_ranges() {
    init_logger();
    let expectations: Vec<SpiTransaction<u8>> = [
        write_frame(0x6B, 0x80),    // reset
        write_frame(0x6B, 0x03),    // PLL with gyro z reference
        write_frame(0x6A, 0x10),    // I2C interface off
        write_frame(0x1C, 0x02),    // 98Hz DLPF
        write_frame(0x1B, 0x10),    // +/- 1000 deg/s
        write_frame(0x1C, 0x08),    // +/- 4g
        write_frame(0x23, 0x00),    // FIFO off
        write_frame(0x38, 0x01),    // data ready interrupt
        read_frame(0x1B, 0x10),
        read_frame(0x1C, 0x08),
    ].concat();
    let mut pins = vec![ PinTransaction::set(PinState::High) ];
    pins.extend(select_spans(10));

    let mut spi = SpiMock::new(&expectations);
    let mut cs = PinMock::new(&pins);

    let mut mpu = Mpu6000::new(spi.clone(), cs.clone(), NoopDelay::new());
    assert!(!mpu.is_initialized());
    mpu.initialize().unwrap();

    assert!(mpu.is_initialized());
    assert_eq!(mpu.scale_factor(), ScaleFactor { accel: 4.0 / 32768.0, gyro: 1000.0 / 32768.0 });

    spi.done();
    cs.done();
}

#[test]
fn resolve_scales_from_config_registers() {
    let expectations = [
        read_frame(ACCEL_CONFIG, 0b1110_0111 | (1 << 3)),
        read_frame(GYRO_CONFIG, 3 << 3),
        read_frame(ACCEL_CONFIG, 0x00),
    ].concat();
    let mut spi = SpiMock::new(&expectations);
    let mut cs = PinMock::new(&select_spans(3));

    let mut mpu = Mpu6000::new(spi.clone(), cs.clone(), NoopDelay::new());
    assert_eq!(mpu.resolve_accel_scale().unwrap(), 4.0 / 32768.0);
    assert_eq!(mpu.resolve_gyro_scale().unwrap(), 2000.0 / 32768.0);
    assert_eq!(mpu.resolve_accel_scale().unwrap(), 2.0 / 32768.0);

    spi.done();
    cs.done();
}

#[test]
fn read_raw_bursts_from_accel_x_high() {
    init_logger();
    let response = [
        0x01, 0x00,
        0x00, 0x10,
        0xC0, 0x00,
        0xF8, 0x30,
        0x00, 0x83,
        0xFF, 0x7D,
        0x10, 0x00,
    ];
    let mut spi = SpiMock::new(&sample_burst(response));
    let mut cs = PinMock::new(&select_spans(1));

    let mut mpu = Mpu6000::new(spi.clone(), cs.clone(), NoopDelay::new());
    let raw = mpu.read_raw().unwrap();
    assert_eq!(raw.accel, [ 256, 16, -16384 ]);
    assert_eq!(raw.temperature, -2000);
    assert_eq!(raw.gyro, [ 131, -131, 4096 ]);

    spi.done();
    cs.done();
}
