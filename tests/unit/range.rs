//! Unit tests for range selection and sample conversion

use crate::common::mock_interface::CNTL1;
use crate::common::{assert_float_eq, create_mock_driver};
use kx132::AccelRange;

const EPSILON: f32 = 1e-6;

#[test]
fn test_conversion_for_every_range() {
    let expected = [
        (AccelRange::G2, 2.0),
        (AccelRange::G4, 4.0),
        (AccelRange::G8, 8.0),
        (AccelRange::G16, 16.0),
    ];

    for (range, factor) in expected {
        let (mut driver, interface) = create_mock_driver();
        driver.set_range(range).unwrap();
        interface.set_accel_data(16384, -16384, 0);

        let data = driver.read_acceleration().unwrap();
        assert_float_eq(data.x, 16384.0 / 32768.0 * factor, EPSILON);
        assert_float_eq(data.y, -16384.0 / 32768.0 * factor, EPSILON);
        assert_float_eq(data.z, 0.0, EPSILON);
    }
}

#[test]
fn test_known_values() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_data(16384, 0, 0);

    driver.set_range(AccelRange::G2).unwrap();
    assert_float_eq(driver.read_acceleration().unwrap().x, 1.0, EPSILON);

    driver.set_range(AccelRange::G16).unwrap();
    assert_float_eq(driver.read_acceleration().unwrap().x, 8.0, EPSILON);
}

#[test]
fn test_second_set_range_wins() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_data(16384, 16384, 16384);

    driver.set_range(AccelRange::G4).unwrap();
    driver.set_range(AccelRange::G8).unwrap();

    assert_eq!(driver.range(), AccelRange::G8);
    let data = driver.read_acceleration().unwrap();
    assert_float_eq(data.x, 4.0, EPSILON);
    assert_float_eq(data.z, 4.0, EPSILON);
}

#[test]
fn test_range_written_to_gsel_bits() {
    let (mut driver, interface) = create_mock_driver();

    for range in AccelRange::ALL {
        driver.set_range(range).unwrap();
        let cntl1 = interface.get_register(CNTL1);
        assert_eq!((cntl1 >> 3) & 0b11, range as u8);
        assert_eq!(cntl1 & 0x80, 0x80, "Device must be back in normal mode");
    }
}

#[test]
fn test_range_is_served_from_cache() {
    let (mut driver, interface) = create_mock_driver();
    driver.set_range(AccelRange::G4).unwrap();
    interface.clear_operations();

    assert_eq!(driver.range(), AccelRange::G4);
    assert!(interface.operations().is_empty());
}

#[test]
fn test_out_of_band_write_desynchronises_cache() {
    let (mut driver, interface) = create_mock_driver();
    driver.set_range(AccelRange::G2).unwrap();

    // Someone else selects ±16g behind the driver's back
    interface.set_register(CNTL1, 0x98);
    interface.set_accel_data(16384, 0, 0);

    assert_eq!(driver.range(), AccelRange::G2);
    assert_float_eq(driver.read_acceleration().unwrap().x, 1.0, EPSILON);
}

#[test]
fn test_raw_read() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_accel_data(-1, 32767, -32768);

    let raw = driver.read_accelerometer_raw().unwrap();
    assert_eq!((raw.x, raw.y, raw.z), (-1, 32767, -32768));
}
