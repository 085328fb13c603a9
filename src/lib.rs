#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod interrupt;
pub mod power;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use device::{AccelData, Kx132Driver};
pub use interface::I2cInterface;
pub use interrupt::{TapDirection, TiltPosition};
pub use power::{OperatingMode, PerformanceMode};
pub use sensors::{AccelConfig, AccelDataG, AccelRange, OutputDataRate};

/// KX132 I2C address when the ADDR pin is tied to IO_VDD (default: 0x1F)
///
/// Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_ADDR_HIGH: u8 = 0x1F;

/// KX132 I2C address when the ADDR pin is tied to GND (alternative: 0x1E)
///
/// Use [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_ADDR_LOW: u8 = 0x1E;

/// Expected value of the `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0x3D;

/// Driver errors
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// `WHO_AM_I` did not match [`WHO_AM_I_VALUE`] (contains the value read)
    DeviceNotFound(u8),
    /// Setting value outside of its valid domain
    ///
    /// Raised before any register is written, so the device is left untouched.
    InvalidArgument,
    /// A status or position register held a bit pattern that is not one-hot
    /// (contains the raw register value)
    Decode(u8),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
