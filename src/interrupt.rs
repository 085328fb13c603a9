//! Tilt position and tap detection
//!
//! The tilt engine (`TPE`) reports the orientation of the device in `TSCP`
//! (current) and `TSPP` (previous). The tap engine (`TDTE`) reports the
//! direction of the last tap in `INS1`. Both use the same one-hot axis layout:
//!
//! | Bit | Tilt | Tap |
//! |---|---|---|
//! | 0 | Face-Up (Z+) | Z+ |
//! | 1 | Face-Down (Z-) | Z- |
//! | 2 | Up (Y+) | Y+ |
//! | 3 | Down (Y-) | Y- |
//! | 4 | Right (X+) | X+ |
//! | 5 | Left (X-) | X- |
//!
//! Tap status stays latched until `INT_REL` is read, see
//! `Kx132Driver::release_interrupt`.
//!
//! # Example
//!
//! ```ignore
//! # use kx132::Kx132Driver;
//! # let mut kx: Kx132Driver<_> = todo!();
//! kx.set_tap_doubletap_enable(true)?;
//! loop {
//!     if let Some(direction) = kx.read_tap_report()? {
//!         // handle tap
//!     }
//!     kx.release_interrupt()?;
//! }
//! # Ok::<(), kx132::Error<()>>(())
//! ```

use core::fmt;

/// Bit index of a one-hot value within the six axis bits
const fn one_hot_index(value: u8) -> Option<u8> {
    if value != 0 && value & (value - 1) == 0 && value < (1 << 6) {
        #[allow(clippy::cast_possible_truncation)]
        let index = value.trailing_zeros() as u8;
        Some(index)
    } else {
        None
    }
}

/// Tilt position reported by `TSCP` / `TSPP`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TiltPosition {
    /// Face-up (Z+)
    FaceUp,
    /// Face-down (Z-)
    FaceDown,
    /// Up (Y+)
    Up,
    /// Down (Y-)
    Down,
    /// Right (X+)
    Right,
    /// Left (X-)
    Left,
}

impl TiltPosition {
    /// Decode a tilt position register
    ///
    /// Returns `None` unless exactly one of bits 0..=5 is set.
    #[must_use]
    pub const fn from_register(value: u8) -> Option<Self> {
        match one_hot_index(value) {
            Some(0) => Some(Self::FaceUp),
            Some(1) => Some(Self::FaceDown),
            Some(2) => Some(Self::Up),
            Some(3) => Some(Self::Down),
            Some(4) => Some(Self::Right),
            Some(5) => Some(Self::Left),
            _ => None,
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FaceUp => "Face-Up State (Z+)",
            Self::FaceDown => "Face-Down State (Z-)",
            Self::Up => "Up State (Y+)",
            Self::Down => "Down State (Y-)",
            Self::Right => "Right State (X+)",
            Self::Left => "Left State (X-)",
        }
    }
}

impl fmt::Display for TiltPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tap direction reported by `INS1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapDirection {
    /// Z positive
    ZPositive,
    /// Z negative
    ZNegative,
    /// Y positive
    YPositive,
    /// Y negative
    YNegative,
    /// X positive
    XPositive,
    /// X negative
    XNegative,
}

impl TapDirection {
    /// Decode the tap status register
    ///
    /// `Ok(None)` when no tap is latched, `Err(value)` when the value is
    /// neither zero nor one-hot.
    pub const fn from_register(value: u8) -> Result<Option<Self>, u8> {
        if value == 0 {
            return Ok(None);
        }
        match one_hot_index(value) {
            Some(0) => Ok(Some(Self::ZPositive)),
            Some(1) => Ok(Some(Self::ZNegative)),
            Some(2) => Ok(Some(Self::YPositive)),
            Some(3) => Ok(Some(Self::YNegative)),
            Some(4) => Ok(Some(Self::XPositive)),
            Some(5) => Ok(Some(Self::XNegative)),
            _ => Err(value),
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ZPositive => "Z Positive (Z+) Reported",
            Self::ZNegative => "Z Negative (Z-) Reported",
            Self::YPositive => "Y Positive (Y+) Reported",
            Self::YNegative => "Y Negative (Y-) Reported",
            Self::XPositive => "X Positive (X+) Reported",
            Self::XNegative => "X Negative (X-) Reported",
        }
    }
}

impl fmt::Display for TapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
