//! Operating and performance modes
//!
//! `CNTL1.PC1` gates the whole device: gain and timing fields (`GSEL`, `RES`,
//! `TDTE`, `TPE`, `OSA`, `ADPE`) may only be changed in standby. The driver
//! brackets every such write as standby → write → normal.
//!
//! `CNTL1.RES` picks between low power and high performance, which in turn
//! limits the selectable output data rates.

/// Operating mode (`PC1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Configuration may be changed, no new samples
    Standby = 0,
    /// Measuring
    Normal = 1,
}

impl OperatingMode {
    /// Decode the `PC1` bit
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Self::Normal
        } else {
            Self::Standby
        }
    }

    /// Value of the `PC1` bit for this mode
    #[must_use]
    pub const fn bit(self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Performance mode (`RES`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PerformanceMode {
    /// Low power, data rates up to 400 Hz (power-on default)
    #[default]
    LowPower = 0,
    /// High performance, data rates from 800 Hz
    HighPerformance = 1,
}

impl PerformanceMode {
    /// Decode the `RES` bit
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Self::HighPerformance
        } else {
            Self::LowPower
        }
    }

    /// Value of the `RES` bit for this mode
    #[must_use]
    pub const fn bit(self) -> bool {
        matches!(self, Self::HighPerformance)
    }
}
