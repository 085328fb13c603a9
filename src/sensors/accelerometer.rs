//! Accelerometer types and configuration
//!
//! Provides the range and output data rate settings of the KX132 and the
//! conversion of raw samples into g.

use crate::power::PerformanceMode;

/// Accelerometer full-scale range (`GSEL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// ±2g range (power-on default)
    #[default]
    G2 = 0,
    /// ±4g range
    G4 = 1,
    /// ±8g range
    G8 = 2,
    /// ±16g range
    G16 = 3,
}

impl AccelRange {
    /// All ranges, narrowest first
    pub const ALL: [Self; 4] = [Self::G2, Self::G4, Self::G8, Self::G16];

    /// Decode a `GSEL` code
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::G2),
            1 => Some(Self::G4),
            2 => Some(Self::G8),
            3 => Some(Self::G16),
            _ => None,
        }
    }

    /// Full-scale value in g
    #[must_use]
    pub const fn factor(self) -> f32 {
        match self {
            Self::G2 => 2.0,
            Self::G4 => 4.0,
            Self::G8 => 8.0,
            Self::G16 => 16.0,
        }
    }

    /// Sensitivity in LSB/g
    #[must_use]
    pub fn sensitivity(self) -> f32 {
        32768.0 / self.factor()
    }
}

/// Output data rate (`OSA`)
///
/// Codes 0..=9 are available in low power mode, 10..=15 in high performance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputDataRate {
    /// 0.781 Hz
    Hz0_781 = 0,
    /// 1.563 Hz
    Hz1_563 = 1,
    /// 3.125 Hz
    Hz3_125 = 2,
    /// 6.25 Hz
    Hz6_25 = 3,
    /// 12.5 Hz
    Hz12_5 = 4,
    /// 25 Hz
    Hz25 = 5,
    /// 50 Hz (power-on default)
    Hz50 = 6,
    /// 100 Hz
    Hz100 = 7,
    /// 200 Hz
    Hz200 = 8,
    /// 400 Hz
    Hz400 = 9,
    /// 800 Hz
    Hz800 = 10,
    /// 1600 Hz
    Hz1600 = 11,
    /// 3200 Hz
    Hz3200 = 12,
    /// 6400 Hz
    Hz6400 = 13,
    /// 12800 Hz
    Hz12800 = 14,
    /// 25600 Hz
    Hz25600 = 15,
}

impl OutputDataRate {
    /// Decode an `OSA` code, `None` for anything above 15
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0 => Self::Hz0_781,
            1 => Self::Hz1_563,
            2 => Self::Hz3_125,
            3 => Self::Hz6_25,
            4 => Self::Hz12_5,
            5 => Self::Hz25,
            6 => Self::Hz50,
            7 => Self::Hz100,
            8 => Self::Hz200,
            9 => Self::Hz400,
            10 => Self::Hz800,
            11 => Self::Hz1600,
            12 => Self::Hz3200,
            13 => Self::Hz6400,
            14 => Self::Hz12800,
            15 => Self::Hz25600,
            _ => return None,
        })
    }

    /// Output data rate in Hz
    #[must_use]
    pub const fn frequency_hz(self) -> f32 {
        match self {
            Self::Hz0_781 => 0.781,
            Self::Hz1_563 => 1.563,
            Self::Hz3_125 => 3.125,
            Self::Hz6_25 => 6.25,
            Self::Hz12_5 => 12.5,
            Self::Hz25 => 25.0,
            Self::Hz50 => 50.0,
            Self::Hz100 => 100.0,
            Self::Hz200 => 200.0,
            Self::Hz400 => 400.0,
            Self::Hz800 => 800.0,
            Self::Hz1600 => 1600.0,
            Self::Hz3200 => 3200.0,
            Self::Hz6400 => 6400.0,
            Self::Hz12800 => 12800.0,
            Self::Hz25600 => 25600.0,
        }
    }

    /// Whether this rate may be selected while in `mode`
    #[must_use]
    pub const fn is_valid_for(self, mode: PerformanceMode) -> bool {
        let code = self as u8;
        match mode {
            PerformanceMode::HighPerformance => code >= 10,
            PerformanceMode::LowPower => code <= 9,
        }
    }
}

/// Accelerometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// Full-scale range
    pub range: AccelRange,
    /// Performance mode
    pub performance_mode: PerformanceMode,
    /// Output data rate, must be valid for `performance_mode`
    pub output_data_rate: OutputDataRate,
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            range: AccelRange::G2,
            performance_mode: PerformanceMode::LowPower,
            output_data_rate: OutputDataRate::Hz50,
        }
    }
}

impl AccelConfig {
    /// Check that the data rate is allowed in the selected performance mode
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.output_data_rate.is_valid_for(self.performance_mode)
    }
}

/// Accelerometer data in physical units (g-force)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataG {
    /// X-axis acceleration in g
    pub x: f32,
    /// Y-axis acceleration in g
    pub y: f32,
    /// Z-axis acceleration in g
    pub z: f32,
}

impl AccelDataG {
    /// Convert raw samples taken at `range`
    ///
    /// Each axis is `raw / 32768 * factor`.
    #[must_use]
    pub fn from_raw(raw_x: i16, raw_y: i16, raw_z: i16, range: AccelRange) -> Self {
        let factor = range.factor();
        Self {
            x: f32::from(raw_x) / 32768.0 * factor,
            y: f32::from(raw_y) / 32768.0 * factor,
            z: f32::from(raw_z) / 32768.0 * factor,
        }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
