//! High-level driver API for the KX132
//!
//! This module maps the typed settings of the KX132 onto the generated register
//! API and takes care of the write ordering the device requires: `GSEL`, `RES`,
//! `OSA`, `TDTE`, `TPE` and `ADPE` must only change while `PC1` = standby.
//! Every setter for one of those fields runs as
//!
//! 1. `PC1` = standby
//! 2. field write (read-modify-write of the owning register)
//! 3. `PC1` = normal
//!
//! No other register is written between 1 and 3.
//!
//! # Partial failure
//!
//! A bus error aborts the sequence where it happens. If step 1 succeeded and a
//! later step failed, the device is left in standby and will not produce new
//! samples. The driver does not roll back; call
//! [`set_operating_mode(OperatingMode::Normal)`](Kx132Driver::set_operating_mode)
//! (or repeat the setter) to resume.
//!
//! # Range cache
//!
//! Raw samples do not say which range produced them. The driver keeps the
//! range it last wrote to `GSEL` and uses it for every conversion. It is never
//! re-read from the device, so a write to `CNTL1` by anything other than this
//! driver leaves the cache stale.

use crate::interrupt::{TapDirection, TiltPosition};
use crate::power::{OperatingMode, PerformanceMode};
use crate::registers::Kx132 as RegisterDevice;
use crate::registers::field_sets::{XadpL, XoutL};
use crate::sensors::{AccelConfig, AccelDataG, AccelRange, OutputDataRate};
use crate::{Error, WHO_AM_I_VALUE};

// Only import RegisterInterface when not using async feature
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Time the device needs to reload its defaults after `SRST`
const SOFT_RESET_TIME_MS: u32 = 2;

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

impl AccelData {
    /// Convert to g using `range`
    ///
    /// # Arguments
    /// * `range` - Range the sample was taken with
    ///
    /// # Example
    /// ```
    /// use kx132::{AccelData, AccelRange};
    ///
    /// let g = AccelData { x: 16384, y: 0, z: -16384 }.to_g(AccelRange::G4);
    /// assert_eq!(g.x, 2.0);
    /// assert_eq!(g.z, -2.0);
    /// ```
    #[must_use]
    pub fn to_g(self, range: AccelRange) -> AccelDataG {
        AccelDataG::from_raw(self.x, self.y, self.z, range)
    }
}

impl From<XoutL> for AccelData {
    fn from(sample: XoutL) -> Self {
        Self {
            x: sample.x(),
            y: sample.y(),
            z: sample.z(),
        }
    }
}

impl From<XadpL> for AccelData {
    fn from(sample: XadpL) -> Self {
        Self {
            x: sample.x(),
            y: sample.y(),
            z: sample.z(),
        }
    }
}

/// Main driver for the KX132
///
/// One driver owns one device. The multi-step setters are not atomic, so the
/// driver must not be shared with anything else addressing the same device
/// without external serialisation.
pub struct Kx132Driver<I> {
    device: RegisterDevice<I>,
    /// Range last successfully written to `GSEL` by this driver.
    ///
    /// Used to scale every sample. Only `set_range`, `configure_accelerometer`
    /// and `soft_reset` change it.
    cached_range: AccelRange,
}

impl<I> Kx132Driver<I> {
    /// Currently selected acceleration range
    ///
    /// This is the cached value, no bus transaction is issued.
    #[must_use]
    pub const fn range(&self) -> AccelRange {
        self.cached_range
    }

    /// Consume the driver and return the underlying interface
    ///
    /// # Example
    /// ```ignore
    /// let i2c = kx.release().release();
    /// ```
    pub fn release(self) -> I {
        self.device.interface
    }
}

#[cfg(not(feature = "async"))]
impl<I> Kx132Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new KX132 driver instance
    ///
    /// Verifies `WHO_AM_I`, then puts the device in normal mode with the ±2g
    /// range selected.
    ///
    /// # Arguments
    /// * `interface` - Register interface, usually an [`I2cInterface`](crate::I2cInterface)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - `WHO_AM_I` does not read [`WHO_AM_I_VALUE`]; nothing is written in that case
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut kx = Kx132Driver::new(interface)?;
    /// ```
    pub fn new(interface: I) -> Result<Self, Error<I::Error>> {
        let mut driver = Self {
            device: RegisterDevice::new(interface),
            cached_range: AccelRange::G2,
        };

        let who_am_i = driver.read_who_am_i()?;
        if who_am_i != WHO_AM_I_VALUE {
            #[cfg(feature = "defmt")]
            defmt::warn!("KX132 not found (WHO_AM_I=0x{:02X})", who_am_i);
            return Err(Error::DeviceNotFound(who_am_i));
        }

        driver.init()?;
        Ok(driver)
    }

    fn init(&mut self) -> Result<(), Error<I::Error>> {
        self.set_operating_mode(OperatingMode::Normal)?;
        self.set_range(AccelRange::G2)
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x3D for a KX132
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.who_am_i().read()?.who_am_i())
    }

    /// Read the operating mode (`PC1`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn operating_mode(&mut self) -> Result<OperatingMode, Error<I::Error>> {
        let cntl1 = self.device.cntl_1().read()?;
        Ok(OperatingMode::from_bit(cntl1.pc_1()))
    }

    /// Set the operating mode (`PC1`)
    ///
    /// Use this to resume measuring after a setter failed half way.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_operating_mode(&mut self, mode: OperatingMode) -> Result<(), Error<I::Error>> {
        self.device.cntl_1().modify(|w| w.set_pc_1(mode.bit()))?;
        Ok(())
    }

    /// Set the acceleration range
    ///
    /// The cache used for sample conversion is updated once `GSEL` has been
    /// written, before the device is put back into normal mode.
    ///
    /// # Arguments
    /// * `range` - New full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. The device may
    /// be left in standby, see the module documentation.
    ///
    /// # Example
    /// ```ignore
    /// kx.set_range(AccelRange::G8)?;
    /// assert_eq!(kx.range(), AccelRange::G8);
    /// ```
    pub fn set_range(&mut self, range: AccelRange) -> Result<(), Error<I::Error>> {
        self.set_operating_mode(OperatingMode::Standby)?;
        self.device.cntl_1().modify(|w| w.set_gsel(range as u8))?;
        self.cached_range = range;
        self.set_operating_mode(OperatingMode::Normal)
    }

    /// Read raw accelerometer data
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accelerometer_raw(&mut self) -> Result<AccelData, Error<I::Error>> {
        // One 48-bit read so the three axes come from the same sample
        Ok(self.device.xout_l().read()?.into())
    }

    /// Read accelerometer data in g
    ///
    /// Scaled with the range last set through this driver.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    ///
    /// # Example
    /// ```ignore
    /// let accel = kx.read_acceleration()?;
    /// let total = accel.magnitude();
    /// ```
    pub fn read_acceleration(&mut self) -> Result<AccelDataG, Error<I::Error>> {
        let raw = self.read_accelerometer_raw()?;
        Ok(raw.to_g(self.cached_range))
    }

    /// Read the performance mode (`RES`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn performance_mode(&mut self) -> Result<PerformanceMode, Error<I::Error>> {
        let cntl1 = self.device.cntl_1().read()?;
        Ok(PerformanceMode::from_bit(cntl1.res()))
    }

    /// Set the performance mode (`RES`)
    ///
    /// The current output data rate is left as is; select a rate valid for the
    /// new mode afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_performance_mode(&mut self, mode: PerformanceMode) -> Result<(), Error<I::Error>> {
        self.set_operating_mode(OperatingMode::Standby)?;
        self.device.cntl_1().modify(|w| w.set_res(mode.bit()))?;
        self.set_operating_mode(OperatingMode::Normal)
    }

    /// Read the output data rate (`OSA`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if `OSA` holds a reserved code, or an error if
    /// communication with the device fails.
    pub fn output_data_rate(&mut self) -> Result<OutputDataRate, Error<I::Error>> {
        let bits = self.device.odcntl().read()?.osa();
        OutputDataRate::from_bits(bits).ok_or(Error::Decode(bits))
    }

    /// Set the output data rate (`OSA`)
    ///
    /// The rate is checked against the performance mode read from the device:
    /// high performance accepts 800 Hz and up, low power 400 Hz and below.
    ///
    /// # Arguments
    /// * `rate` - New output data rate
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the rate is not available in the
    /// current performance mode (nothing is written), or an error if
    /// communication with the device fails.
    ///
    /// # Example
    /// ```ignore
    /// kx.set_performance_mode(PerformanceMode::HighPerformance)?;
    /// kx.set_output_data_rate(OutputDataRate::Hz3200)?;
    /// ```
    pub fn set_output_data_rate(&mut self, rate: OutputDataRate) -> Result<(), Error<I::Error>> {
        let mode = self.performance_mode()?;
        if !rate.is_valid_for(mode) {
            #[cfg(feature = "defmt")]
            defmt::warn!("ODR {} rejected in {}", rate, mode);
            return Err(Error::InvalidArgument);
        }
        self.set_operating_mode(OperatingMode::Standby)?;
        self.device.odcntl().modify(|w| w.set_osa(rate as u8))?;
        self.set_operating_mode(OperatingMode::Normal)
    }

    /// Apply range, performance mode and output data rate in one standby bracket
    ///
    /// `RES` and `GSEL` share `CNTL1` and go out in a single write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the data rate does not match the
    /// performance mode (nothing is written), or an error if communication
    /// with the device fails.
    ///
    /// # Example
    /// ```ignore
    /// kx.configure_accelerometer(AccelConfig {
    ///     range: AccelRange::G4,
    ///     performance_mode: PerformanceMode::HighPerformance,
    ///     output_data_rate: OutputDataRate::Hz3200,
    /// })?;
    /// ```
    pub fn configure_accelerometer(&mut self, config: AccelConfig) -> Result<(), Error<I::Error>> {
        if !config.is_valid() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Rejected accelerometer configuration {}", config);
            return Err(Error::InvalidArgument);
        }

        self.set_operating_mode(OperatingMode::Standby)?;
        self.device.cntl_1().modify(|w| {
            w.set_res(config.performance_mode.bit());
            w.set_gsel(config.range as u8);
        })?;
        self.cached_range = config.range;
        self.device
            .odcntl()
            .modify(|w| w.set_osa(config.output_data_rate as u8))?;
        self.set_operating_mode(OperatingMode::Normal)
    }

    /// Whether the tilt position engine is enabled (`TPE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn tilt_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.cntl_1().read()?.tpe())
    }

    /// Enable/disable the tilt position engine (`TPE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_tilt_enable(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.set_operating_mode(OperatingMode::Standby)?;
        self.device.cntl_1().modify(|w| w.set_tpe(enable))?;
        self.set_operating_mode(OperatingMode::Normal)
    }

    /// Whether the tap/double-tap engine is enabled (`TDTE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn tap_doubletap_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.cntl_1().read()?.tdte())
    }

    /// Enable/disable the tap/double-tap engine (`TDTE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_tap_doubletap_enable(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.set_operating_mode(OperatingMode::Standby)?;
        self.device.cntl_1().modify(|w| w.set_tdte(enable))?;
        self.set_operating_mode(OperatingMode::Normal)
    }

    /// Whether the advanced data path is enabled (`ADPE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn adp_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.cntl_5().read()?.adpe())
    }

    /// Enable/disable the advanced data path (`ADPE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_adp_enable(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.set_operating_mode(OperatingMode::Standby)?;
        self.device.cntl_5().modify(|w| w.set_adpe(enable))?;
        self.set_operating_mode(OperatingMode::Normal)
    }

    /// Read the advanced data path output in g
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_advanced_data_path(&mut self) -> Result<AccelDataG, Error<I::Error>> {
        let raw = AccelData::from(self.device.xadp_l().read()?);
        Ok(raw.to_g(self.cached_range))
    }

    /// Read the current tilt position
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the register is not one-hot, or an error if
    /// communication with the device fails.
    pub fn read_tilt_position(&mut self) -> Result<TiltPosition, Error<I::Error>> {
        let value = self.device.tscp().read()?.position();
        TiltPosition::from_register(value).ok_or(Error::Decode(value))
    }

    /// Read the previous tilt position
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the register is not one-hot, or an error if
    /// communication with the device fails.
    pub fn read_previous_tilt_position(&mut self) -> Result<TiltPosition, Error<I::Error>> {
        let value = self.device.tspp().read()?.position();
        TiltPosition::from_register(value).ok_or(Error::Decode(value))
    }

    /// Read the latched tap direction, `None` if no tap was detected
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the register is neither zero nor one-hot, or
    /// an error if communication with the device fails.
    pub fn read_tap_report(&mut self) -> Result<Option<TapDirection>, Error<I::Error>> {
        let value = self.device.ins_1().read()?.direction();
        TapDirection::from_register(value).map_err(Error::Decode)
    }

    /// Clear latched interrupts
    ///
    /// Reading `INT_REL` is what releases the latch; the value read carries no
    /// information and is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn release_interrupt(&mut self) -> Result<(), Error<I::Error>> {
        self.device.int_rel().read()?;
        Ok(())
    }

    /// Software reset
    ///
    /// Reloads the power-on defaults, then repeats the construction sequence
    /// (identity check, normal mode, ±2g).
    ///
    /// # Arguments
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or the device
    /// does not identify itself after the reset.
    pub fn soft_reset<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.device.cntl_2().modify(|w| w.set_srst(true))?;
        delay.delay_ms(SOFT_RESET_TIME_MS);
        self.cached_range = AccelRange::G2;

        #[cfg(feature = "defmt")]
        defmt::debug!("KX132 soft reset done");

        let who_am_i = self.read_who_am_i()?;
        if who_am_i != WHO_AM_I_VALUE {
            return Err(Error::DeviceNotFound(who_am_i));
        }
        self.init()
    }
}

#[cfg(feature = "async")]
impl<I> Kx132Driver<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Create a new KX132 driver instance
    ///
    /// Verifies `WHO_AM_I`, then puts the device in normal mode with the ±2g
    /// range selected.
    ///
    /// # Arguments
    /// * `interface` - Async register interface, usually an [`I2cInterface`](crate::I2cInterface)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - `WHO_AM_I` does not read [`WHO_AM_I_VALUE`]; nothing is written in that case
    ///
    /// # Example
    /// ```ignore
    /// let mut kx = Kx132Driver::new(I2cInterface::default(i2c)).await?;
    /// ```
    pub async fn new(interface: I) -> Result<Self, Error<I::Error>> {
        let mut driver = Self {
            device: RegisterDevice::new(interface),
            cached_range: AccelRange::G2,
        };

        let who_am_i = driver.read_who_am_i().await?;
        if who_am_i != WHO_AM_I_VALUE {
            #[cfg(feature = "defmt")]
            defmt::warn!("KX132 not found (WHO_AM_I=0x{:02X})", who_am_i);
            return Err(Error::DeviceNotFound(who_am_i));
        }

        driver.init().await?;
        Ok(driver)
    }

    async fn init(&mut self) -> Result<(), Error<I::Error>> {
        self.set_operating_mode(OperatingMode::Normal).await?;
        self.set_range(AccelRange::G2).await
    }

    /// Read the `WHO_AM_I` register (0x3D for a KX132)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.who_am_i().read_async().await?.who_am_i())
    }

    /// Read the operating mode (`PC1`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn operating_mode(&mut self) -> Result<OperatingMode, Error<I::Error>> {
        let cntl1 = self.device.cntl_1().read_async().await?;
        Ok(OperatingMode::from_bit(cntl1.pc_1()))
    }

    /// Set the operating mode (`PC1`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_operating_mode(&mut self, mode: OperatingMode) -> Result<(), Error<I::Error>> {
        self.device
            .cntl_1()
            .modify_async(|w| w.set_pc_1(mode.bit()))
            .await?;
        Ok(())
    }

    /// Set the acceleration range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. The device may
    /// be left in standby, see the module documentation.
    pub async fn set_range(&mut self, range: AccelRange) -> Result<(), Error<I::Error>> {
        self.set_operating_mode(OperatingMode::Standby).await?;
        self.device
            .cntl_1()
            .modify_async(|w| w.set_gsel(range as u8))
            .await?;
        self.cached_range = range;
        self.set_operating_mode(OperatingMode::Normal).await
    }

    /// Read raw accelerometer data
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_accelerometer_raw(&mut self) -> Result<AccelData, Error<I::Error>> {
        Ok(self.device.xout_l().read_async().await?.into())
    }

    /// Read accelerometer data in g
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_acceleration(&mut self) -> Result<AccelDataG, Error<I::Error>> {
        let raw = self.read_accelerometer_raw().await?;
        Ok(raw.to_g(self.cached_range))
    }

    /// Read the performance mode (`RES`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn performance_mode(&mut self) -> Result<PerformanceMode, Error<I::Error>> {
        let cntl1 = self.device.cntl_1().read_async().await?;
        Ok(PerformanceMode::from_bit(cntl1.res()))
    }

    /// Set the performance mode (`RES`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_performance_mode(
        &mut self,
        mode: PerformanceMode,
    ) -> Result<(), Error<I::Error>> {
        self.set_operating_mode(OperatingMode::Standby).await?;
        self.device
            .cntl_1()
            .modify_async(|w| w.set_res(mode.bit()))
            .await?;
        self.set_operating_mode(OperatingMode::Normal).await
    }

    /// Read the output data rate (`OSA`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if `OSA` holds a reserved code, or an error if
    /// communication with the device fails.
    pub async fn output_data_rate(&mut self) -> Result<OutputDataRate, Error<I::Error>> {
        let bits = self.device.odcntl().read_async().await?.osa();
        OutputDataRate::from_bits(bits).ok_or(Error::Decode(bits))
    }

    /// Set the output data rate (`OSA`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the rate is not available in the
    /// current performance mode (nothing is written), or an error if
    /// communication with the device fails.
    pub async fn set_output_data_rate(
        &mut self,
        rate: OutputDataRate,
    ) -> Result<(), Error<I::Error>> {
        let mode = self.performance_mode().await?;
        if !rate.is_valid_for(mode) {
            #[cfg(feature = "defmt")]
            defmt::warn!("ODR {} rejected in {}", rate, mode);
            return Err(Error::InvalidArgument);
        }
        self.set_operating_mode(OperatingMode::Standby).await?;
        self.device
            .odcntl()
            .modify_async(|w| w.set_osa(rate as u8))
            .await?;
        self.set_operating_mode(OperatingMode::Normal).await
    }

    /// Apply range, performance mode and output data rate in one standby bracket
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the data rate does not match the
    /// performance mode (nothing is written), or an error if communication
    /// with the device fails.
    pub async fn configure_accelerometer(
        &mut self,
        config: AccelConfig,
    ) -> Result<(), Error<I::Error>> {
        if !config.is_valid() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Rejected accelerometer configuration {}", config);
            return Err(Error::InvalidArgument);
        }

        self.set_operating_mode(OperatingMode::Standby).await?;
        self.device
            .cntl_1()
            .modify_async(|w| {
                w.set_res(config.performance_mode.bit());
                w.set_gsel(config.range as u8);
            })
            .await?;
        self.cached_range = config.range;
        self.device
            .odcntl()
            .modify_async(|w| w.set_osa(config.output_data_rate as u8))
            .await?;
        self.set_operating_mode(OperatingMode::Normal).await
    }

    /// Whether the tilt position engine is enabled (`TPE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn tilt_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.cntl_1().read_async().await?.tpe())
    }

    /// Enable/disable the tilt position engine (`TPE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_tilt_enable(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.set_operating_mode(OperatingMode::Standby).await?;
        self.device
            .cntl_1()
            .modify_async(|w| w.set_tpe(enable))
            .await?;
        self.set_operating_mode(OperatingMode::Normal).await
    }

    /// Whether the tap/double-tap engine is enabled (`TDTE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn tap_doubletap_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.cntl_1().read_async().await?.tdte())
    }

    /// Enable/disable the tap/double-tap engine (`TDTE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_tap_doubletap_enable(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.set_operating_mode(OperatingMode::Standby).await?;
        self.device
            .cntl_1()
            .modify_async(|w| w.set_tdte(enable))
            .await?;
        self.set_operating_mode(OperatingMode::Normal).await
    }

    /// Whether the advanced data path is enabled (`ADPE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn adp_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.cntl_5().read_async().await?.adpe())
    }

    /// Enable/disable the advanced data path (`ADPE`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_adp_enable(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.set_operating_mode(OperatingMode::Standby).await?;
        self.device
            .cntl_5()
            .modify_async(|w| w.set_adpe(enable))
            .await?;
        self.set_operating_mode(OperatingMode::Normal).await
    }

    /// Read the advanced data path output in g
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_advanced_data_path(&mut self) -> Result<AccelDataG, Error<I::Error>> {
        let raw = AccelData::from(self.device.xadp_l().read_async().await?);
        Ok(raw.to_g(self.cached_range))
    }

    /// Read the current tilt position
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the register is not one-hot, or an error if
    /// communication with the device fails.
    pub async fn read_tilt_position(&mut self) -> Result<TiltPosition, Error<I::Error>> {
        let value = self.device.tscp().read_async().await?.position();
        TiltPosition::from_register(value).ok_or(Error::Decode(value))
    }

    /// Read the previous tilt position
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the register is not one-hot, or an error if
    /// communication with the device fails.
    pub async fn read_previous_tilt_position(&mut self) -> Result<TiltPosition, Error<I::Error>> {
        let value = self.device.tspp().read_async().await?.position();
        TiltPosition::from_register(value).ok_or(Error::Decode(value))
    }

    /// Read the latched tap direction, `None` if no tap was detected
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the register is neither zero nor one-hot, or
    /// an error if communication with the device fails.
    pub async fn read_tap_report(&mut self) -> Result<Option<TapDirection>, Error<I::Error>> {
        let value = self.device.ins_1().read_async().await?.direction();
        TapDirection::from_register(value).map_err(Error::Decode)
    }

    /// Clear latched interrupts by reading `INT_REL`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn release_interrupt(&mut self) -> Result<(), Error<I::Error>> {
        self.device.int_rel().read_async().await?;
        Ok(())
    }

    /// Software reset
    ///
    /// # Arguments
    /// * `delay` - Delay provider implementing `embedded_hal_async::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or the device
    /// does not identify itself after the reset.
    pub async fn soft_reset<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.device
            .cntl_2()
            .modify_async(|w| w.set_srst(true))
            .await?;
        delay.delay_ms(SOFT_RESET_TIME_MS).await;
        self.cached_range = AccelRange::G2;

        #[cfg(feature = "defmt")]
        defmt::debug!("KX132 soft reset done");

        let who_am_i = self.read_who_am_i().await?;
        if who_am_i != WHO_AM_I_VALUE {
            return Err(Error::DeviceNotFound(who_am_i));
        }
        self.init().await
    }
}
