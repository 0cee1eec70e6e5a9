use crate::bus::{Bus, I2cBus};
use crate::calibration::{CalibrationPreset, CalibrationProfile};
use crate::error::Ina219Error;
use crate::register::bus_voltage::BusVoltage;
use crate::register::calibration::Calibration;
use crate::register::current::Current;
use crate::register::shunt_voltage::ShuntVoltage;
use crate::register::{config, Readable, Writable};
use crate::Address;

/// Type alias for an Ina219 chip communicating over I2C
pub type Ina219I2c<T> = Ina219<I2cBus<T>>;

/// Type alias used to simplify return types throughout the driver
pub type Ina219Result<T, BusError> = Result<T, Ina219Error<BusError>>;

/// Main INA219 driver struct.
///
/// The handle starts out uncalibrated: bus and shunt voltage can be read
/// immediately, but current accessors return
/// [`Ina219Error::NotCalibrated`] until [`set_calibration`](Self::set_calibration)
/// has been called.
pub struct Ina219<B> {
    bus: B,
    calibration: Option<CalibrationProfile>,
}

impl<T> Ina219I2c<T>
where
    T: embedded_hal::i2c::I2c,
{
    /// Constructs a new Ina219 driver instance that communicates over I2C.
    ///
    /// No register traffic happens here; the chip powers up sampling
    /// continuously with its default configuration, and calibration is only
    /// established once a preset is applied.
    pub fn new_i2c(i2c: T, address: Address) -> Self {
        Ina219 {
            bus: I2cBus::new(i2c, address.into()),
            calibration: None,
        }
    }
}

impl<B> Ina219<B>
where
    B: Bus,
{
    /// Applies a calibration preset.
    ///
    /// Stores the derived calibration profile, writes the CALIBRATION (0x05)
    /// register and then the CONFIG (0x00) register. The two writes are
    /// sequential; both have completed when this method returns. If the
    /// config write fails the chip is left partially configured - the driver
    /// does not roll back, and callers can detect the state by reading the
    /// registers back.
    pub fn set_calibration(&mut self, preset: CalibrationPreset) -> Ina219Result<(), B::Error> {
        let profile = CalibrationProfile::from_preset(preset);

        // Stored before the writes so a later current read re-asserts the
        // intended value even if one of the writes below fails.
        self.calibration = Some(profile);

        self.bus.write::<Calibration>(&profile.value)?;
        self.bus.write::<config::Config>(&profile.config)?;

        Ok(())
    }

    /// Returns the raw bus voltage with the status bits stripped.
    ///
    /// The register word is shifted right by 3 to drop the CNVR and OVF
    /// flags, then multiplied by the 4 mV LSB. The result is in millivolts.
    pub fn bus_voltage_raw(&mut self) -> Ina219Result<i16, B::Error> {
        let word = self.bus.read::<BusVoltage>()?;

        Ok((word >> 3) * 4)
    }

    /// Returns the bus voltage in volts.
    pub fn bus_voltage(&mut self) -> Ina219Result<f64, B::Error> {
        let raw = self.bus_voltage_raw()?;

        Ok(raw as f64 * 0.001)
    }

    /// Returns the raw shunt voltage (16-bit signed register word, 10 µV per count).
    pub fn shunt_voltage_raw(&mut self) -> Ina219Result<i16, B::Error> {
        self.bus.read::<ShuntVoltage>()
    }

    /// Returns the shunt voltage in millivolts (so ±327 mV at gain 8).
    pub fn shunt_voltage_mv(&mut self) -> Ina219Result<f64, B::Error> {
        let raw = self.shunt_voltage_raw()?;

        Ok(raw as f64 * 0.01)
    }

    /// Returns the raw current value (16-bit signed register word).
    ///
    /// A sharp load transient can reset the chip and with it the calibration
    /// register, leaving CURRENT and POWER reading zero. To guard against
    /// that, the stored calibration value is re-written before every current
    /// read, even when nothing has changed it.
    pub fn current_raw(&mut self) -> Ina219Result<i16, B::Error> {
        let profile = self.calibration.ok_or(Ina219Error::NotCalibrated)?;

        self.bus.write::<Calibration>(&profile.value)?;

        self.bus.read::<Current>()
    }

    /// Returns the current in milliamps, scaled by the active preset's
    /// current divider.
    pub fn current_ma(&mut self) -> Ina219Result<f64, B::Error> {
        let profile = self.calibration.ok_or(Ina219Error::NotCalibrated)?;
        let raw = self.current_raw()?;

        Ok(raw as f64 / profile.current_divider_ma as f64)
    }

    /// Read a register using a **typed marker** from [`crate::register`].
    ///
    /// This is the low-level, register-accurate entry point: the transfer
    /// address comes from `R::ADDR` and the two payload bytes are decoded by
    /// `R::decode(...)`, which may return
    /// [`Ina219Error::UnexpectedRegisterData`] if a reserved bit pattern is
    /// observed (only possible for CONFIG). The convenience accessors above
    /// cover the common cases; this generic is here for full control, e.g.
    /// reading back CALIBRATION to detect a partial configuration, or
    /// reading the POWER register the driver exposes no accessor for.
    pub fn read<R: Readable>(&mut self) -> Ina219Result<R::Out, B::Error> {
        self.bus.read::<R>()
    }

    /// Write a register using a **typed marker** from [`crate::register`].
    ///
    /// The value is encoded by `W::encode(...)` and written to `W::ADDR` in
    /// a single two-byte transaction, most significant byte first. Note that
    /// writing CALIBRATION directly does not update the stored calibration
    /// profile; use [`set_calibration`](Self::set_calibration) for that.
    pub fn write<W: Writable>(&mut self, v: &W::In) -> Ina219Result<(), B::Error> {
        self.bus.write::<W>(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::power::Power;
    use crate::testing::FakeBus;

    fn calibrated(preset: CalibrationPreset) -> Ina219<FakeBus<8>> {
        let mut device = Ina219 {
            bus: FakeBus::new(),
            calibration: None,
        };
        device.set_calibration(preset).unwrap();

        device
    }

    fn uncalibrated() -> Ina219<FakeBus<8>> {
        Ina219 {
            bus: FakeBus::new(),
            calibration: None,
        }
    }

    #[test]
    fn bus_voltage_strips_status_bits_and_scales() {
        let mut device = uncalibrated();
        // 0x0FA8 = 4008 -> >>3 = 501 -> *4 mV = 2004 mV
        device.bus.with_response::<BusVoltage>([0x0F, 0xA8]);

        assert_eq!(2004, device.bus_voltage_raw().unwrap());

        let volts = device.bus_voltage().unwrap();
        assert!((volts - 2.004).abs() < 1e-9);
    }

    #[test]
    fn shunt_voltage_scales_to_millivolts() {
        let mut device = uncalibrated();
        device.bus.with_response::<ShuntVoltage>([0x01, 0x40]);

        assert_eq!(320, device.shunt_voltage_raw().unwrap());

        let mv = device.shunt_voltage_mv().unwrap();
        assert!((mv - 3.2).abs() < 1e-9);
    }

    #[test]
    fn current_scaling_follows_preset_divider() {
        let mut device = calibrated(CalibrationPreset::Range32V2A);
        device.bus.with_response::<Current>([0x01, 0xF4]);
        assert_eq!(50.0, device.current_ma().unwrap());

        let mut device = calibrated(CalibrationPreset::Range16V400mA);
        device.bus.with_response::<Current>([0x01, 0xF4]);
        assert_eq!(25.0, device.current_ma().unwrap());
    }

    #[test]
    fn negative_current_is_preserved() {
        let mut device = calibrated(CalibrationPreset::Range32V2A);
        device.bus.with_response::<Current>([0xFF, 0x38]);

        assert_eq!(-200, device.current_raw().unwrap());
    }

    #[test]
    fn current_requires_calibration() {
        let mut device = uncalibrated();

        assert!(matches!(
            device.current_raw(),
            Err(Ina219Error::NotCalibrated)
        ));
        assert!(matches!(
            device.current_ma(),
            Err(Ina219Error::NotCalibrated)
        ));
        // nothing must reach the bus in this state
        assert!(device.bus.writes().is_empty());
    }

    #[test]
    fn set_calibration_writes_calibration_then_config() {
        let device = calibrated(CalibrationPreset::Range32V2A);

        assert_eq!(
            &[(0x05, [0x10, 0x00]), (0x00, [0x3C, 0x1F])],
            device.bus.writes()
        );
    }

    #[test]
    fn set_calibration_is_idempotent() {
        let mut device = calibrated(CalibrationPreset::Range16V400mA);
        let first = device.calibration.unwrap();

        device.set_calibration(CalibrationPreset::Range16V400mA).unwrap();

        assert_eq!(first, device.calibration.unwrap());
        assert_eq!(&device.bus.writes()[..2], &device.bus.writes()[2..]);
    }

    #[test]
    fn current_read_reasserts_calibration() {
        let mut device = calibrated(CalibrationPreset::Range32V1A);
        device.bus.with_response::<Current>([0x00, 0x64]);

        device.current_raw().unwrap();
        device.current_raw().unwrap();

        // one calibration write per read, on top of the two preset writes
        let writes = device.bus.writes();
        assert_eq!(4, writes.len());
        assert_eq!((0x05, [0x28, 0x00]), writes[2]);
        assert_eq!((0x05, [0x28, 0x00]), writes[3]);
    }

    #[test]
    fn register_write_reads_back_over_loopback() {
        let mut device = uncalibrated();

        device.write::<Calibration>(&4096).unwrap();

        assert_eq!(4096, device.read::<Calibration>().unwrap());
    }

    #[test]
    fn power_register_is_reachable_through_generic_read() {
        let mut device = calibrated(CalibrationPreset::Range32V2A);
        device.bus.with_response::<Power>([0x10, 0x00]);

        assert_eq!(4096, device.read::<Power>().unwrap());
    }
}
