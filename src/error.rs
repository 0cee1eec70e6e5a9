//! Errors that can occur when using the INA219 device.
//!
//! This module provides an error type that encapsulates all possible errors that can occur during communication with the INA219.
//! It is generic over the underlying bus error type.

use crate::register::InvalidRegisterField;

/// This represents all possible errors that can occur when using the INA219 device.
#[derive(Debug)]
pub enum Ina219Error<BusError> {
    /// An error has occurred in the I2C driver
    Bus(BusError),

    /// A current accessor was invoked before any calibration preset was applied.
    ///
    /// The current and power scaling of the chip is undefined until the
    /// calibration register has been programmed, so the driver refuses to
    /// convert readings it cannot scale.
    NotCalibrated,

    /// Reading from a register returned unexpected data. This should not happen in normal circumstances.
    ///
    /// Could possibly indicate a bug in the driver, or less likely, a faulty chip or interference.
    UnexpectedRegisterData(InvalidRegisterField),
}
