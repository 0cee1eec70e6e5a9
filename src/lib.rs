//! Driver for the TI INA219 high-side bi-directional current/power monitor.
//!
//! The INA219 measures the voltage drop across a shunt resistor together
//! with the supply-side bus voltage and, once a calibration value has been
//! programmed, reports current directly. This driver talks to the chip over
//! any blocking [`embedded_hal::i2c::I2c`] implementation and exposes three
//! calibration presets, raw register access through typed markers, and
//! accessors that convert raw register words into volts, millivolts and
//! milliamps.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ina219_rs::{Address, CalibrationPreset, Ina219, Ina219Result};
//!
//! fn sample<I: embedded_hal::i2c::I2c>(i2c: I) -> Ina219Result<(), I::Error> {
//!     let mut ina219 = Ina219::new_i2c(i2c, Address::default());
//!     ina219.set_calibration(CalibrationPreset::Range32V2A)?;
//!
//!     let bus_voltage = ina219.bus_voltage()?; // V
//!     let shunt_voltage = ina219.shunt_voltage_mv()?; // mV
//!     let current = ina219.current_ma()?; // mA
//!     let load_voltage = bus_voltage + shunt_voltage / 1000.0;
//!     # let _ = (current, load_voltage);
//!     Ok(())
//! }
//! ```
//!
//! # Bus sharing
//!
//! All I/O is blocking and one driver call issues at most two register
//! transactions. To put several devices on one physical bus, wrap it in an
//! exclusive-access device (e.g. `embedded-hal-bus`'s `MutexDevice`) and
//! give each driver its own wrapper; see [`bus`] for details.

#![no_std]

pub mod bus;
pub mod calibration;
pub mod error;
pub mod register;
pub mod testing;

mod ina219;

pub use crate::calibration::CalibrationPreset;
pub use crate::error::Ina219Error;
pub use crate::ina219::{Ina219, Ina219I2c, Ina219Result};

/// State of one of the two address strap pins (A0/A1).
///
/// Each pin can be tied to one of four nets, giving 16 possible bus
/// addresses in total.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddressPin {
    /// Pin tied to ground
    Gnd = 0,
    /// Pin tied to VS+
    Vs = 1,
    /// Pin tied to the SDA line
    Sda = 2,
    /// Pin tied to the SCL line
    Scl = 3,
}

/// 7-bit device address, 0x40..=0x4F depending on how A0 and A1 are strapped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Address(u8);

impl Address {
    /// Computes the device address from the strapping of the A0 and A1 pins.
    pub fn from_pins(a0: AddressPin, a1: AddressPin) -> Self {
        Address(0x40 + (a1 as u8) * 4 + a0 as u8)
    }
}

impl Default for Address {
    /// Both pins grounded (0x40), the most common board layout.
    fn default() -> Self {
        Address::from_pins(AddressPin::Gnd, AddressPin::Gnd)
    }
}

impl From<Address> for u8 {
    fn from(address: Address) -> u8 {
        address.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_from_pins() {
        assert_eq!(0x40, u8::from(Address::from_pins(AddressPin::Gnd, AddressPin::Gnd)));
        assert_eq!(0x41, u8::from(Address::from_pins(AddressPin::Vs, AddressPin::Gnd)));
        assert_eq!(0x44, u8::from(Address::from_pins(AddressPin::Gnd, AddressPin::Vs)));
        assert_eq!(0x4A, u8::from(Address::from_pins(AddressPin::Sda, AddressPin::Sda)));
        assert_eq!(0x4F, u8::from(Address::from_pins(AddressPin::Scl, AddressPin::Scl)));
    }

    #[test]
    fn address_space_is_contiguous() {
        let pins = [AddressPin::Gnd, AddressPin::Vs, AddressPin::Sda, AddressPin::Scl];

        let mut expected = 0x40u8;
        for a1 in pins {
            for a0 in pins {
                assert_eq!(expected, u8::from(Address::from_pins(a0, a1)));
                expected += 1;
            }
        }
    }

    #[test]
    fn default_address() {
        assert_eq!(0x40, u8::from(Address::default()));
    }
}
