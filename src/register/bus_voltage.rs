//! ### BUS VOLTAGE - supply-side voltage (`0x02`, 16-bit, R)
//!
//! The voltage reading occupies bits 15..3; bit 1 is the conversion-ready
//! flag (CNVR) and bit 0 the math overflow flag (OVF). Decoding returns the
//! full register word - [`crate::Ina219::bus_voltage_raw`] discards the
//! status bits and applies the 4 mV LSB.

use byteorder::{BigEndian, ByteOrder};

use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker type for the BUS VOLTAGE (0x02) register
pub struct BusVoltage;
impl Reg for BusVoltage { const ADDR: u8 = 0x02; }

impl Readable for BusVoltage {
    type Out = i16;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(BigEndian::read_i16(b))
    }
}
