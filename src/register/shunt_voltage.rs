//! ### SHUNT VOLTAGE - shunt voltage drop (`0x01`, 16-bit, R)
//!
//! Signed voltage drop across the shunt resistor. The LSB is 10 µV
//! (0.01 mV) regardless of the selected gain; the gain only limits the
//! usable code range. Negative values indicate reverse current flow.

use byteorder::{BigEndian, ByteOrder};

use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker type for the SHUNT VOLTAGE (0x01) register
pub struct ShuntVoltage;
impl Reg for ShuntVoltage { const ADDR: u8 = 0x01; }

impl Readable for ShuntVoltage {
    type Out = i16;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(BigEndian::read_i16(b))
    }
}
