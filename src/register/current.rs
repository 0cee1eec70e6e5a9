//! ### CURRENT - calibrated current reading (`0x04`, 16-bit, R)
//!
//! Signed current code scaled by the calibration register. The physical
//! value of one count depends on the active calibration preset. Reads as
//! zero until the calibration register has been programmed.

use byteorder::{BigEndian, ByteOrder};

use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker type for the CURRENT (0x04) register
pub struct Current;
impl Reg for Current { const ADDR: u8 = 0x04; }

impl Readable for Current {
    type Out = i16;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(BigEndian::read_i16(b))
    }
}
