//! ### POWER - calibrated power reading (`0x03`, 16-bit, R)
//!
//! Power code scaled by the calibration register. Like CURRENT it reads as
//! zero until calibration has been programmed. The driver keeps a power
//! divider in its calibration profile but exposes no power accessor; this
//! register is reachable through [`crate::Ina219::read`].

use byteorder::{BigEndian, ByteOrder};

use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker type for the POWER (0x03) register
pub struct Power;
impl Reg for Power { const ADDR: u8 = 0x03; }

impl Readable for Power {
    type Out = i16;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(BigEndian::read_i16(b))
    }
}
