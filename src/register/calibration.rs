//! ### CALIBRATION - current/power scaling (`0x05`, 16-bit, R/W)
//!
//! Full-scale calibration value that scales the raw shunt voltage into the
//! CURRENT and POWER registers. Bit 0 is fixed by the hardware and always
//! reads back as zero. The hardware may silently reset this register under
//! a sharp load transient, which is why the driver re-writes it before
//! every current read.

use byteorder::{BigEndian, ByteOrder};

use crate::register::{InvalidRegisterField, Readable, Reg, Writable};

/// Marker type for the CALIBRATION (0x05) register
pub struct Calibration;
impl Reg for Calibration { const ADDR: u8 = 0x05; }

impl Readable for Calibration {
    type Out = u16;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(BigEndian::read_u16(b))
    }
}

impl Writable for Calibration {
    type In = u16;

    fn encode(v: &Self::In, out: &mut [u8]) {
        BigEndian::write_u16(out, *v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calibration_encode() {
        let mut buffer = [0u8; 2];
        Calibration::encode(&4096, &mut buffer);
        assert_eq!([0x10, 0x00], buffer);

        Calibration::encode(&10240, &mut buffer);
        assert_eq!([0x28, 0x00], buffer);
    }

    #[test]
    fn calibration_decode() {
        let reg = Calibration::decode(&[0x20, 0x00]).unwrap();
        assert_eq!(8192, reg);
    }
}
