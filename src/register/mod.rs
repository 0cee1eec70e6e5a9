//! Register catalog for the INA219.
//!
//! Every register is a 16-bit big-endian word. Each register gets a marker
//! type implementing [`Reg`], plus [`Readable`] and/or [`Writable`] depending
//! on its access rights. Use the markers with [`crate::Ina219::read`] and
//! [`crate::Ina219::write`].

pub mod bus_voltage;
pub mod calibration;
pub mod config;
pub mod current;
pub mod power;
pub mod shunt_voltage;

/// Number of payload bytes in every INA219 register transfer.
pub const REG_BYTES: usize = 2;

#[derive(Debug)]
pub struct InvalidRegisterField {
    pub register: u8,
    pub value: u8,
    pub bit_offset: u8,
}

impl InvalidRegisterField {
    pub fn new(register: u8, value: u8, bit_offset: u8) -> Self {
        Self { register, value, bit_offset }
    }
}

pub struct UnexpectedValue(pub u8);

pub trait Reg { const ADDR: u8; }

pub trait Readable: Reg {
    type Out;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField>;
}

pub trait Writable: Reg {
    type In;
    fn encode(v: &Self::In, out: &mut [u8]);
}
