//! Test doubles for exercising the driver without hardware.

use crate::bus::Bus;
use crate::error::Ina219Error;
use crate::register::{Readable, Writable, REG_BYTES};
use heapless::{LinearMap, Vec};

/// In-memory register file implementing [`Bus`].
///
/// Reads are served from responses staged with [`with_response`] or, in
/// loopback fashion, from the bytes of an earlier write to the same
/// register. Every write is also appended to a log so tests can assert on
/// transaction order and encoding.
///
/// [`with_response`]: FakeBus::with_response
pub struct FakeBus<const N: usize> {
    regs: LinearMap<u8, [u8; REG_BYTES], N>,
    writes: Vec<(u8, [u8; REG_BYTES]), 32>,
}

impl<const N: usize> FakeBus<N> {
    pub fn new() -> Self {
        FakeBus {
            regs: LinearMap::new(),
            writes: Vec::new(),
        }
    }

    /// Stages the raw bytes the next reads of register `R` will return.
    pub fn with_response<R: Readable>(&mut self, data: [u8; REG_BYTES]) {
        self.regs.insert(R::ADDR, data).unwrap();
    }

    /// All writes issued so far, oldest first, as (register, bytes) pairs.
    pub fn writes(&self) -> &[(u8, [u8; REG_BYTES])] {
        &self.writes
    }
}

impl<const N: usize> Default for FakeBus<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Bus for FakeBus<N> {
    type Error = ();

    fn read<R: Readable>(&mut self) -> Result<R::Out, Ina219Error<Self::Error>> {
        match self.regs.get(&R::ADDR) {
            Some(bytes) => R::decode(bytes).map_err(Ina219Error::UnexpectedRegisterData),
            None => panic!("No staged value for register 0x{:02x}", R::ADDR),
        }
    }

    fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Ina219Error<Self::Error>> {
        let mut bytes = [0u8; REG_BYTES];
        W::encode(v, &mut bytes);

        self.writes.push((W::ADDR, bytes)).unwrap();
        self.regs.insert(W::ADDR, bytes).unwrap();

        Ok(())
    }
}
