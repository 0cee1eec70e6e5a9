//! Bus transport layer.
//!
//! The [`Bus`] trait is the register-accurate seam between the driver and the
//! physical transport: one `read`/`write` call is exactly one register
//! transaction on the wire. The provided [`I2cBus`] maps a transaction onto a
//! single blocking `embedded-hal` I2C call, which the HAL executes
//! indivisibly. To share one physical bus between several handles or
//! threads, hand each handle an exclusive-access device wrapper (for example
//! `embedded-hal-bus`'s `MutexDevice`); the lock is then held for the
//! duration of one register transaction.

use crate::error::Ina219Error;
use crate::register::{Readable, Writable, REG_BYTES};

pub trait Bus {
    type Error;

    fn read<R: Readable>(&mut self) -> Result<R::Out, Ina219Error<Self::Error>>;

    fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Ina219Error<Self::Error>>;
}

/// Blocking I2C transport for the INA219.
///
/// Owns the device address and a small scratch buffer that every write
/// transaction is serialized into. All access goes through `&mut self`, so
/// use of the buffer cannot interleave between transactions.
pub struct I2cBus<I2cType> {
    i2c: I2cType,
    address: u8,
    buf: [u8; REG_BYTES + 1],
}

impl<I2cType> I2cBus<I2cType>
where
    I2cType: embedded_hal::i2c::I2c,
{
    pub(crate) fn new(i2c: I2cType, address: u8) -> Self {
        Self { i2c, address, buf: [0u8; REG_BYTES + 1] }
    }
}

impl<I2cType> Bus for I2cBus<I2cType>
where
    I2cType: embedded_hal::i2c::I2c,
{
    type Error = <I2cType as embedded_hal::i2c::ErrorType>::Error;

    fn read<R: Readable>(&mut self) -> Result<R::Out, Ina219Error<Self::Error>> {
        let mut data = [0u8; REG_BYTES];
        self.i2c
            .write_read(self.address, &[R::ADDR], &mut data)
            .map_err(Ina219Error::Bus)?;

        R::decode(&data).map_err(Ina219Error::UnexpectedRegisterData)
    }

    fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Ina219Error<Self::Error>> {
        self.buf[0] = W::ADDR;
        W::encode(v, &mut self.buf[1..]);

        self.i2c
            .write(self.address, &self.buf)
            .map_err(Ina219Error::Bus)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    use super::*;
    use crate::register::calibration::Calibration;
    use crate::register::shunt_voltage::ShuntVoltage;

    #[test]
    fn write_sends_register_address_then_msb_first() {
        let expectations = [I2cTransaction::write(0x40, vec![0x05, 0x10, 0x00])];
        let mut bus = I2cBus::new(I2cMock::new(&expectations), 0x40);

        bus.write::<Calibration>(&4096).unwrap();

        bus.i2c.done();
    }

    #[test]
    fn read_decodes_big_endian_signed() {
        let expectations = [I2cTransaction::write_read(
            0x41,
            vec![0x01],
            vec![0xFF, 0x38],
        )];
        let mut bus = I2cBus::new(I2cMock::new(&expectations), 0x41);

        let value = bus.read::<ShuntVoltage>().unwrap();
        assert_eq!(-200, value);

        bus.i2c.done();
    }
}
