//! ### CONFIG - operating configuration (`0x00`, 16-bit, R/W)
//!
//! Holds five independently-masked sub-fields: bus voltage range, shunt gain,
//! bus ADC resolution, shunt ADC resolution/averaging and operating mode.
//! Writing the register always encodes all five fields; to change a single
//! field without disturbing the others, read the struct, modify it and write
//! it back.

use byteorder::{BigEndian, ByteOrder};

use crate::register::{InvalidRegisterField, Readable, Reg, UnexpectedValue, Writable};

/// Marker type for the CONFIG (0x00) register
pub struct Config;
impl Reg for Config { const ADDR: u8 = 0x00; }

/// The payload for the CONFIG (0x00) register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConfigFields {
    /// Full-scale bus voltage range (BRNG, bit 13).
    pub bus_voltage_range: BusVoltageRange,
    /// Shunt voltage gain / full-scale range (PG, bits 12..11).
    pub gain: Gain,
    /// Bus ADC resolution (BADC, bits 10..7).
    pub bus_adc_resolution: BusAdcResolution,
    /// Shunt ADC resolution and sample averaging (SADC, bits 6..3).
    pub shunt_adc_resolution: ShuntAdcResolution,
    /// Operating mode (MODE, bits 2..0).
    pub mode: OperatingMode,
}

impl Readable for Config {
    type Out = ConfigFields;

    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        let v = BigEndian::read_u16(b);
        Ok(ConfigFields {
            bus_voltage_range: BusVoltageRange::from(((v >> 13) & 0b1) as u8),
            gain: Gain::from(((v >> 11) & 0b11) as u8),
            bus_adc_resolution: BusAdcResolution::try_from(((v >> 7) & 0b1111) as u8)
                .map_err(|e| InvalidRegisterField::new(Self::ADDR, e.0, 7))?,
            shunt_adc_resolution: ShuntAdcResolution::try_from(((v >> 3) & 0b1111) as u8)
                .map_err(|e| InvalidRegisterField::new(Self::ADDR, e.0, 3))?,
            mode: OperatingMode::from((v & 0b111) as u8),
        })
    }
}

impl Writable for Config {
    type In = ConfigFields;

    fn encode(v: &Self::In, out: &mut [u8]) {
        let mut value = 0u16;

        let range: u8 = v.bus_voltage_range.into();
        value |= (range as u16) << 13;

        let gain: u8 = v.gain.into();
        value |= (gain as u16) << 11;

        let badc: u8 = v.bus_adc_resolution.into();
        value |= (badc as u16) << 7;

        let sadc: u8 = v.shunt_adc_resolution.into();
        value |= (sadc as u16) << 3;

        let mode: u8 = v.mode.into();
        value |= mode as u16;

        BigEndian::write_u16(out, value);
    }
}

/// Full-scale bus voltage range (BRNG field).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BusVoltageRange {
    /// 0 - 16 V range
    Fsr16v,
    /// 0 - 32 V range. This is the power-on default.
    Fsr32v,
}

impl From<u8> for BusVoltageRange {
    fn from(field: u8) -> Self {
        match field {
            0 => BusVoltageRange::Fsr16v,
            _ => BusVoltageRange::Fsr32v,
        }
    }
}

impl From<BusVoltageRange> for u8 {
    fn from(v: BusVoltageRange) -> u8 {
        match v {
            BusVoltageRange::Fsr16v => 0,
            BusVoltageRange::Fsr32v => 1,
        }
    }
}

/// Shunt voltage gain (PG field).
///
/// Selects the full-scale shunt voltage range, trading measurable span
/// against resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Gain {
    /// Gain 1, ±40 mV range
    Div1_40mv   = 0b00,
    /// Gain /2, ±80 mV range
    Div2_80mv   = 0b01,
    /// Gain /4, ±160 mV range
    Div4_160mv  = 0b10,
    /// Gain /8, ±320 mV range. This is the power-on default.
    Div8_320mv  = 0b11,
}

impl From<u8> for Gain {
    fn from(field: u8) -> Self {
        match field {
            0b00 => Gain::Div1_40mv,
            0b01 => Gain::Div2_80mv,
            0b10 => Gain::Div4_160mv,
            _ => Gain::Div8_320mv,
        }
    }
}

impl From<Gain> for u8 {
    fn from(v: Gain) -> u8 {
        v as u8
    }
}

/// Bus ADC resolution (BADC field).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BusAdcResolution {
    /// 9-bit conversion, 0..511
    Bits9   = 0b0001,
    /// 10-bit conversion, 0..1023
    Bits10  = 0b0010,
    /// 11-bit conversion, 0..2047
    Bits11  = 0b0100,
    /// 12-bit conversion, 0..4095
    Bits12  = 0b1000,
}

impl TryFrom<u8> for BusAdcResolution {
    type Error = UnexpectedValue;

    fn try_from(field: u8) -> Result<Self, Self::Error> {
        match field {
            0b0001 => Ok(BusAdcResolution::Bits9),
            0b0010 => Ok(BusAdcResolution::Bits10),
            0b0100 => Ok(BusAdcResolution::Bits11),
            0b1000 => Ok(BusAdcResolution::Bits12),
            other => Err(UnexpectedValue(other)),
        }
    }
}

impl From<BusAdcResolution> for u8 {
    fn from(v: BusAdcResolution) -> u8 {
        v as u8
    }
}

/// Shunt ADC resolution and averaging (SADC field).
///
/// Values above 12-bit keep the 12-bit resolution and average the given
/// number of samples, lengthening the conversion time accordingly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShuntAdcResolution {
    /// 1 × 9-bit sample, 84 µs
    Bits9       = 0b0000,
    /// 1 × 10-bit sample, 148 µs
    Bits10      = 0b0001,
    /// 1 × 11-bit sample, 276 µs
    Bits11      = 0b0010,
    /// 1 × 12-bit sample, 532 µs
    Bits12      = 0b0011,
    /// 2 × 12-bit samples averaged, 1.06 ms
    Bits12Avg2  = 0b1001,
    /// 4 × 12-bit samples averaged, 2.13 ms
    Bits12Avg4  = 0b1010,
    /// 8 × 12-bit samples averaged, 4.26 ms
    Bits12Avg8  = 0b1011,
    /// 16 × 12-bit samples averaged, 8.51 ms
    Bits12Avg16 = 0b1100,
    /// 32 × 12-bit samples averaged, 17 ms
    Bits12Avg32 = 0b1101,
    /// 64 × 12-bit samples averaged, 34 ms
    Bits12Avg64 = 0b1110,
    /// 128 × 12-bit samples averaged, 69 ms
    Bits12Avg128 = 0b1111,
}

impl TryFrom<u8> for ShuntAdcResolution {
    type Error = UnexpectedValue;

    fn try_from(field: u8) -> Result<Self, Self::Error> {
        match field {
            0b0000 => Ok(ShuntAdcResolution::Bits9),
            0b0001 => Ok(ShuntAdcResolution::Bits10),
            0b0010 => Ok(ShuntAdcResolution::Bits11),
            0b0011 => Ok(ShuntAdcResolution::Bits12),
            0b1001 => Ok(ShuntAdcResolution::Bits12Avg2),
            0b1010 => Ok(ShuntAdcResolution::Bits12Avg4),
            0b1011 => Ok(ShuntAdcResolution::Bits12Avg8),
            0b1100 => Ok(ShuntAdcResolution::Bits12Avg16),
            0b1101 => Ok(ShuntAdcResolution::Bits12Avg32),
            0b1110 => Ok(ShuntAdcResolution::Bits12Avg64),
            0b1111 => Ok(ShuntAdcResolution::Bits12Avg128),
            other => Err(UnexpectedValue(other)),
        }
    }
}

impl From<ShuntAdcResolution> for u8 {
    fn from(v: ShuntAdcResolution) -> u8 {
        v as u8
    }
}

/// Operating mode (MODE field).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperatingMode {
    PowerDown               = 0b000,
    ShuntTriggered          = 0b001,
    BusTriggered            = 0b010,
    ShuntAndBusTriggered    = 0b011,
    AdcOff                  = 0b100,
    ShuntContinuous         = 0b101,
    BusContinuous           = 0b110,
    /// Continuous simultaneous shunt-and-bus sampling. This is the power-on
    /// default and the mode used by every calibration preset.
    ShuntAndBusContinuous   = 0b111,
}

impl From<u8> for OperatingMode {
    fn from(field: u8) -> Self {
        match field {
            0b000 => OperatingMode::PowerDown,
            0b001 => OperatingMode::ShuntTriggered,
            0b010 => OperatingMode::BusTriggered,
            0b011 => OperatingMode::ShuntAndBusTriggered,
            0b100 => OperatingMode::AdcOff,
            0b101 => OperatingMode::ShuntContinuous,
            0b110 => OperatingMode::BusContinuous,
            _ => OperatingMode::ShuntAndBusContinuous,
        }
    }
}

impl From<OperatingMode> for u8 {
    fn from(v: OperatingMode) -> u8 {
        v as u8
    }
}
