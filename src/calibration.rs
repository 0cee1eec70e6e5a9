//! Calibration presets and the derived calibration profile.
//!
//! The chip scales its CURRENT and POWER registers through a programmable
//! calibration value: `Cal = trunc(0.04096 / (CurrentLSB * Rshunt))`, with
//! the current LSB chosen so that the calibration value fits in 16 bits and
//! the maximum expected current stays inside the shunt full-scale range of
//! the selected gain. All presets assume a 0.1 Ω shunt resistor. The
//! constants below are the fixed results of that derivation and are written
//! as-is, not re-derived at runtime.

use crate::register::config::{
    BusAdcResolution, BusVoltageRange, ConfigFields, Gain, OperatingMode, ShuntAdcResolution,
};

/// Target measurement ranges the driver can calibrate the chip for.
///
/// Each preset fixes the calibration register value, the raw-to-milliamp and
/// raw-to-milliwatt dividers and the accompanying CONFIG register contents.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CalibrationPreset {
    /// 32 V bus range, up to 2 A. Current LSB 100 µA, overflow at 3.2 A.
    Range32V2A,
    /// 32 V bus range, up to 1 A. Current LSB 40 µA, overflow at 1.3 A.
    Range32V1A,
    /// 16 V bus range, up to 400 mA. Current LSB 50 µA, the highest
    /// current resolution of the three presets.
    Range16V400mA,
}

/// Derived calibration state, replaced wholesale by
/// [`crate::Ina219::set_calibration`] and never partially mutated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CalibrationProfile {
    /// Value written to the CALIBRATION (0x05) register.
    pub(crate) value: u16,
    /// Divides a raw current code into milliamps.
    pub(crate) current_divider_ma: u16,
    /// Divides a raw power code into milliwatts. No public accessor consumes
    /// this yet; it is kept alongside the current divider so the pair is
    /// always replaced together.
    #[allow(dead_code)]
    pub(crate) power_divider_mw: u16,
    /// CONFIG register contents that accompany the calibration value.
    pub(crate) config: ConfigFields,
}

impl CalibrationProfile {
    pub(crate) fn from_preset(preset: CalibrationPreset) -> Self {
        match preset {
            // Cal = trunc(0.04096 / (0.0001 * 0.1)) = 4096
            // Current LSB 100 µA -> 1000/100 = 10 counts per mA
            // Power LSB 2 mW -> 2 counts per mW
            CalibrationPreset::Range32V2A => CalibrationProfile {
                value: 4096,
                current_divider_ma: 10,
                power_divider_mw: 2,
                config: Self::config(BusVoltageRange::Fsr32v, Gain::Div8_320mv),
            },
            // Cal = trunc(0.04096 / (0.00004 * 0.1)) = 10240
            // Current LSB 40 µA -> 1000/40 = 25 counts per mA
            // Power LSB 800 µW
            CalibrationPreset::Range32V1A => CalibrationProfile {
                value: 10240,
                current_divider_ma: 25,
                power_divider_mw: 1,
                config: Self::config(BusVoltageRange::Fsr32v, Gain::Div8_320mv),
            },
            // Cal = trunc(0.04096 / (0.00005 * 0.1)) = 8192
            // Current LSB 50 µA -> 1000/50 = 20 counts per mA
            // Power LSB 1 mW
            CalibrationPreset::Range16V400mA => CalibrationProfile {
                value: 8192,
                current_divider_ma: 20,
                power_divider_mw: 1,
                config: Self::config(BusVoltageRange::Fsr16v, Gain::Div1_40mv),
            },
        }
    }

    /// Every preset samples shunt and bus continuously at 12-bit resolution;
    /// only range and gain vary.
    fn config(bus_voltage_range: BusVoltageRange, gain: Gain) -> ConfigFields {
        ConfigFields {
            bus_voltage_range,
            gain,
            bus_adc_resolution: BusAdcResolution::Bits12,
            shunt_adc_resolution: ShuntAdcResolution::Bits12,
            mode: OperatingMode::ShuntAndBusContinuous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::config::Config;
    use crate::register::Writable;

    #[test]
    fn preset_divisors() {
        let p = CalibrationProfile::from_preset(CalibrationPreset::Range32V2A);
        assert_eq!(4096, p.value);
        assert_eq!(10, p.current_divider_ma);
        assert_eq!(2, p.power_divider_mw);

        let p = CalibrationProfile::from_preset(CalibrationPreset::Range32V1A);
        assert_eq!(10240, p.value);
        assert_eq!(25, p.current_divider_ma);
        assert_eq!(1, p.power_divider_mw);

        let p = CalibrationProfile::from_preset(CalibrationPreset::Range16V400mA);
        assert_eq!(8192, p.value);
        assert_eq!(20, p.current_divider_ma);
        assert_eq!(1, p.power_divider_mw);
    }

    #[test]
    fn preset_config_words() {
        let mut buffer = [0u8; 2];

        let p = CalibrationProfile::from_preset(CalibrationPreset::Range32V2A);
        Config::encode(&p.config, &mut buffer);
        assert_eq!([0x3C, 0x1F], buffer);

        let p = CalibrationProfile::from_preset(CalibrationPreset::Range32V1A);
        Config::encode(&p.config, &mut buffer);
        assert_eq!([0x3C, 0x1F], buffer);

        let p = CalibrationProfile::from_preset(CalibrationPreset::Range16V400mA);
        Config::encode(&p.config, &mut buffer);
        assert_eq!([0x04, 0x1F], buffer);
    }

    #[test]
    fn preset_is_idempotent() {
        let a = CalibrationProfile::from_preset(CalibrationPreset::Range32V1A);
        let b = CalibrationProfile::from_preset(CalibrationPreset::Range32V1A);

        assert_eq!(a, b);
    }
}
