//! Wake-cause classification.
//!
//! The ROM reports why the chip left deep sleep as a raw numeric code. Only
//! five codes name a configured wake source; anything else (first power-on,
//! brown-out, external reset) is reported verbatim so the console output
//! stays useful for diagnostics.

use core::fmt;

// Raw esp_sleep_wakeup_cause_t values. Codes 0 (undefined) and 1 (wake on
// all sources) never name a specific source and fall through to Unknown.
const WAKEUP_EXT0: u32 = 2;
const WAKEUP_EXT1: u32 = 3;
const WAKEUP_TIMER: u32 = 4;
const WAKEUP_TOUCHPAD: u32 = 5;
const WAKEUP_ULP: u32 = 6;

/// Why the chip resumed execution, queried once per boot.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WakeReason {
    /// External signal on an RTC_IO pin (EXT0).
    ExternalRtcIo,
    /// External signal through the RTC controller (EXT1).
    ExternalRtcCntl,
    /// The wake timer expired.
    Timer,
    /// Touchpad activity.
    Touchpad,
    /// The ULP coprocessor requested the wake-up.
    UlpProgram,
    /// Not a deep-sleep wake-up; carries the raw cause code.
    Unknown(u32),
}

impl WakeReason {
    /// Classify a raw wake-cause code as reported by the platform.
    pub const fn from_raw(code: u32) -> Self {
        match code {
            WAKEUP_EXT0 => WakeReason::ExternalRtcIo,
            WAKEUP_EXT1 => WakeReason::ExternalRtcCntl,
            WAKEUP_TIMER => WakeReason::Timer,
            WAKEUP_TOUCHPAD => WakeReason::Touchpad,
            WAKEUP_ULP => WakeReason::UlpProgram,
            other => WakeReason::Unknown(other),
        }
    }
}

impl fmt::Display for WakeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WakeReason::ExternalRtcIo => {
                write!(f, "Wakeup caused by external signal using RTC_IO")
            }
            WakeReason::ExternalRtcCntl => {
                write!(f, "Wakeup caused by external signal using RTC_CNTL")
            }
            WakeReason::Timer => write!(f, "Wakeup caused by timer"),
            WakeReason::Touchpad => write!(f, "Wakeup caused by touchpad"),
            WakeReason::UlpProgram => write!(f, "Wakeup caused by ULP program"),
            WakeReason::Unknown(code) => {
                write!(f, "Wakeup was not caused by deep sleep: {}", code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_specific_reasons() {
        assert_eq!(WakeReason::from_raw(2), WakeReason::ExternalRtcIo);
        assert_eq!(WakeReason::from_raw(3), WakeReason::ExternalRtcCntl);
        assert_eq!(WakeReason::from_raw(4), WakeReason::Timer);
        assert_eq!(WakeReason::from_raw(5), WakeReason::Touchpad);
        assert_eq!(WakeReason::from_raw(6), WakeReason::UlpProgram);
    }

    #[test]
    fn unrecognized_codes_preserve_the_raw_value() {
        assert_eq!(WakeReason::from_raw(0), WakeReason::Unknown(0));
        assert_eq!(WakeReason::from_raw(1), WakeReason::Unknown(1));
        assert_eq!(WakeReason::from_raw(7), WakeReason::Unknown(7));
        assert_eq!(WakeReason::from_raw(99), WakeReason::Unknown(99));
    }

    #[test]
    fn display_lines_match_the_console_output() {
        assert_eq!(WakeReason::Timer.to_string(), "Wakeup caused by timer");
        assert_eq!(
            WakeReason::ExternalRtcIo.to_string(),
            "Wakeup caused by external signal using RTC_IO"
        );
        assert_eq!(
            WakeReason::ExternalRtcCntl.to_string(),
            "Wakeup caused by external signal using RTC_CNTL"
        );
        assert_eq!(WakeReason::Touchpad.to_string(), "Wakeup caused by touchpad");
        assert_eq!(
            WakeReason::UlpProgram.to_string(),
            "Wakeup caused by ULP program"
        );
        assert_eq!(
            WakeReason::Unknown(99).to_string(),
            "Wakeup was not caused by deep sleep: 99"
        );
    }
}
