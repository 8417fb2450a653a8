//! The seam between the sequencing logic and the platform SDK.
//!
//! Each collaborator at the process boundary gets a small trait so the
//! controller can run against the real ESP-IDF bindings on target and
//! against recording mocks on the host.

use core::fmt;
use core::time::Duration;

use embedded_hal::digital::PinState;

use crate::power::state::FrequencyScaling;

/// Raw SDK error code from a driver call.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DriverError(pub i32);

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "driver call failed with code {}", self.0)
    }
}

impl std::error::Error for DriverError {}

/// Storage initialization failure, split by what recovery it allows.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StorageError {
    /// The partition has no free pages left and must be erased.
    NoFreePages,
    /// The partition carries a newer data format and must be erased.
    NewVersionFound,
    /// Any other failure; carries the raw SDK code. Not recoverable.
    Other(i32),
}

impl StorageError {
    /// Whether a single erase-and-retry is the designated recovery.
    pub const fn needs_erase(&self) -> bool {
        matches!(
            self,
            StorageError::NoFreePages | StorageError::NewVersionFound
        )
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NoFreePages => write!(f, "no free pages in the storage partition"),
            StorageError::NewVersionFound => {
                write!(f, "storage partition holds a newer data version")
            }
            StorageError::Other(code) => write!(f, "storage failure with code {}", code),
        }
    }
}

impl std::error::Error for StorageError {}

/// Persistent key-value storage subsystem. Only initialization and the
/// recovery erase are exercised on this code path; no keys are read.
pub trait Storage {
    fn init(&mut self) -> Result<(), StorageError>;
    fn erase(&mut self) -> Result<(), StorageError>;
}

/// The designated output pin and its hold latch.
pub trait HoldGpio {
    /// Put the pin into output mode with pulls and interrupts disabled.
    fn configure_output(&mut self) -> Result<(), DriverError>;

    /// Drive the output level.
    fn set_level(&mut self, level: PinState) -> Result<(), DriverError>;

    /// Latch the current level so it survives deep sleep.
    fn enable_hold(&mut self) -> Result<(), DriverError>;

    /// Keep every RTC-domain pad latched across deep sleep.
    fn enable_sleep_hold_all(&mut self) -> Result<(), DriverError>;
}

/// Power-management and sleep driver.
pub trait SleepControl {
    /// Raw wake-cause code for the current boot.
    fn wakeup_cause(&self) -> u32;

    /// Arm the timer wake source.
    fn enable_timer_wakeup(&mut self, after: Duration) -> Result<(), DriverError>;

    /// Hand a dynamic-frequency-scaling setting to the platform. Platforms
    /// without PM support keep the no-op default.
    fn apply_frequency_scaling(&mut self, setting: &FrequencyScaling) -> Result<(), DriverError> {
        let _ = setting;
        Ok(())
    }

    /// Enter deep sleep. Does not return on hardware; mock implementations
    /// record the call and return so tests can observe it.
    fn enter_deep_sleep(&mut self);
}
