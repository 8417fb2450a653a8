//! The one-shot boot-to-sleep sequence.
//!
//! One linear flow per execution: storage bring-up (with its single
//! designated retry), pin configuration and latching, wake-reason report,
//! settle delay, timer arming, deep-sleep entry. There is no path back to
//! an earlier step; a restart is a fresh boot, not a transition.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;
use log::{debug, info, warn};

use crate::power::hardware::{DriverError, HoldGpio, SleepControl, Storage, StorageError};
use crate::power::state::{FrequencyScalingPolicy, PinLatch, SleepConfiguration};
use crate::power::wake::WakeReason;

/// Settle interval between reporting the wake reason and arming the timer.
pub const SETTLE_DELAY_MS: u32 = 5_000;

/// Owned bundle of the hardware collaborators the sequence drives.
///
/// Keeping the handles in one place makes the global side effects explicit:
/// everything the cycle touches goes through this struct.
pub struct HardwareState<S, G, P, D> {
    pub storage: S,
    pub gpio: G,
    pub power: P,
    pub delay: D,
}

/// Fatal failure of the boot sequence, named by the step that raised it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CycleError {
    /// Storage could not be brought up, even after the designated erase.
    Storage(StorageError),
    /// The timer wake source could not be armed.
    WakeTimer(DriverError),
    /// The platform rejected a frequency-scaling setting.
    FrequencyScaling(DriverError),
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleError::Storage(err) => write!(f, "storage initialization failed: {}", err),
            CycleError::WakeTimer(err) => {
                write!(f, "arming the timer wake source failed: {}", err)
            }
            CycleError::FrequencyScaling(err) => {
                write!(f, "frequency scaling was rejected: {}", err)
            }
        }
    }
}

impl std::error::Error for CycleError {}

/// Runs the fixed boot-to-sleep sequence exactly once per execution.
pub struct PowerCycleController<S, G, P, D> {
    hw: HardwareState<S, G, P, D>,
    config: SleepConfiguration,
    scaling: Option<FrequencyScalingPolicy>,
}

impl<S, G, P, D> PowerCycleController<S, G, P, D>
where
    S: Storage,
    G: HoldGpio,
    P: SleepControl,
    D: DelayNs,
{
    pub fn new(hw: HardwareState<S, G, P, D>, config: SleepConfiguration) -> Self {
        Self {
            hw,
            config,
            scaling: None,
        }
    }

    /// Apply a frequency-scaling policy around the settle delay.
    pub fn with_frequency_scaling(mut self, policy: FrequencyScalingPolicy) -> Self {
        self.scaling = Some(policy);
        self
    }

    /// Run the sequence. On hardware the final step enters deep sleep and
    /// does not return; the `Ok` value is only reachable with mock
    /// hardware.
    pub fn run_cycle(mut self) -> Result<(), CycleError> {
        self.init_storage()?;

        let latch = self.drive_and_latch();
        debug!("status pin latched: {:?}", latch);

        let reason = WakeReason::from_raw(self.hw.power.wakeup_cause());
        info!("{}", reason);

        info!("Going to sleep in {} seconds", SETTLE_DELAY_MS / 1_000);
        if let Some(policy) = self.scaling {
            self.hw
                .power
                .apply_frequency_scaling(&policy.while_settling())
                .map_err(CycleError::FrequencyScaling)?;
        }
        self.hw.delay.delay_ms(SETTLE_DELAY_MS);
        if let Some(policy) = self.scaling {
            self.hw
                .power
                .apply_frequency_scaling(&policy.before_sleep())
                .map_err(CycleError::FrequencyScaling)?;
        }

        info!("Enabling timer wakeup, {}s", self.config.wake_timer.as_secs());
        self.hw
            .power
            .enable_timer_wakeup(self.config.wake_timer)
            .map_err(CycleError::WakeTimer)?;

        self.hw.power.enter_deep_sleep();
        Ok(())
    }

    /// Bring up storage, with one erase-and-retry for the two recoverable
    /// failure codes. Anything else aborts the boot.
    fn init_storage(&mut self) -> Result<(), CycleError> {
        match self.hw.storage.init() {
            Ok(()) => Ok(()),
            Err(err) if err.needs_erase() => {
                // Partition was truncated or written by a newer format;
                // erase once and retry the initialization.
                warn!("storage needs erase: {}", err);
                self.hw.storage.erase().map_err(CycleError::Storage)?;
                self.hw.storage.init().map_err(CycleError::Storage)
            }
            Err(err) => Err(CycleError::Storage(err)),
        }
    }

    /// Configure the pin, drive it low, then engage the hold latches. The
    /// level has to be in place before the per-pin hold, which freezes
    /// whatever the pin carries at that moment. GPIO failures are reported
    /// but do not stop the sequence.
    fn drive_and_latch(&mut self) -> PinLatch {
        if let Err(err) = self.hw.gpio.configure_output() {
            warn!("pin configuration failed: {}", err);
        }

        let mut latch = PinLatch::driven(PinState::Low);
        if let Err(err) = self.hw.gpio.set_level(PinState::Low) {
            warn!("driving the pin low failed: {}", err);
        }
        match self.hw.gpio.enable_hold() {
            Ok(()) => latch.latch(),
            Err(err) => warn!("holding the pin failed: {}", err),
        }
        if let Err(err) = self.hw.gpio.enable_sleep_hold_all() {
            warn!("enabling the deep-sleep hold failed: {}", err);
        }
        latch
    }
}
