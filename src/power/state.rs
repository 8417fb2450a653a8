//! Value types shared across the power cycle.

use core::time::Duration;

use embedded_hal::digital::PinState;

/// Output level for the designated pin plus the hold-latch flag.
///
/// The level must be driven before the latch engages; latching first would
/// freeze whatever level the pin happened to carry. Releasing the latch is
/// platform-level work on a later boot and is not part of this cycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PinLatch {
    level: PinState,
    held: bool,
}

impl PinLatch {
    /// A freshly driven, not yet latched level.
    pub const fn driven(level: PinState) -> Self {
        Self { level, held: false }
    }

    /// Mark the level as latched against the power-mode transition.
    pub fn latch(&mut self) {
        self.held = true;
    }

    /// The level the pin carries.
    pub const fn level(&self) -> PinState {
        self.level
    }

    /// Whether the hardware hold latch is engaged.
    pub const fn is_held(&self) -> bool {
        self.held
    }
}

/// Parameters for one deep-sleep entry. The wake timer is the only source
/// armed in this design; the configuration is consumed exactly once because
/// execution does not resume after sleep entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SleepConfiguration {
    /// How long to sleep before the timer wake source fires.
    pub wake_timer: Duration,
}

impl SleepConfiguration {
    /// Sleep until the timer expires.
    pub const fn timer_wakeup(wake_timer: Duration) -> Self {
        Self { wake_timer }
    }
}

/// One dynamic-frequency-scaling setting, as handed to the platform.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FrequencyScaling {
    pub max_freq_mhz: u32,
    pub min_freq_mhz: u32,
    /// Let the scheduler drop into light sleep while idle.
    pub light_sleep: bool,
}

/// Frequency bounds applied around the settle delay: light sleep is allowed
/// while settling and switched back off before deep-sleep entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FrequencyScalingPolicy {
    pub max_freq_mhz: u32,
    pub min_freq_mhz: u32,
}

impl FrequencyScalingPolicy {
    pub const fn new(max_freq_mhz: u32, min_freq_mhz: u32) -> Self {
        Self {
            max_freq_mhz,
            min_freq_mhz,
        }
    }

    /// Setting applied before the settle delay.
    pub const fn while_settling(&self) -> FrequencyScaling {
        FrequencyScaling {
            max_freq_mhz: self.max_freq_mhz,
            min_freq_mhz: self.min_freq_mhz,
            light_sleep: true,
        }
    }

    /// Setting restored once the delay has elapsed.
    pub const fn before_sleep(&self) -> FrequencyScaling {
        FrequencyScaling {
            max_freq_mhz: self.max_freq_mhz,
            min_freq_mhz: self.min_freq_mhz,
            light_sleep: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_engages_after_the_level_is_driven() {
        let mut latch = PinLatch::driven(PinState::Low);
        assert_eq!(latch.level(), PinState::Low);
        assert!(!latch.is_held());

        latch.latch();
        assert!(latch.is_held());
        assert_eq!(latch.level(), PinState::Low);
    }

    #[test]
    fn scaling_policy_toggles_light_sleep_around_the_delay() {
        let policy = FrequencyScalingPolicy::new(80, 10);

        let settling = policy.while_settling();
        assert!(settling.light_sleep);
        assert_eq!(settling.max_freq_mhz, 80);
        assert_eq!(settling.min_freq_mhz, 10);

        let resumed = policy.before_sleep();
        assert!(!resumed.light_sleep);
        assert_eq!(resumed.max_freq_mhz, 80);
        assert_eq!(resumed.min_freq_mhz, 10);
    }
}
