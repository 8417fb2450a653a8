//! Sleep entry, the wake timer and the power-management hook.

use core::time::Duration;

use esp_idf_svc::sys;

use crate::power::hardware::{DriverError, SleepControl};
#[cfg(feature = "power-scaling")]
use crate::power::state::FrequencyScaling;

/// Deep-sleep driver backed by the RTC domain.
#[derive(Default)]
pub struct EspPowerControl;

impl EspPowerControl {
    pub const fn new() -> Self {
        Self
    }
}

impl SleepControl for EspPowerControl {
    fn wakeup_cause(&self) -> u32 {
        unsafe { sys::esp_sleep_get_wakeup_cause() as u32 }
    }

    fn enable_timer_wakeup(&mut self, after: Duration) -> Result<(), DriverError> {
        super::check(unsafe { sys::esp_sleep_enable_timer_wakeup(after.as_micros() as u64) })
    }

    #[cfg(feature = "power-scaling")]
    fn apply_frequency_scaling(&mut self, setting: &FrequencyScaling) -> Result<(), DriverError> {
        let config = sys::esp_pm_config_t {
            max_freq_mhz: setting.max_freq_mhz as i32,
            min_freq_mhz: setting.min_freq_mhz as i32,
            light_sleep_enable: setting.light_sleep,
        };
        super::check(unsafe {
            sys::esp_pm_configure(
                &config as *const sys::esp_pm_config_t as *const core::ffi::c_void,
            )
        })
    }

    fn enter_deep_sleep(&mut self) {
        unsafe { sys::esp_deep_sleep_start() }
    }
}
