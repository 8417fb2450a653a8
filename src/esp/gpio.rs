//! The held status pin.

use embedded_hal::digital::PinState;
use esp_idf_svc::hal::gpio::{AnyOutputPin, Pin};
use esp_idf_svc::sys;

use crate::power::hardware::{DriverError, HoldGpio};

/// Output pin with deep-sleep hold, configured through the mask-based SDK
/// call so pulls and interrupts are explicitly off.
pub struct EspHoldGpio {
    pin: i32,
}

impl EspHoldGpio {
    /// Claims the pin. The peripheral is consumed so nothing else can
    /// reconfigure it behind the hold latch.
    pub fn new(pin: AnyOutputPin) -> Self {
        Self { pin: pin.pin() }
    }
}

impl HoldGpio for EspHoldGpio {
    fn configure_output(&mut self) -> Result<(), DriverError> {
        let config = sys::gpio_config_t {
            pin_bit_mask: 1u64 << self.pin,
            mode: sys::gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: sys::gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: sys::gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: sys::gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        super::check(unsafe { sys::gpio_config(&config) })
    }

    fn set_level(&mut self, level: PinState) -> Result<(), DriverError> {
        let raw = u32::from(level == PinState::High);
        super::check(unsafe { sys::gpio_set_level(self.pin, raw) })
    }

    fn enable_hold(&mut self) -> Result<(), DriverError> {
        super::check(unsafe { sys::gpio_hold_en(self.pin) })
    }

    fn enable_sleep_hold_all(&mut self) -> Result<(), DriverError> {
        unsafe { sys::gpio_deep_sleep_hold_en() };
        Ok(())
    }
}
