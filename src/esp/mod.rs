//! ESP-IDF implementations of the hardware seam.
//!
//! Everything here talks to the SDK through `esp_idf_svc::sys` and is only
//! compiled for the `espidf` target.

use esp_idf_svc::sys;

use crate::power::hardware::DriverError;

mod gpio;
mod sleep;
mod storage;

pub use gpio::EspHoldGpio;
pub use sleep::EspPowerControl;
pub use storage::NvsStorage;

/// Convert a raw `esp_err_t` into a result.
fn check(code: sys::esp_err_t) -> Result<(), DriverError> {
    if code == sys::ESP_OK {
        Ok(())
    } else {
        Err(DriverError(code))
    }
}
