//! Deep-sleep power cycle demo for the ESP32.
//!
//! Each boot runs one linear sequence: bring up non-volatile storage, drive
//! the status pin low and latch it so the level survives the power-mode
//! transition, report what woke the chip, wait a short settle interval, then
//! re-arm the wake timer and drop back into deep sleep. Execution never
//! loops back within a boot; the next thing that happens is a fresh boot
//! with a new wake cause.
//!
//! The sequencing in [`power`] is generic over the hardware seam traits, so
//! it runs on the host against mock hardware. The ESP-IDF bindings in the
//! `esp` module are only compiled for the `espidf` target.

pub mod power;

#[cfg(target_os = "espidf")]
pub mod esp;

pub use crate::power::controller::{
    CycleError, HardwareState, PowerCycleController, SETTLE_DELAY_MS,
};
pub use crate::power::hardware::{DriverError, HoldGpio, SleepControl, Storage, StorageError};
pub use crate::power::state::{
    FrequencyScaling, FrequencyScalingPolicy, PinLatch, SleepConfiguration,
};
pub use crate::power::wake::WakeReason;
