//! Firmware entry point: build the ESP-IDF hardware handle and run the
//! boot-to-sleep cycle once. Only the `espidf` target gets a real body; the
//! host keeps a stub so the library and its tests build anywhere.

// https://docs.esp-rs.org/esp-idf-svc/esp_idf_svc/
#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use core::time::Duration;

    use esp_idf_svc::hal::delay::Delay;
    use esp_idf_svc::hal::peripherals::Peripherals;

    use neoki::esp::{EspHoldGpio, EspPowerControl, NvsStorage};
    use neoki::{HardwareState, PowerCycleController, SleepConfiguration};

    // Deep-sleep duration before the timer wake source fires.
    const WAKE_TIMER: Duration = Duration::from_secs(60);

    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take().expect("Could not take peripherals");
    let pins = peripherals.pins;

    let hw = HardwareState {
        storage: NvsStorage::new(),
        // Built-in LED on the devkit, held low across the sleep transition.
        gpio: EspHoldGpio::new(pins.gpio2.downgrade_output()),
        power: EspPowerControl::new(),
        delay: Delay::default(),
    };

    let controller = PowerCycleController::new(hw, SleepConfiguration::timer_wakeup(WAKE_TIMER));

    #[cfg(feature = "power-scaling")]
    let controller =
        controller.with_frequency_scaling(neoki::FrequencyScalingPolicy::new(80, 10));

    // Does not return once the cycle reaches deep-sleep entry; the next
    // execution is a fresh boot with a new wake cause.
    controller.run_cycle()?;
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("neoki only runs on the ESP32; build it with the espidf toolchain");
}
