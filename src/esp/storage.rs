//! NVS flash bring-up.

use esp_idf_svc::sys;

use crate::power::hardware::{Storage, StorageError};

const NO_FREE_PAGES: i32 = sys::ESP_ERR_NVS_NO_FREE_PAGES as i32;
const NEW_VERSION_FOUND: i32 = sys::ESP_ERR_NVS_NEW_VERSION_FOUND as i32;

/// The default NVS partition, driven through the raw flash API so the
/// truncated-partition recovery stays in the controller's hands.
#[derive(Default)]
pub struct NvsStorage;

impl NvsStorage {
    pub const fn new() -> Self {
        Self
    }
}

impl Storage for NvsStorage {
    fn init(&mut self) -> Result<(), StorageError> {
        classify(unsafe { sys::nvs_flash_init() })
    }

    fn erase(&mut self) -> Result<(), StorageError> {
        classify(unsafe { sys::nvs_flash_erase() })
    }
}

fn classify(code: sys::esp_err_t) -> Result<(), StorageError> {
    match code {
        sys::ESP_OK => Ok(()),
        NO_FREE_PAGES => Err(StorageError::NoFreePages),
        NEW_VERSION_FOUND => Err(StorageError::NewVersionFound),
        other => Err(StorageError::Other(other)),
    }
}
