use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

// only ui preferences go through here; search results are never stored
pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("nasa_gallery_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a missing key is the normal first-visit case and is not worth a console error
pub fn try_local_storage<T>(key: &str) -> Option<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("nasa_gallery_{}", key);

    match LocalStorage::get(key.clone()) {
        Ok(val) => Some(val),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            None
        }
    }
}
