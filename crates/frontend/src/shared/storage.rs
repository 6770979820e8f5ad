use contracts::system::inquiry::CartStorage;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`; недоступное хранилище ведёт себя как пустое
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl CartStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        match get_local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage refused write for '{}'", key);
                }
            }
            None => log::warn!("localStorage unavailable, '{}' not saved", key),
        }
    }
}
