/// Blocking browser alert; logged instead when no window exists.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    match super::storage::window() {
        Ok(win) => {
            if win.alert_with_message(message).is_err() {
                log::warn!("alert could not be shown: {}", message);
            }
        }
        Err(_) => log::warn!("alert without window: {}", message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    log::warn!("alert: {}", message);
}
