/// Блокирующее сообщение пользователю (`window.alert`)
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(win) => {
            if let Err(e) = win.alert_with_message(message) {
                log::error!("alert failed: {:?}", e);
            }
        }
        None => log::warn!("no window, alert dropped: {}", message),
    }
}
