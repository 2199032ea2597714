use chrono::Local;

/// Current local date and time in the locale's preferred format (`%c`)
pub fn get_local_time() -> String {
    Local::now().format("%c").to_string()
}
