use setup::Alert;
use tracing::warn;
use web_sys::Window;

/// Shows messages with the browser's blocking alert dialog.
pub struct WindowAlert {
    window: Window,
}

impl WindowAlert {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Alert for WindowAlert {
    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            warn!("Unable to show alert: {:?}", e);
        }
    }
}
