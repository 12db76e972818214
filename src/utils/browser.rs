// ============================================================================
// BROWSER PORTS - blocking dialogs and navigation
// ============================================================================

/// `window.confirm` / `window.alert`
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Page navigation (`goto`)
pub trait Navigator {
    /// Path of the page currently shown, when known
    fn current_path(&self) -> Option<String>;
    fn navigate(&self, path: &str);
}

/// Navigate unless `path` is already the current page. Navigating to the
/// page we are on would reload it and rerun the start hook.
pub fn goto(navigator: &dyn Navigator, path: &str) -> bool {
    if navigator.current_path().as_deref() == Some(path) {
        log::debug!("📍 Already on {}", path);
        return false;
    }
    navigator.navigate(path);
    true
}

#[cfg(target_arch = "wasm32")]
pub use web::{WindowDialogs, WindowNavigator};

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{Dialogs, Navigator};

    #[derive(Clone, Copy, Default)]
    pub struct WindowDialogs;

    impl Dialogs for WindowDialogs {
        fn confirm(&self, message: &str) -> bool {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }

        fn alert(&self, message: &str) {
            if let Some(win) = web_sys::window() {
                if win.alert_with_message(message).is_err() {
                    log::error!("❌ alert() failed: {}", message);
                }
            }
        }
    }

    #[derive(Clone, Copy, Default)]
    pub struct WindowNavigator;

    impl Navigator for WindowNavigator {
        fn current_path(&self) -> Option<String> {
            web_sys::window()?.location().pathname().ok()
        }

        fn navigate(&self, path: &str) {
            let Some(win) = web_sys::window() else {
                log::warn!("⚠️ No window, cannot navigate to {}", path);
                return;
            };
            if let Err(e) = win.location().set_href(path) {
                log::error!("❌ Navigation to {} failed: {:?}", path, e);
            }
        }
    }
}
