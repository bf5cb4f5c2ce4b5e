//! Host-facing delegate hooks. All methods default to no-ops.

use url::Url;
use webchrome_common::LoadError;

/// Observer interface for the host application.
///
/// `on_will_dismiss` fires before the dismiss transition begins;
/// `on_did_dismiss` after it completes.
pub trait BrowserDelegate {
    fn on_start_loading(&mut self, _url: Option<&Url>) {}
    fn on_finish_loading(&mut self, _url: Option<&Url>) {}
    fn on_fail_loading(&mut self, _url: Option<&Url>, _error: &LoadError) {}
    fn on_will_dismiss(&mut self) {}
    fn on_did_dismiss(&mut self) {}
}
