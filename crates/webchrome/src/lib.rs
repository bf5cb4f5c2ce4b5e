//! Browser-chrome controller for embedding web content in a host shell.
//!
//! Keeps a host application's navigation bar, toolbar, and progress
//! indicator synchronized with the navigation lifecycle of an embedded
//! content surface:
//! - Appearance snapshots saved on attach and restored on detach
//! - Toolbar button set and title derived from surface status (pure reducer)
//! - Per-request navigation policy: load in place, hand to an external
//!   handler, or block
//! - Progress indicator updates with a deferred fade-out
//!
//! The content engine and the host chrome are consumed through the
//! [`surface::NavigableSurface`] and [`shell::ChromeShell`] traits;
//! in-memory implementations live in [`headless`].

pub mod appearance;
pub mod chrome;
pub mod config;
pub mod controller;
pub mod delegate;
pub mod headless;
pub mod i18n;
pub mod policy;
pub mod share;
pub mod shell;
pub mod surface;

pub use chrome::{derive_chrome_state, ChromeState, ToolbarItem};
pub use config::ChromeConfig;
pub use controller::{BrowserController, Lifecycle, RootNavigation, PROGRESS_FADE_DELAY};
pub use delegate::BrowserDelegate;
pub use policy::{
    decide_navigation, decide_new_surface, ExternalHandler, NavigationPolicy, NavigationRequest,
    PolicyDecision,
};
pub use shell::ChromeShell;
pub use surface::{NavigableSurface, SurfaceEvent, SurfaceStatus};
