//! Single dismissible banner for pages without a collection state

use dioxus::prelude::*;

/// Banner handle
#[derive(Clone, Copy, PartialEq)]
pub struct BannerHandle {
    pub banner: Signal<Option<String>>,
}

impl BannerHandle {
    /// Replace whatever is shown
    pub fn show(&mut self, message: impl Into<String>) {
        self.banner.set(Some(message.into()));
    }

    pub fn dismiss(&mut self) {
        self.banner.set(None);
    }

    pub fn current(&self) -> Option<String> {
        self.banner.read().clone()
    }
}

/// Hook for a page-local error banner
pub fn use_banner() -> BannerHandle {
    let banner = use_signal(|| None::<String>);

    BannerHandle { banner }
}
