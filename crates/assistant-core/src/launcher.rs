//! Page-level integration: the floating launcher and route awareness.

use assistant_types::config::RoutesConfig;

/// Open/closed state of the floating chat overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Launcher {
    open: bool,
    unread: bool,
}

impl Launcher {
    pub fn new(open: bool) -> Self {
        Self { open, unread: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn has_unread(&self) -> bool {
        self.unread
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.unread = false;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// An assistant reply landed; flag it if nobody is looking.
    pub fn notice_reply(&mut self) {
        if !self.open {
            self.unread = true;
        }
    }
}

/// What the current route allows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pathname: String,
    pub launcher_visible: bool,
    pub auto_scroll_available: bool,
}

impl PageContext {
    pub fn new(routes: &RoutesConfig, pathname: &str) -> Self {
        Self {
            pathname: pathname.to_string(),
            launcher_visible: !routes.is_chat_page(pathname),
            auto_scroll_available: routes.is_content_page(pathname),
        }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Re-evaluate for `pathname`. Returns `true` if the route changed.
    pub fn update(&mut self, routes: &RoutesConfig, pathname: &str) -> bool {
        if self.pathname == pathname {
            return false;
        }
        log::debug!("Route changed: {} -> {}", self.pathname, pathname);
        *self = Self::new(routes, pathname);
        true
    }
}
