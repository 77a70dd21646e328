//! Toast notifications on top of `dioxus-toast`.
//!
//! Mount [`ToastProvider`] once around the router, then grab the handle with
//! [`use_toast`] anywhere below it.

use dioxus::prelude::*;
use dioxus_toast::{Icon, Position, ToastFrame, ToastInfo, ToastManager};

/// Oldest toasts are dropped beyond this many.
const MAX_VISIBLE: u8 = 5;

/// Seconds a toast stays up unless [`ToastOptions::duration`] says otherwise.
const DEFAULT_SECS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastOptions {
    duration: Option<usize>,
    heading: Option<String>,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self {
            duration: Some(DEFAULT_SECS),
            heading: None,
        }
    }

    /// Auto-dismiss after `secs`; `None` keeps the toast until it is closed.
    pub fn duration(mut self, secs: Option<usize>) -> Self {
        self.duration = secs;
        self
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by [`use_toast`]. Cheap to copy into closures and tasks.
#[derive(Clone, Copy)]
pub struct Toasts {
    manager: Signal<ToastManager>,
}

impl Toasts {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.popup(Icon::Success, message, options);
    }

    pub fn info(&self, message: String, options: ToastOptions) {
        self.popup(Icon::Info, message, options);
    }

    pub fn warning(&self, message: String, options: ToastOptions) {
        self.popup(Icon::Warning, message, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.popup(Icon::Error, message, options);
    }

    fn popup(&self, icon: Icon, message: String, options: ToastOptions) {
        let mut manager = self.manager;
        manager.write().popup(toast_info(icon, &message, options));
    }
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let manager = use_signal(|| ToastManager::new(MAX_VISIBLE));
    use_context_provider(|| Toasts { manager });

    rsx! {
        {children}
        ToastFrame { manager }
    }
}

fn toast_info(icon: Icon, message: &str, options: ToastOptions) -> ToastInfo {
    ToastInfo {
        heading: options.heading,
        // The frame renders this as markup.
        context: escape_html(message),
        allow_toast_close: true,
        position: Position::TopRight,
        icon: Some(icon),
        hide_after: options.duration,
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
