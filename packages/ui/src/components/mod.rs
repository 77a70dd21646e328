//! Building blocks shared by every screen.

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider, Toasts};
