//! Toast notifications: the only way errors reach the user.

use crate::domain::logging::LogComponent;
use crate::global_state::toasts;
use gloo_timers::callback::Timeout;
use leptos::*;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Abstraction over the non-blocking notification surface
pub trait NotificationProvider {
    fn notify_error(&self, message: &str) -> u64;
    fn dismiss(&self, id: u64);
}

/// Pushes toasts onto the global stack and removes them after `auto_close_ms`.
#[derive(Debug, Clone, Copy)]
pub struct ToastNotificationService {
    auto_close_ms: u32,
}

impl ToastNotificationService {
    pub fn new(auto_close_ms: u32) -> Self {
        Self { auto_close_ms }
    }

    fn push(&self, message: &str) -> u64 {
        let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
        toasts().update(|list| list.push(Toast { id, message: message.to_string() }));
        if self.auto_close_ms > 0 {
            let service = *self;
            Timeout::new(self.auto_close_ms, move || service.dismiss(id)).forget();
        }
        id
    }
}

impl NotificationProvider for ToastNotificationService {
    fn notify_error(&self, message: &str) -> u64 {
        crate::log_warn!(LogComponent::Infrastructure("UI"), "Showing error notification: {}", message);
        self.push(message)
    }

    fn dismiss(&self, id: u64) {
        toasts().update(|list| list.retain(|t| t.id != id));
    }
}
