use crate::infrastructure::ui::Toast;
use leptos::*;
use once_cell::sync::OnceCell;

/// App-wide signals. Per-view state lives in the views, not here.
pub struct Globals {
    pub toasts: RwSignal<Vec<Toast>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals { toasts: create_rw_signal(Vec::new()) })
}

crate::global_signals! {
    pub toasts => toasts: Vec<Toast>,
}
