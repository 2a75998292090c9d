/// Toasts beyond this many push the oldest one out
pub const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn colors(self) -> (&'static str, &'static str) {
        match self {
            ToastKind::Success => ("#ecfdf5", "#059669"),
            ToastKind::Error => ("#fef2f2", "#dc2626"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// State shared by the layout shell and every page
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub sidebar_open: bool,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            toasts: Vec::new(),
            next_toast_id: 0,
        }
    }
}

impl AppState {
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id: self.next_toast_id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
