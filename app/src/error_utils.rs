use crate::types::{AppState, ToastKind};
use dioxus::prelude::*;
use gscores::ApiError;

/// Show a failed request to the user as an error toast
pub fn toast_error(mut state: Signal<AppState>, error: &ApiError) {
    state.with_mut(|s| s.push_toast(ToastKind::Error, error.user_message()));
}

pub fn toast_success(mut state: Signal<AppState>, message: impl Into<String>) {
    let message = message.into();
    state.with_mut(|s| s.push_toast(ToastKind::Success, message));
}
