//! Class-name helpers so pages share one look. The classes live in
//! `assets/main.css`.

use crate::ui::components::toast::ToastKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Outline,
    Danger,
    Ghost,
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "btn btn-primary",
        Tone::Outline => "btn btn-outline",
        Tone::Danger => "btn btn-danger",
        Tone::Ghost => "btn btn-ghost",
    }
}

pub fn btn_block(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "btn btn-primary btn-block",
        Tone::Outline => "btn btn-outline btn-block",
        Tone::Danger => "btn btn-danger btn-block",
        Tone::Ghost => "btn btn-ghost btn-block",
    }
}

// ============================================
// NAVIGATION
// ============================================

pub fn nav_link(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

pub fn tab(active: bool) -> &'static str {
    if active {
        "tab active"
    } else {
        "tab"
    }
}

pub fn picker_item(active: bool) -> &'static str {
    if active {
        "picker-item active"
    } else {
        "picker-item"
    }
}

// ============================================
// FEEDBACK
// ============================================

pub fn toast(kind: ToastKind) -> (&'static str, &'static str) {
    match kind {
        ToastKind::Info => ("toast toast-info", "ℹ️"),
        ToastKind::Success => ("toast toast-success", "✅"),
        ToastKind::Warning => ("toast toast-warning", "⚠️"),
        ToastKind::Error => ("toast toast-error", "⛔"),
    }
}
