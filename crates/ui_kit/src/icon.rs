//! Centralized icon API.
//!
//! Icons render as inline stroke SVGs so they inherit `currentColor` from the
//! surrounding text tone without any asset pipeline.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named icons available to gallery surfaces.
pub enum IconName {
    /// Light-mode glyph.
    Sun,
    /// Dark-mode glyph.
    Moon,
    /// Confirmation check mark.
    Check,
    /// Dismiss/close cross.
    Cross,
    /// Informational circle.
    Info,
    /// Warning triangle.
    Warning,
    /// In-flight spinner arc.
    Spinner,
    /// Left chevron.
    ChevronLeft,
    /// Right chevron.
    ChevronRight,
    /// Down chevron.
    ChevronDown,
    /// Notification bell.
    Bell,
}

impl IconName {
    fn token(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Check => "check",
            Self::Cross => "cross",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Spinner => "spinner",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDown => "chevron-down",
            Self::Bell => "bell",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Sun => &[
                "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
                "M12 2v2",
                "M12 20v2",
                "M4.93 4.93l1.41 1.41",
                "M17.66 17.66l1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "M6.34 17.66l-1.41 1.41",
                "M19.07 4.93l-1.41 1.41",
            ],
            Self::Moon => &["M21 12.79A9 9 0 1 1 11.21 3A7 7 0 0 0 21 12.79"],
            Self::Check => &["M20 6L9 17l-5-5"],
            Self::Cross => &["M18 6L6 18", "M6 6l12 12"],
            Self::Info => &["M12 3a9 9 0 1 0 0 18a9 9 0 1 0 0-18", "M12 11v5", "M12 8h.01"],
            Self::Warning => &[
                "M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0",
                "M12 9v4",
                "M12 17h.01",
            ],
            Self::Spinner => &["M21 12a9 9 0 1 1-6.22-8.56"],
            Self::ChevronLeft => &["M15 18l-6-6l6-6"],
            Self::ChevronRight => &["M9 18l6-6l-6-6"],
            Self::ChevronDown => &["M6 9l6 6l6-6"],
            Self::Bell => &[
                "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
                "M10.3 21a1.94 1.94 0 0 0 3.4 0",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Inline-with-text size.
    Sm,
    /// Default control size.
    Md,
    /// Feature/empty-state size.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Shared inline SVG icon primitive.
pub fn Icon(
    /// Which glyph to render.
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
) -> impl IntoView {
    view! {
        <svg
            class="kit-icon"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-kit-primitive="true"
            data-kit-kind="icon"
            data-kit-icon=icon.token()
            data-kit-size=size.token()
        >
            {icon
                .paths()
                .iter()
                .map(|path| view! { <path d=*path></path> })
                .collect_view()}
        </svg>
    }
}
