//! Theme system for the review screen.
//!
//! Two themes: Clinical (light, the default) and Night Shift (dark, for
//! reading rooms).

use dioxus::prelude::*;

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Clinical,
    NightShift,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Clinical => "clinical",
            Theme::NightShift => "night-shift",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Clinical => "Clinical",
            Theme::NightShift => "Night Shift",
        }
    }

    /// Parses a `css_value`, defaulting to Clinical.
    pub fn from_css_value(value: &str) -> Self {
        match value {
            "night-shift" => Theme::NightShift,
            _ => Theme::Clinical,
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Clinical, Theme::NightShift]
    }
}

/// Global signal for current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Theme switcher dropdown component.
#[component]
pub fn ThemeSwitcher() -> Element {
    let current_theme = *CURRENT_THEME.read();

    rsx! {
        div { class: "theme-switcher",
            select {
                value: "{current_theme.css_value()}",
                onchange: move |evt| {
                    *CURRENT_THEME.write() = Theme::from_css_value(&evt.value());
                },
                for t in Theme::all() {
                    option {
                        value: "{t.css_value()}",
                        selected: *t == current_theme,
                        "{t.display_name()}"
                    }
                }
            }
        }
    }
}
