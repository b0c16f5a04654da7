//! Centralized theme and color scheme for the TUI.
//!
//! All views pull their colors through [`colors`] so a theme switch at
//! runtime takes effect on the next draw.

use ratatui::prelude::*;
use std::sync::RwLock;

use crate::model::ItemKind;

/// Color scheme for the TUI.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Kind accent colors, one per facet
    pub slash: Color,
    pub keyboard: Color,
    pub flag: Color,
    pub vim: Color,
    pub hook: Color,
    pub prefix: Color,
    pub mode: Color,
    pub feature: Color,
    pub custom: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Query match emphasis
    pub match_bg: Color,
    pub match_fg: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark theme for static initialization.
    ///
    /// The dark palette is Catppuccin Mocha, matching the colors the
    /// reference data was originally designed against.
    const fn dark_const() -> Self {
        Self {
            // Kind accents
            slash: Color::Rgb(166, 227, 161),
            keyboard: Color::Rgb(249, 226, 175),
            flag: Color::Rgb(137, 180, 250),
            vim: Color::Rgb(203, 166, 247),
            hook: Color::Rgb(243, 139, 168),
            prefix: Color::Rgb(148, 226, 213),
            mode: Color::Rgb(250, 179, 135),
            feature: Color::Rgb(116, 199, 236),
            custom: Color::Rgb(235, 160, 172),

            // UI elements
            primary: Color::Rgb(137, 180, 250),
            accent: Color::Rgb(249, 226, 175),
            muted: Color::Rgb(108, 112, 134),
            border: Color::Rgb(88, 91, 112),
            border_focused: Color::Rgb(137, 180, 250),
            background: Color::Rgb(30, 30, 46),
            background_alt: Color::Rgb(49, 50, 68),
            text: Color::Rgb(205, 214, 244),
            text_muted: Color::Rgb(166, 173, 200),
            selection: Color::Rgb(69, 71, 90),

            // Match emphasis
            match_bg: Color::Rgb(249, 226, 175),
            match_fg: Color::Rgb(30, 30, 46),

            // Status
            success: Color::Rgb(166, 227, 161),
            warning: Color::Rgb(249, 226, 175),
            error: Color::Rgb(243, 139, 168),

            // Badge foregrounds
            badge_fg_dark: Color::Rgb(30, 30, 46),
            badge_fg_light: Color::Rgb(205, 214, 244),
        }
    }

    /// Dark theme (default).
    pub fn dark() -> Self {
        Self::dark_const()
    }

    /// Light theme (Catppuccin Latte).
    pub fn light() -> Self {
        Self {
            // Kind accents
            slash: Color::Rgb(64, 160, 43),
            keyboard: Color::Rgb(223, 142, 29),
            flag: Color::Rgb(30, 102, 245),
            vim: Color::Rgb(136, 57, 239),
            hook: Color::Rgb(210, 15, 57),
            prefix: Color::Rgb(23, 146, 153),
            mode: Color::Rgb(254, 100, 11),
            feature: Color::Rgb(4, 165, 229),
            custom: Color::Rgb(230, 69, 83),

            // UI elements
            primary: Color::Rgb(30, 102, 245),
            accent: Color::Rgb(223, 142, 29),
            muted: Color::Rgb(156, 160, 176),
            border: Color::Rgb(172, 176, 190),
            border_focused: Color::Rgb(30, 102, 245),
            background: Color::Rgb(239, 241, 245),
            background_alt: Color::Rgb(230, 233, 239),
            text: Color::Rgb(76, 79, 105),
            text_muted: Color::Rgb(108, 111, 133),
            selection: Color::Rgb(204, 208, 218),

            // Match emphasis
            match_bg: Color::Rgb(249, 226, 175),
            match_fg: Color::Rgb(76, 79, 105),

            // Status
            success: Color::Rgb(64, 160, 43),
            warning: Color::Rgb(223, 142, 29),
            error: Color::Rgb(210, 15, 57),

            // Badge foregrounds (reversed for light theme)
            badge_fg_dark: Color::Rgb(239, 241, 245),
            badge_fg_light: Color::Rgb(76, 79, 105),
        }
    }

    /// High contrast theme (accessibility).
    pub fn high_contrast() -> Self {
        Self {
            // Kind accents
            slash: Color::LightGreen,
            keyboard: Color::LightYellow,
            flag: Color::LightBlue,
            vim: Color::LightMagenta,
            hook: Color::LightRed,
            prefix: Color::LightCyan,
            mode: Color::Yellow,
            feature: Color::Cyan,
            custom: Color::Magenta,

            // UI elements
            primary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background: Color::Black,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::DarkGray,

            // Match emphasis
            match_bg: Color::LightYellow,
            match_fg: Color::Black,

            // Status
            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            // Badge foregrounds
            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Get the accent color for an item kind.
    pub const fn kind_color(&self, kind: ItemKind) -> Color {
        match kind {
            ItemKind::Slash => self.slash,
            ItemKind::Keyboard => self.keyboard,
            ItemKind::Flag => self.flag,
            ItemKind::Vim => self.vim,
            ItemKind::Hook => self.hook,
            ItemKind::Prefix => self.prefix,
            ItemKind::Mode => self.mode,
            ItemKind::Feature => self.feature,
            ItemKind::Custom => self.custom,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    pub fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().expect("THEME lock not poisoned").name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().expect("THEME lock not poisoned") = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().expect("THEME lock not poisoned");
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().expect("THEME lock not poisoned").colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Header title style
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Section title style
    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Normal text style
    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Label text style
    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    /// Selection style (for selected items)
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    /// Query match emphasis, shared by every highlighted field
    pub fn match_emphasis() -> Style {
        Style::default().fg(colors().match_fg).bg(colors().match_bg)
    }

    /// Border style (unfocused)
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// Border style (focused)
    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    /// Status bar background style
    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Success style
    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }
}

// ============================================================================
// Badge Rendering Helpers
// ============================================================================

/// Render a kind badge with consistent styling
pub fn kind_badge(kind: ItemKind) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {} ", kind.badge()),
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(scheme.kind_color(kind))
            .bold(),
    )
}

/// Render a toggle badge for the search modifiers (regex, case).
/// Lit when the toggle is on, dimmed when off.
pub fn toggle_badge(label: &'static str, on: bool) -> Span<'static> {
    let scheme = colors();
    if on {
        Span::styled(
            format!(" {label} "),
            Style::default()
                .fg(scheme.badge_fg_dark)
                .bg(scheme.accent)
                .bold(),
        )
    } else {
        Span::styled(format!(" {label} "), Style::default().fg(scheme.muted))
    }
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Context-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Hints shown while the search box has focus.
    pub fn search_focused() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Esc", "clear/leave"),
            ("Enter", "to list"),
            ("↑↓", "navigate"),
            ("Ctrl+Q", "quit"),
        ]
    }

    /// Hints shown while the list has focus.
    pub fn browse() -> Vec<(&'static str, &'static str)> {
        vec![
            ("/", "search"),
            ("f", "kind"),
            ("r", "regex"),
            ("c", "case"),
            ("←→", "category"),
            ("y", "copy"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{}]", key), Styles::shortcut_key()));
        spans.push(Span::styled(desc.to_string(), Styles::shortcut_desc()));
    }

    spans
}
