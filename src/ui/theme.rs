//! Centralized theming for the mailbox TUI
//!
//! One fixed palette (Catppuccin Mocha). Every style used by the renderer
//! comes from here.

use ratatui::style::{Color, Modifier, Style};

/// Catppuccin Mocha color palette
mod catppuccin {
    use super::Color;

    // Background layers (darkest to lightest)
    pub const BASE: Color = Color::Rgb(30, 30, 46); // #1e1e2e - main background
    pub const MANTLE: Color = Color::Rgb(24, 24, 37); // #181825 - status bar, panels
    pub const SURFACE0: Color = Color::Rgb(49, 50, 68); // #313244 - borders
    pub const SURFACE1: Color = Color::Rgb(69, 71, 90); // #45475a - selection

    // Text colors
    pub const TEXT: Color = Color::Rgb(205, 214, 244); // #cdd6f4 - primary
    pub const SUBTEXT1: Color = Color::Rgb(186, 194, 222); // #bac2de - secondary
    pub const OVERLAY0: Color = Color::Rgb(108, 112, 134); // #6c7086 - muted/disabled

    // Accent colors
    pub const LAVENDER: Color = Color::Rgb(180, 190, 254); // #b4befe - focused borders
    pub const BLUE: Color = Color::Rgb(137, 180, 250); // #89b4fa - accent
    pub const TEAL: Color = Color::Rgb(148, 226, 213); // #94e2d5 - tags
    pub const YELLOW: Color = Color::Rgb(249, 226, 175); // #f9e2af - stars, keys
    pub const PEACH: Color = Color::Rgb(250, 179, 135); // #fab387 - day headers
    pub const RED: Color = Color::Rgb(243, 139, 168); // #f38ba8 - errors
    pub const MAUVE: Color = Color::Rgb(203, 166, 247); // #cba6f7 - unread indicator
}

pub mod colors {
    use super::{Color, catppuccin};

    pub fn bg_main() -> Color {
        catppuccin::BASE
    }

    pub fn bg_selection() -> Color {
        catppuccin::SURFACE1
    }

    pub fn bg_status() -> Color {
        catppuccin::MANTLE
    }

    pub fn bg_error() -> Color {
        catppuccin::RED
    }

    pub fn fg_primary() -> Color {
        catppuccin::TEXT
    }

    pub fn fg_secondary() -> Color {
        catppuccin::SUBTEXT1
    }

    pub fn fg_muted() -> Color {
        catppuccin::OVERLAY0
    }

    pub fn fg_accent() -> Color {
        catppuccin::BLUE
    }

    pub fn fg_warning() -> Color {
        catppuccin::YELLOW
    }

    pub fn unread_indicator() -> Color {
        catppuccin::MAUVE
    }

    pub fn tag() -> Color {
        catppuccin::TEAL
    }

    pub fn day_header() -> Color {
        catppuccin::PEACH
    }

    pub fn border() -> Color {
        catppuccin::SURFACE0
    }

    pub fn border_focused() -> Color {
        catppuccin::LAVENDER
    }
}

pub mod symbols {
    pub const UNREAD: &str = "●";
    pub const READ: &str = " ";
    pub const STARRED: &str = "★";
    pub const UNSTARRED: &str = " ";
    pub const ATTACHMENT: &str = "+";
    pub const CURRENT_FOLDER: &str = "▶";
    pub const ERROR: &str = "!";
}

/// Pre-composed styles for common UI elements
pub struct Theme;

impl Theme {
    // === Selection ===

    pub fn selected() -> Style {
        Style::default()
            .bg(colors::bg_selection())
            .fg(colors::fg_primary())
    }

    pub fn selected_bold() -> Style {
        Self::selected().add_modifier(Modifier::BOLD)
    }

    // === Text ===

    pub fn text() -> Style {
        Style::default()
            .fg(colors::fg_primary())
            .bg(colors::bg_main())
    }

    pub fn text_secondary() -> Style {
        Style::default()
            .fg(colors::fg_secondary())
            .bg(colors::bg_main())
    }

    pub fn text_muted() -> Style {
        Style::default()
            .fg(colors::fg_muted())
            .bg(colors::bg_main())
    }

    pub fn text_unread() -> Style {
        Self::text().add_modifier(Modifier::BOLD)
    }

    pub fn text_accent() -> Style {
        Style::default()
            .fg(colors::fg_accent())
            .bg(colors::bg_main())
    }

    pub fn label() -> Style {
        Self::text_muted().add_modifier(Modifier::BOLD)
    }

    pub fn tag() -> Style {
        Style::default().fg(colors::tag()).bg(colors::bg_main())
    }

    pub fn day_header() -> Style {
        Style::default()
            .fg(colors::day_header())
            .bg(colors::bg_main())
            .add_modifier(Modifier::BOLD)
    }

    // === Bars ===

    pub fn status_bar() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::fg_primary())
    }

    pub fn status_muted() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::fg_muted())
    }

    pub fn status_error() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::bg_error())
    }

    pub fn error_bar() -> Style {
        Style::default()
            .bg(colors::bg_error())
            .fg(colors::bg_main())
    }

    pub fn help_key() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::fg_warning())
    }

    pub fn help_desc() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::fg_muted())
    }

    // === Borders ===

    pub fn border() -> Style {
        Style::default().fg(colors::border()).bg(colors::bg_main())
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(colors::border_focused())
            .bg(colors::bg_main())
    }

    pub fn main_bg() -> Style {
        Style::default().bg(colors::bg_main())
    }

    // === Indicators ===

    pub fn unread_indicator() -> Style {
        Style::default()
            .fg(colors::unread_indicator())
            .bg(colors::bg_main())
    }

    pub fn star_indicator() -> Style {
        Style::default()
            .fg(colors::fg_warning())
            .bg(colors::bg_main())
    }
}

/// Swap in the selection background so the highlight covers the whole row
pub fn with_selection_bg(style: Style, selected: bool) -> Style {
    if selected {
        style.bg(colors::bg_selection())
    } else {
        style.bg(colors::bg_main())
    }
}
