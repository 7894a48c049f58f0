use crate::preferences::ThemeMode;
use ratatui::style::Color;

/// Gallery palette for one theme mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryTheme {
    // Backgrounds
    pub bg: Color,
    pub bg_popup: Color,

    // Foregrounds
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accents
    pub accent_primary: Color,   // Indigo
    pub accent_secondary: Color, // Sky
    pub accent_highlight: Color, // Amber

    // Tag pills
    pub tag: Color,
    pub tag_active: Color,

    pub warning: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl GalleryTheme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Light gray page with slate text
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(243, 244, 246),       // #f3f4f6
            bg_popup: Color::Rgb(255, 255, 255), // #ffffff

            fg_primary: Color::Rgb(17, 24, 39),   // #111827
            fg_secondary: Color::Rgb(55, 65, 81), // #374151
            fg_muted: Color::Rgb(107, 114, 128),  // #6b7280

            accent_primary: Color::Rgb(79, 70, 229),  // #4f46e5
            accent_secondary: Color::Rgb(2, 132, 199), // #0284c7
            accent_highlight: Color::Rgb(180, 83, 9),  // #b45309

            tag: Color::Rgb(67, 56, 202),        // #4338ca
            tag_active: Color::Rgb(190, 24, 93), // #be185d

            warning: Color::Rgb(185, 28, 28), // #b91c1c

            border: Color::Rgb(209, 213, 219),       // #d1d5db
            border_focused: Color::Rgb(79, 70, 229), // #4f46e5
        }
    }

    /// Near-black page with light text
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(17, 24, 39),       // #111827
            bg_popup: Color::Rgb(31, 41, 55), // #1f2937

            fg_primary: Color::Rgb(243, 244, 246),   // #f3f4f6
            fg_secondary: Color::Rgb(209, 213, 219), // #d1d5db
            fg_muted: Color::Rgb(156, 163, 175),     // #9ca3af

            accent_primary: Color::Rgb(129, 140, 248),  // #818cf8
            accent_secondary: Color::Rgb(56, 189, 248), // #38bdf8
            accent_highlight: Color::Rgb(251, 191, 36), // #fbbf24

            tag: Color::Rgb(165, 180, 252),        // #a5b4fc
            tag_active: Color::Rgb(244, 114, 182), // #f472b6

            warning: Color::Rgb(248, 113, 113), // #f87171

            border: Color::Rgb(55, 65, 81),            // #374151
            border_focused: Color::Rgb(129, 140, 248), // #818cf8
        }
    }
}
