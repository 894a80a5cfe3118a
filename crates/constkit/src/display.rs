//! Presentation constants: date formats, breakpoints, colors, UI defaults.

// ============================================================================
// Date formats (Unicode/date-fns pattern language)
// ============================================================================

/// Date format patterns.
pub mod date_formats {
    /// `2024-01-15`
    pub const ISO: &str = "yyyy-MM-dd";
    /// `01/15/2024`
    pub const US: &str = "MM/dd/yyyy";
    /// `15/01/2024`
    pub const EU: &str = "dd/MM/yyyy";
    /// `Jan 15, 2024`
    pub const READABLE: &str = "MMM dd, yyyy";
    /// `Monday, January 15, 2024`
    pub const FULL: &str = "EEEE, MMMM dd, yyyy";
    /// `10:30 AM`
    pub const TIME_12: &str = "h:mm a";
    /// `10:30`
    pub const TIME_24: &str = "HH:mm";
    /// `Jan 15, 2024 10:30 AM`
    pub const DATETIME_12: &str = "MMM dd, yyyy h:mm a";
    /// `Jan 15, 2024 10:30`
    pub const DATETIME_24: &str = "MMM dd, yyyy HH:mm";
    /// `2024-01-15T10:30:00`
    pub const ISO_DATETIME: &str = "yyyy-MM-dd'T'HH:mm:ss";

    /// Every format with its table key.
    pub const ALL: [(&str, &str); 10] = [
        ("ISO", ISO),
        ("US", US),
        ("EU", EU),
        ("READABLE", READABLE),
        ("FULL", FULL),
        ("TIME_12", TIME_12),
        ("TIME_24", TIME_24),
        ("DATETIME_12", DATETIME_12),
        ("DATETIME_24", DATETIME_24),
        ("ISO_DATETIME", ISO_DATETIME),
    ];
}

// ============================================================================
// Breakpoints (px)
// ============================================================================

/// Responsive breakpoints in pixels.
pub mod breakpoints {
    /// Extra small
    pub const XS: u32 = 480;
    /// Small
    pub const SM: u32 = 640;
    /// Medium
    pub const MD: u32 = 768;
    /// Large
    pub const LG: u32 = 1024;
    /// Extra large
    pub const XL: u32 = 1280;
    /// 2x extra large
    pub const XXL: u32 = 1536;

    /// Every breakpoint with its table key, ascending.
    pub const ALL: [(&str, u32); 6] = [
        ("XS", XS),
        ("SM", SM),
        ("MD", MD),
        ("LG", LG),
        ("XL", XL),
        ("XXL", XXL),
    ];

    /// Key of the largest breakpoint not wider than `width`.
    pub fn for_width(width: u32) -> Option<&'static str> {
        ALL.iter()
            .rev()
            .find(|(_, px)| width >= *px)
            .map(|(name, _)| *name)
    }
}

// ============================================================================
// Colors
// ============================================================================

/// Brand and neutral colors.
pub mod colors {
    /// Primary
    pub const PRIMARY: &str = "#3B82F6";
    /// Secondary
    pub const SECONDARY: &str = "#6B7280";
    /// Success
    pub const SUCCESS: &str = "#10B981";
    /// Warning
    pub const WARNING: &str = "#F59E0B";
    /// Error
    pub const ERROR: &str = "#EF4444";
    /// Info
    pub const INFO: &str = "#3B82F6";
    /// White
    pub const WHITE: &str = "#FFFFFF";
    /// Black
    pub const BLACK: &str = "#000000";

    /// Gray scale keyed by shade.
    pub const GRAY: [(u16, &str); 10] = [
        (50, "#F9FAFB"),
        (100, "#F3F4F6"),
        (200, "#E5E7EB"),
        (300, "#D1D5DB"),
        (400, "#9CA3AF"),
        (500, "#6B7280"),
        (600, "#4B5563"),
        (700, "#374151"),
        (800, "#1F2937"),
        (900, "#111827"),
    ];

    /// Named colors with their table key.
    pub const ALL: [(&str, &str); 8] = [
        ("PRIMARY", PRIMARY),
        ("SECONDARY", SECONDARY),
        ("SUCCESS", SUCCESS),
        ("WARNING", WARNING),
        ("ERROR", ERROR),
        ("INFO", INFO),
        ("WHITE", WHITE),
        ("BLACK", BLACK),
    ];

    /// Gray for a shade (`50`, `100`, ..., `900`).
    pub fn gray(shade: u16) -> Option<&'static str> {
        GRAY.iter().find(|(s, _)| *s == shade).map(|(_, hex)| *hex)
    }
}

// ============================================================================
// UI defaults
// ============================================================================

/// Default UI values.
pub mod defaults {
    /// Avatar edge in px.
    pub const AVATAR_SIZE: u32 = 40;
    /// Input debounce in ms.
    pub const DEBOUNCE_DELAY: u64 = 300;
    /// Animation length in ms.
    pub const ANIMATION_DURATION: u64 = 200;
    /// Toast display time in ms.
    pub const TOAST_DURATION: u64 = 3000;
    /// Modal stacking order.
    pub const MODAL_Z_INDEX: u32 = 1000;
    /// Dropdown stacking order.
    pub const DROPDOWN_Z_INDEX: u32 = 100;

    /// Every default with its table key.
    pub const ALL: [(&str, u64); 6] = [
        ("AVATAR_SIZE", AVATAR_SIZE as u64),
        ("DEBOUNCE_DELAY", DEBOUNCE_DELAY),
        ("ANIMATION_DURATION", ANIMATION_DURATION),
        ("TOAST_DURATION", TOAST_DURATION),
        ("MODAL_Z_INDEX", MODAL_Z_INDEX as u64),
        ("DROPDOWN_Z_INDEX", DROPDOWN_Z_INDEX as u64),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_for_width() {
        assert_eq!(breakpoints::for_width(320), None);
        assert_eq!(breakpoints::for_width(480), Some("XS"));
        assert_eq!(breakpoints::for_width(800), Some("MD"));
        assert_eq!(breakpoints::for_width(4000), Some("XXL"));
    }

    #[test]
    fn test_gray_lookup() {
        assert_eq!(colors::gray(500), Some(colors::SECONDARY));
        assert_eq!(colors::gray(900), Some("#111827"));
        assert_eq!(colors::gray(550), None);
    }

    #[test]
    fn test_date_format_defaults() {
        assert_eq!(date_formats::ISO, "yyyy-MM-dd");
        assert_eq!(date_formats::TIME_24, "HH:mm");
        assert_eq!(date_formats::ALL.len(), 10);
    }
}
