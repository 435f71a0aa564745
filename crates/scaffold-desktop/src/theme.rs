//! Colors used by the desktop components

/// Fixed light palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub border: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub info_bg: &'static str,
}

pub const PALETTE: Palette = Palette {
    bg_primary: "#ffffff",
    bg_secondary: "#f5f6f8",
    border: "#dee2e6",
    text_primary: "#212529",
    text_muted: "#6c757d",
    accent: "#0d6efd",
    accent_text: "#ffffff",
    info_bg: "#cff4fc",
};
