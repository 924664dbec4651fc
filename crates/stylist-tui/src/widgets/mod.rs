//! Custom widget components

mod chat;
mod closet;
mod dialogs;
mod header;
mod hints;
mod home;
pub mod modal_overlay;
mod tabs;
mod toast;
mod trial;

pub use chat::{ChatTranscript, Composer};
pub use closet::ClosetView;
pub use dialogs::{
    AlertDialog, ConfirmDeleteDialog, FilePickerDialog, OutfitFormDialog, OutfitResultDialog,
    UploadDialog,
};
pub use header::MainHeader;
pub use hints::KeyHints;
pub use home::{OutfitCard, OutfitControls};
pub use tabs::TabBar;
pub use toast::ToastStack;
pub use trial::TrialExpiredScreen;

use unicode_width::UnicodeWidthChar;

/// Cut `text` to at most `max_width` display columns, ending in `…` when cut
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `width` display columns. Words longer than a line are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;
        for word in paragraph.split_whitespace() {
            let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();
            if used > 0 && used + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            if used > 0 {
                line.push(' ');
                used += 1;
            }
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if used + w > width {
                    lines.push(std::mem::take(&mut line));
                    used = 0;
                }
                line.push(c);
                used += w;
            }
        }
        lines.push(line);
    }
    lines
}
