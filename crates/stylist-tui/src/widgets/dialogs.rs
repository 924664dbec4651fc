//! Dialogs drawn over the screen: upload, outfit form and result,
//! file path prompt, alerts and delete confirmation

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use stylist_app::modal::{
    FilePicker, FormField, OutfitForm, PickerPurpose, UploadForm, OCCASION_OPTIONS,
    WEATHER_OPTIONS,
};
use stylist_app::state::Alert;
use stylist_core::GeneratedOutfit;

use super::modal_overlay::prepare_dialog;
use super::truncate;
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 60;

fn key_line(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, label)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(*key, styles::keybinding()));
        spans.push(Span::styled(format!(" {}", label), styles::text_muted()));
    }
    Line::from(spans).alignment(Alignment::Center)
}

fn render_dialog(area: Rect, buf: &mut Buffer, title: &str, height: u16, lines: Vec<Line>) {
    let rect = prepare_dialog(buf, area, DIALOG_WIDTH, height);
    let block = styles::modal_block(title);
    let inner = block.inner(rect);
    block.render(rect, buf);
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(inner, buf);
}

// ─────────────────────────────────────────────────────────
// Upload
// ─────────────────────────────────────────────────────────

pub struct UploadDialog<'a> {
    form: &'a UploadForm,
}

impl<'a> UploadDialog<'a> {
    pub fn new(form: &'a UploadForm) -> Self {
        Self { form }
    }
}

impl Widget for UploadDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let file = self
            .form
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "No file selected".to_string());

        let mut lines = vec![
            Line::from(vec![
                Span::styled("File  ", styles::text_muted()),
                Span::styled(
                    truncate(&file, DIALOG_WIDTH as usize - 10),
                    styles::text_primary(),
                ),
            ]),
            Line::default(),
        ];
        if self.form.in_progress {
            lines.push(
                Line::from(Span::styled("Analyzing...", styles::accent_bold()))
                    .alignment(Alignment::Center),
            );
        } else {
            lines.push(key_line(&[("Enter", "analyze"), ("Esc", "cancel")]));
        }

        render_dialog(area, buf, " Add to closet ", 7, lines);
    }
}

// ─────────────────────────────────────────────────────────
// Outfit generation
// ─────────────────────────────────────────────────────────

pub struct OutfitFormDialog<'a> {
    form: &'a OutfitForm,
}

impl<'a> OutfitFormDialog<'a> {
    pub fn new(form: &'a OutfitForm) -> Self {
        Self { form }
    }

    fn option_row(
        label: &'static str,
        options: &[&'static str],
        chosen: Option<usize>,
        focused: bool,
    ) -> Line<'static> {
        let label_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };
        let mut spans = vec![Span::styled(format!("{:<10}", label), label_style)];
        for (i, option) in options.iter().enumerate() {
            let style = if chosen == Some(i) {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", option), style));
        }
        Line::from(spans)
    }
}

impl Widget for OutfitFormDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Self::option_row(
                "Weather",
                &WEATHER_OPTIONS,
                self.form.weather,
                self.form.field == FormField::Weather,
            ),
            Line::default(),
            Self::option_row(
                "Occasion",
                &OCCASION_OPTIONS,
                self.form.occasion,
                self.form.field == FormField::Occasion,
            ),
            Line::default(),
        ];
        if self.form.in_progress {
            lines.push(
                Line::from(Span::styled("Generating...", styles::accent_bold()))
                    .alignment(Alignment::Center),
            );
        } else {
            lines.push(key_line(&[
                ("Tab", "field"),
                ("←/→", "choose"),
                ("Enter", "generate"),
                ("Esc", "close"),
            ]));
        }

        render_dialog(area, buf, " Generate outfit ", 9, lines);
    }
}

pub struct OutfitResultDialog<'a> {
    result: &'a GeneratedOutfit,
}

impl<'a> OutfitResultDialog<'a> {
    pub fn new(result: &'a GeneratedOutfit) -> Self {
        Self { result }
    }
}

impl Widget for OutfitResultDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        if let Some(url) = &self.result.image_url {
            lines.push(Line::from(vec![
                Span::styled("image  ", styles::text_muted()),
                Span::styled(url.clone(), styles::accent()),
            ]));
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            self.result.message.clone(),
            styles::text_primary(),
        )));
        lines.push(Line::default());
        lines.push(key_line(&[("Enter", "close")]));

        render_dialog(area, buf, " Your outfit ", 12, lines);
    }
}

// ─────────────────────────────────────────────────────────
// File path prompt
// ─────────────────────────────────────────────────────────

pub struct FilePickerDialog<'a> {
    picker: &'a FilePicker,
}

impl<'a> FilePickerDialog<'a> {
    pub fn new(picker: &'a FilePicker) -> Self {
        Self { picker }
    }
}

impl Widget for FilePickerDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let prompt = match self.picker.purpose {
            PickerPurpose::Upload => "Path of the clothing photo to analyze:",
            PickerPurpose::ChatImage => "Path of the image to attach:",
        };
        let lines = vec![
            Line::from(Span::styled(prompt, styles::text_secondary())),
            Line::from(vec![
                Span::styled("> ", styles::keybinding()),
                Span::styled(self.picker.input.clone(), styles::text_primary()),
                Span::styled("▏", styles::accent()),
            ]),
            Line::default(),
            key_line(&[("Enter", "choose"), ("Esc", "cancel")]),
        ];

        render_dialog(area, buf, " Choose a file ", 7, lines);
    }
}

// ─────────────────────────────────────────────────────────
// Alerts
// ─────────────────────────────────────────────────────────

pub struct AlertDialog<'a> {
    alert: &'a Alert,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.alert.title);
        let lines = vec![
            Line::from(Span::styled(
                self.alert.message.clone(),
                styles::text_primary(),
            )),
            Line::default(),
            key_line(&[("Enter", "OK")]),
        ];

        render_dialog(area, buf, &title, 8, lines);
    }
}

pub struct ConfirmDeleteDialog<'a> {
    name: &'a str,
}

impl<'a> ConfirmDeleteDialog<'a> {
    /// `file` is the item id; the `.txt` suffix is not shown
    pub fn new(file: &'a str) -> Self {
        Self {
            name: file.strip_suffix(".txt").unwrap_or(file),
        }
    }
}

impl Widget for ConfirmDeleteDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::styled("Delete ", styles::text_primary()),
                Span::styled(self.name.to_string(), styles::accent_bold()),
                Span::styled(" from your closet?", styles::text_primary()),
            ]),
            Line::default(),
            key_line(&[("y", "delete"), ("n", "keep")]),
        ];

        render_dialog(area, buf, " Delete item ", 6, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use std::path::PathBuf;

    #[test]
    fn test_upload_dialog_shows_file() {
        let form = UploadForm {
            file: Some(PathBuf::from("/photos/shirt.jpg")),
            in_progress: false,
        };
        let mut term = TestTerminal::new();
        term.render_widget(UploadDialog::new(&form), term.area());

        assert!(term.buffer_contains("Add to closet"));
        assert!(term.buffer_contains("/photos/shirt.jpg"));
        assert!(!term.buffer_contains("Analyzing..."));
    }

    #[test]
    fn test_upload_dialog_progress() {
        let form = UploadForm {
            file: Some(PathBuf::from("/photos/shirt.jpg")),
            in_progress: true,
        };
        let mut term = TestTerminal::new();
        term.render_widget(UploadDialog::new(&form), term.area());

        assert!(term.buffer_contains("Analyzing..."));
    }

    #[test]
    fn test_outfit_form_lists_options() {
        let form = OutfitForm::default();
        let mut term = TestTerminal::new();
        term.render_widget(OutfitFormDialog::new(&form), term.area());

        assert!(term.buffer_contains("Weather"));
        assert!(term.buffer_contains("rainy"));
        assert!(term.buffer_contains("Occasion"));
        assert!(term.buffer_contains("formal"));
    }

    #[test]
    fn test_result_dialog_shows_message() {
        let result = GeneratedOutfit {
            image_url: Some("/output/generated_outfit.png".to_string()),
            message: "Layer the trench over the sweater".to_string(),
        };
        let mut term = TestTerminal::new();
        term.render_widget(OutfitResultDialog::new(&result), term.area());

        assert!(term.buffer_contains("/output/generated_outfit.png"));
        assert!(term.buffer_contains("Layer the trench over the sweater"));
    }

    #[test]
    fn test_picker_prompt_by_purpose() {
        let picker = FilePicker {
            purpose: PickerPurpose::ChatImage,
            input: "~/look.png".to_string(),
        };
        let mut term = TestTerminal::new();
        term.render_widget(FilePickerDialog::new(&picker), term.area());

        assert!(term.buffer_contains("image to attach"));
        assert!(term.buffer_contains("> ~/look.png"));
    }

    #[test]
    fn test_alert_dialog() {
        let alert = Alert::new("Generate outfit", "Please select both weather and occasion");
        let mut term = TestTerminal::new();
        term.render_widget(AlertDialog::new(&alert), term.area());

        assert!(term.buffer_contains("Generate outfit"));
        assert!(term.buffer_contains("Please select both weather and occasion"));
    }

    #[test]
    fn test_confirm_delete_hides_suffix() {
        let mut term = TestTerminal::new();
        term.render_widget(ConfirmDeleteDialog::new("beige-sweater.txt"), term.area());

        assert!(term.buffer_contains("Delete beige-sweater from your closet?"));
    }
}
