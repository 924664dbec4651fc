//! Modal lifecycle for the upload, outfit-generation and result dialogs
//!
//! Every modal starts hidden. Closing a modal always resets its form and
//! hides its progress indicator, whatever caused the close. The modals are
//! independent of one another; several can be open at once and the topmost
//! one receives input.

use std::path::PathBuf;

use stylist_core::GeneratedOutfit;

/// Weather choices offered by the outfit generation form
pub const WEATHER_OPTIONS: [&str; 6] = ["sunny", "cloudy", "rainy", "snowy", "hot", "cold"];

/// Occasion choices offered by the outfit generation form
pub const OCCASION_OPTIONS: [&str; 6] = ["casual", "work", "formal", "date", "party", "sport"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    Upload,
    OutfitForm,
    OutfitResult,
}

/// What `open` actually put on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Shown,
    /// The file picker came up first; the modal follows once a file is chosen
    PickerShown,
}

/// What a chosen file is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPurpose {
    Upload,
    ChatImage,
}

/// Path prompt standing in for the platform file picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePicker {
    pub purpose: PickerPurpose,
    pub input: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub file: Option<PathBuf>,
    pub in_progress: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Weather,
    Occasion,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutfitForm {
    pub weather: Option<usize>,
    pub occasion: Option<usize>,
    pub field: FormField,
    pub in_progress: bool,
}

impl OutfitForm {
    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            FormField::Weather => FormField::Occasion,
            FormField::Occasion => FormField::Weather,
        };
    }

    /// Step the focused picker. An empty picker starts at the first (or last) option.
    pub fn cycle_option(&mut self, forward: bool) {
        let (slot, len) = match self.field {
            FormField::Weather => (&mut self.weather, WEATHER_OPTIONS.len()),
            FormField::Occasion => (&mut self.occasion, OCCASION_OPTIONS.len()),
        };
        *slot = Some(match (*slot, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
    }

    pub fn weather(&self) -> Option<&'static str> {
        self.weather.map(|i| WEATHER_OPTIONS[i])
    }

    pub fn occasion(&self) -> Option<&'static str> {
        self.occasion.map(|i| OCCASION_OPTIONS[i])
    }
}

/// Visibility and form state of every modal
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    upload_visible: bool,
    outfit_form_visible: bool,
    result_visible: bool,

    pub upload: UploadForm,
    pub outfit_form: OutfitForm,
    pub result: Option<GeneratedOutfit>,
    pub picker: Option<FilePicker>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a modal. The upload modal asks for a file first when none is chosen.
    pub fn open(&mut self, id: ModalId) -> OpenOutcome {
        match id {
            ModalId::Upload if self.upload.file.is_none() => {
                self.open_picker(PickerPurpose::Upload);
                return OpenOutcome::PickerShown;
            }
            ModalId::Upload => self.upload_visible = true,
            ModalId::OutfitForm => self.outfit_form_visible = true,
            ModalId::OutfitResult => self.result_visible = true,
        }
        OpenOutcome::Shown
    }

    /// Hide a modal, reset its fields and hide its progress indicator
    pub fn close(&mut self, id: ModalId) {
        match id {
            ModalId::Upload => {
                self.upload_visible = false;
                self.upload = UploadForm::default();
            }
            ModalId::OutfitForm => {
                self.outfit_form_visible = false;
                self.outfit_form = OutfitForm::default();
            }
            ModalId::OutfitResult => {
                self.result_visible = false;
                self.result = None;
            }
        }
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        match id {
            ModalId::Upload => self.upload_visible,
            ModalId::OutfitForm => self.outfit_form_visible,
            ModalId::OutfitResult => self.result_visible,
        }
    }

    /// The modal drawn on top and receiving keys
    pub fn top(&self) -> Option<ModalId> {
        [ModalId::OutfitResult, ModalId::OutfitForm, ModalId::Upload]
            .into_iter()
            .find(|id| self.is_open(*id))
    }

    pub fn any_open(&self) -> bool {
        self.top().is_some()
    }

    /// Show the generated look
    pub fn show_result(&mut self, result: GeneratedOutfit) {
        self.result = Some(result);
        self.result_visible = true;
    }

    pub fn open_picker(&mut self, purpose: PickerPurpose) {
        self.picker = Some(FilePicker {
            purpose,
            input: String::new(),
        });
    }

    pub fn cancel_picker(&mut self) {
        self.picker = None;
    }

    /// Accept the picker's file. For uploads this is what makes the modal visible.
    pub fn choose_file(&mut self, path: PathBuf) -> Option<PickerPurpose> {
        let picker = self.picker.take()?;
        if picker.purpose == PickerPurpose::Upload {
            self.upload.file = Some(path);
            self.upload_visible = true;
        }
        Some(picker.purpose)
    }
}
