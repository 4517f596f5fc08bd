//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::text_editor;

use crate::cli::LaunchConfig;
use crate::core::bridge::Metaflac;
use crate::core::error::TagError;
use crate::core::session::Session;
use crate::core::types::{Field, TagSet};

pub(crate) const READY_STATUS: &str = "Ready - Select a FLAC file to begin";

/// Draft editable tags (strings, so the user can type anything).
pub(crate) struct TagDraft {
    pub fields: BTreeMap<Field, String>,
    /// Free-form custom area, one `KEY=VALUE` per line.
    pub custom: text_editor::Content,
}

impl Default for TagDraft {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
            custom: text_editor::Content::new(),
        }
    }
}

impl TagDraft {
    pub(crate) fn from_tags(tags: &TagSet) -> Self {
        Self {
            fields: tags.well_known().map(|(f, v)| (f, v.to_string())).collect(),
            custom: text_editor::Content::with_text(&tags.custom.join("\n")),
        }
    }

    pub(crate) fn field(&self, field: Field) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Snapshot the form as a `TagSet`. Values and lines are passed through
    /// untouched; trimming and skipping happen in the store's save plan.
    pub(crate) fn to_tags(&self) -> TagSet {
        let mut tags = TagSet::new();
        for (field, value) in &self.fields {
            tags.set(*field, value.as_str());
        }
        tags.custom = self.custom.text().lines().map(str::to_string).collect();
        tags
    }
}

/// What a finished save should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AfterSave {
    Stay,
    Exit,
}

/// Modal overlay. While one is open the rest of the window is inert.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Dialog {
    Error { title: String, body: String },
    Info { title: String, body: String },
    ConfirmRemoveAll,
    RawOutput { file_name: String, text: String },
}

/// App state
pub(crate) struct Quill {
    pub tool: Arc<Metaflac>,
    pub session: Session,
    pub draft: TagDraft,

    pub status: String,
    /// Inline, timestamped confirmation after a save.
    pub success: Option<String>,

    /// True while a metaflac operation runs on the worker thread.
    pub busy: bool,
    /// True while the file picker is open; the session may be replaced when it closes.
    pub picking: bool,
    pub dialog: Option<Dialog>,

    pub scale: f32,
}

impl Quill {
    pub(crate) fn new(config: LaunchConfig) -> Self {
        Self {
            tool: Arc::new(Metaflac::new(config.program)),
            session: Session::new(config.file),
            draft: TagDraft::default(),
            status: READY_STATUS.to_string(),
            success: None,
            busy: false,
            picking: false,
            dialog: None,
            scale: config.scale,
        }
    }

    pub(crate) fn title(&self) -> String {
        match self.session.path() {
            Some(_) => format!("Quill - {}", self.session.file_name()),
            None => "Quill - FLAC Metadata Editor".to_string(),
        }
    }

    pub(crate) fn scale_factor(&self) -> f32 {
        self.scale
    }

    /// Actions that launch metaflac are refused while busy, picking, or behind a modal.
    pub(crate) fn can_act(&self) -> bool {
        !self.busy && !self.picking && self.dialog.is_none()
    }
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // File
    BrowsePressed,
    FilePicked(Option<PathBuf>),
    LoadPressed,
    LoadFinished(PathBuf, Result<TagSet, TagError>),

    // Editing
    FieldChanged(Field, String),
    ClearField(Field),
    CustomEdited(text_editor::Action),
    ClearForm,

    // Save
    SavePressed,
    SaveAndExitPressed,
    SaveFinished(PathBuf, AfterSave, TagSet, Result<(), TagError>),

    // Remove all
    RemoveAllPressed,
    RemoveAllConfirmed,
    RemoveAllFinished(PathBuf, Result<(), TagError>),

    // Raw view
    ShowRawPressed,
    RawFinished(PathBuf, Result<String, TagError>),

    // Dialogs
    DismissDialog,
}
