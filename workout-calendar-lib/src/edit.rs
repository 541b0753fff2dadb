//src/edit.rs
use crate::calendar::DateKey;
use crate::store::{Error as StoreError, WorkoutField, WorkoutRecord, WorkoutStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Creating,
    /// Position captured when the record was opened.
    Editing(usize),
}

/// State of the workout entry form: the draft being typed, whether it will be
/// appended or written over an existing record, and whether the form is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    draft: WorkoutRecord,
    mode: EditMode,
    modal_open: bool,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn draft(&self) -> &WorkoutRecord {
        &self.draft
    }

    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    pub const fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    /// Label of the primary form action.
    pub const fn commit_label(&self) -> &'static str {
        match self.mode {
            EditMode::Creating => "Add",
            EditMode::Editing(_) => "Save",
        }
    }

    pub fn start_create(&mut self) {
        self.reset();
        self.modal_open = true;
    }

    /// Opens the form seeded with a copy of the record at `index`.
    /// The session is left untouched when the index does not exist.
    pub fn start_edit(
        &mut self,
        store: &WorkoutStore,
        key: &DateKey,
        index: usize,
    ) -> Result<(), StoreError> {
        let record = store.record_at(key, index)?;
        self.draft = record.clone();
        self.mode = EditMode::Editing(index);
        self.modal_open = true;
        Ok(())
    }

    pub fn update_draft_field(&mut self, field: WorkoutField, value: impl Into<String>) {
        self.draft.set_field(field, value.into());
    }

    /// Writes the draft into `store` and returns the resulting store.
    ///
    /// An `Editing` index is checked against `store` again here since the day's
    /// records may have moved since the form was opened. On error the session
    /// keeps its draft and mode.
    pub fn commit(&mut self, store: &WorkoutStore, key: &DateKey) -> Result<WorkoutStore, StoreError> {
        let next = match self.mode {
            EditMode::Creating => store.append(key, self.draft.clone()),
            EditMode::Editing(index) => store.replace_at(key, index, self.draft.clone())?,
        };
        self.reset();
        Ok(next)
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.draft = WorkoutRecord::default();
        self.mode = EditMode::Creating;
        self.modal_open = false;
    }
}
