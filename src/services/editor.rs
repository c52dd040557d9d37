// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View/edit state for the dashboard's inline editors.

/// Whether a field is being displayed or edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEditor<T> {
    Viewing,
    Editing {
        draft: T,
    },
}

impl<T> Default for FieldEditor<T> {
    fn default() -> Self {
        FieldEditor::Viewing
    }
}

impl<T> FieldEditor<T> {
    pub fn is_editing(&self) -> bool {
        matches!(self, FieldEditor::Editing { .. })
    }

    pub fn draft(&self) -> Option<&T> {
        match self {
            FieldEditor::Editing { draft } => Some(draft),
            FieldEditor::Viewing => None,
        }
    }
}

/// A displayed value plus its editor.
///
/// The displayed value is whatever the API last returned; drafts never
/// overwrite it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableField<T> {
    displayed: T,
    editor: FieldEditor<T>,
}

impl<T: Clone> EditableField<T> {
    pub fn new(displayed: T) -> Self {
        Self {
            displayed,
            editor: FieldEditor::Viewing,
        }
    }

    /// Field in edit mode holding a draft submitted from the page.
    pub fn from_posted(draft: T) -> Self {
        Self {
            displayed: draft.clone(),
            editor: FieldEditor::Editing { draft },
        }
    }

    /// Draft while editing, otherwise the displayed value.
    pub fn shown(&self) -> &T {
        self.editor.draft().unwrap_or(&self.displayed)
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_editing()
    }

    /// Enter edit mode with a draft seeded from the displayed value.
    /// A no-op if already editing.
    pub fn begin_edit(&mut self) {
        if !self.editor.is_editing() {
            self.editor = FieldEditor::Editing {
                draft: self.displayed.clone(),
            };
        }
    }

    /// Replace the draft. Returns `false` when not editing.
    pub fn update_draft(&mut self, value: T) -> bool {
        match &mut self.editor {
            FieldEditor::Editing { draft } => {
                *draft = value;
                true
            }
            FieldEditor::Viewing => false,
        }
    }

    /// Drop the draft and go back to viewing.
    pub fn cancel(&mut self) {
        self.editor = FieldEditor::Viewing;
    }

    /// Leave edit mode, handing back the draft to send to the API.
    ///
    /// Returns `None` when not editing, so a confirm can produce at most one
    /// update.
    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.editor, FieldEditor::Viewing) {
            FieldEditor::Editing { draft } => Some(draft),
            FieldEditor::Viewing => None,
        }
    }
}
