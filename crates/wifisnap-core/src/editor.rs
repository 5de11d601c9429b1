// ── Credential editor ──
//
// Holds the editable copy of extracted credentials and its edit/lock
// state. Mirrors disabled-input semantics: writes while locked are
// silently dropped, not errors.

use tracing::debug;

use crate::model::{CredentialField, Credentials, EditState};

/// The editable copy of one captured image's credentials.
///
/// `save()` locks unconditionally -- even with an empty SSID. Validation
/// happens at encode time instead, so a user can lock a provisional pair
/// and come back to fix the network name when a join or QR export
/// rejects it.
#[derive(Debug, Clone, Default)]
pub struct CredentialEditor {
    credentials: Credentials,
    state: EditState,
}

impl CredentialEditor {
    /// Seed the editor from the extraction result. `None` (nothing
    /// recognized in the image) starts with empty fields.
    pub fn new(extracted: Option<Credentials>) -> Self {
        Self {
            credentials: extracted.unwrap_or_default(),
            state: EditState::Editing,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    /// Overwrite one field. Returns whether the write was applied;
    /// `false` while locked.
    pub fn update(&mut self, field: CredentialField, value: impl Into<String>) -> bool {
        if self.state == EditState::Locked {
            debug!(%field, "ignoring field update while locked");
            return false;
        }
        match field {
            CredentialField::Ssid => self.credentials.ssid = value.into(),
            CredentialField::Password => self.credentials.password = value.into(),
        }
        true
    }

    /// `Editing → Locked`. No validation -- see the type-level docs.
    pub fn save(&mut self) {
        self.state = EditState::Locked;
    }

    /// `Locked → Editing`. Returns whether a transition happened, so the
    /// session knows to clear the provisioning status exactly once.
    pub fn edit(&mut self) -> bool {
        if self.state == EditState::Locked {
            self.state = EditState::Editing;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn seeds_from_extraction() {
        let editor = CredentialEditor::new(Some(Credentials::new("Home", "secret1")));
        assert_eq!(editor.credentials(), &Credentials::new("Home", "secret1"));
        assert_eq!(editor.state(), EditState::Editing);
    }

    #[test]
    fn seeds_empty_when_nothing_extracted() {
        let editor = CredentialEditor::new(None);
        assert_eq!(editor.credentials(), &Credentials::default());
        assert_eq!(editor.state(), EditState::Editing);
    }

    #[test]
    fn updates_apply_while_editing() {
        let mut editor = CredentialEditor::new(None);
        assert!(editor.update(CredentialField::Ssid, "Cafe"));
        assert!(editor.update(CredentialField::Password, "latte"));
        assert_eq!(editor.credentials(), &Credentials::new("Cafe", "latte"));
    }

    #[test]
    fn updates_are_noops_while_locked() {
        let mut editor = CredentialEditor::new(Some(Credentials::new("Home", "secret1")));
        editor.save();
        assert!(!editor.update(CredentialField::Ssid, "Mangled"));
        assert_eq!(editor.credentials(), &Credentials::new("Home", "secret1"));
    }

    #[test]
    fn save_locks_even_with_empty_ssid() {
        // Provisional saves are allowed; the encoders validate at use.
        let mut editor = CredentialEditor::new(None);
        editor.save();
        assert_eq!(editor.state(), EditState::Locked);
    }

    #[test]
    fn save_then_edit_round_trips_values() {
        let mut editor = CredentialEditor::new(Some(Credentials::new("Home", "secret1")));
        editor.save();
        assert!(editor.edit());
        assert_eq!(editor.state(), EditState::Editing);
        assert_eq!(editor.credentials(), &Credentials::new("Home", "secret1"));
    }

    #[test]
    fn edit_while_editing_does_not_transition() {
        let mut editor = CredentialEditor::new(None);
        assert!(!editor.edit());
    }
}
