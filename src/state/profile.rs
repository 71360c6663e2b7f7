//! Profile page state: the profile, its post list, and the bio editor.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::feed::PostListState;
use super::session::Session;
use super::view::ViewState;
use crate::net::error::ApiError;
use crate::net::types::Profile;

pub const PROFILE_LOAD_FAILED: &str = "Ошибка загрузки профиля";
pub const PROFILE_UPDATE_FAILED: &str = "Ошибка обновления профиля";

/// Modal editor for the owner's bio.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BioEditor {
    pub open: bool,
    pub draft: String,
    pub saving: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub profile: ViewState<Profile>,
    pub posts: PostListState,
    pub editor: BioEditor,
}

impl ProfileState {
    /// Store the profile fetch outcome and seed the bio draft.
    pub fn apply_profile(&mut self, result: Result<Profile, ApiError>) {
        if let Ok(profile) = &result {
            self.editor.draft = profile.bio_text().to_owned();
        }
        self.profile = ViewState::from_result(result, |e| {
            e.server_message().unwrap_or(PROFILE_LOAD_FAILED).to_owned()
        });
    }

    pub fn is_own(&self, session: &Session) -> bool {
        self.profile.ready().is_some_and(|p| session.is_owner(p.id))
    }

    pub fn open_editor(&mut self) {
        self.editor.open = true;
        self.editor.error = None;
    }

    /// Cancel: close and restore the draft from the saved bio.
    pub fn close_editor(&mut self) {
        self.editor.open = false;
        self.editor.error = None;
        self.editor.draft = self
            .profile
            .ready()
            .map(|p| p.bio_text().to_owned())
            .unwrap_or_default();
    }

    pub fn begin_save(&mut self) {
        self.editor.saving = true;
        self.editor.error = None;
    }

    /// Backend accepted the bio: adopt the returned profile and close.
    pub fn apply_saved(&mut self, profile: Profile) {
        self.editor.draft = profile.bio_text().to_owned();
        self.editor.saving = false;
        self.editor.open = false;
        self.profile = ViewState::Ready(profile);
    }

    pub fn apply_save_error(&mut self, message: String) {
        self.editor.saving = false;
        self.editor.error = Some(message);
    }
}

/// First letter of the username, uppercased, for the avatar placeholder.
pub fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "A".to_owned())
}
