use crate::calc::genre::{is_approved_genre, GENRE_OPTIONS};
use log::info;

pub const NICKNAME_REQUIRED: &str = "❌ Invite failed: nickname cannot be empty!";
pub const GENRE_NOT_APPROVED: &str = "❌ Invite failed: your game genre is not approved yet.";
pub const SUBMIT_SUCCESS: &str = "✅ Validation succeeded! Data sent.";

/// State of the sign-up form: the two inputs plus the feedback the
/// validator writes back.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub nickname: String,
    /// Index into `GENRE_OPTIONS`.
    pub genre_index: usize,
    pub error: String,
    /// Failure style on the submit button.
    pub failed: bool,
    /// Set on a successful submit; the UI shows it as a modal until dismissed.
    pub acknowledgment: Option<String>,
}

impl SignupForm {
    pub fn genre(&self) -> &'static str {
        GENRE_OPTIONS[self.genre_index % GENRE_OPTIONS.len()]
    }

    pub fn next_genre(&mut self) {
        self.genre_index = (self.genre_index + 1) % GENRE_OPTIONS.len();
    }

    pub fn prev_genre(&mut self) {
        self.genre_index = (self.genre_index + GENRE_OPTIONS.len() - 1) % GENRE_OPTIONS.len();
    }

    #[cfg(test)]
    /// Selects `genre` if it is one of the offered options (case-insensitive).
    /// Returns false and leaves the selection alone otherwise.
    pub fn select_genre(&mut self, genre: &str) -> bool {
        let wanted = genre.to_uppercase();
        match GENRE_OPTIONS.iter().position(|g| g.to_uppercase() == wanted) {
            Some(i) => {
                self.genre_index = i;
                true
            }
            None => false,
        }
    }

    fn fail(&mut self, message: &str) {
        self.error = message.to_string();
        self.failed = true;
    }
}

/// Validates the form and writes feedback into it.
///
/// The nickname check short-circuits: an empty (or all-whitespace) nickname
/// never reaches the genre check.
pub fn validate_form(form: &mut SignupForm) -> bool {
    validate_with(form, form.genre())
}

/// Same as `validate_form`, but checks an arbitrary genre string instead of
/// the selected option. Used by the `check` subcommand.
pub fn validate_with(form: &mut SignupForm, genre: &str) -> bool {
    form.error.clear();
    form.failed = false;

    if form.nickname.trim().is_empty() {
        form.fail(NICKNAME_REQUIRED);
        return false;
    }

    if is_approved_genre(genre) {
        form.acknowledgment = Some(SUBMIT_SUCCESS.to_string());
        info!("form submitted: nickname={}, genre={}", form.nickname, genre);
        true
    } else {
        form.fail(GENRE_NOT_APPROVED);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(nickname: &str, genre: &str) -> SignupForm {
        let mut f = SignupForm {
            nickname: nickname.to_string(),
            ..SignupForm::default()
        };
        assert!(f.select_genre(genre), "unknown option {genre}");
        f
    }

    #[test]
    fn test_empty_nickname_fails() {
        let mut f = form("", "RPG");
        assert!(!validate_form(&mut f));
        assert_eq!(f.error, NICKNAME_REQUIRED);
        assert!(f.failed);
        assert!(f.acknowledgment.is_none());
    }

    #[test]
    fn test_whitespace_nickname_fails_before_genre_check() {
        // An unapproved genre would produce a different message if it were checked.
        let mut f = form("   \t ", "Sports");
        assert!(!validate_form(&mut f));
        assert_eq!(f.error, NICKNAME_REQUIRED);
    }

    #[test]
    fn test_approved_genre_succeeds() {
        let mut f = SignupForm {
            nickname: "Alex".to_string(),
            ..SignupForm::default()
        };
        assert!(validate_with(&mut f, "rpg"));
        assert!(f.error.is_empty());
        assert!(!f.failed);
        assert_eq!(f.acknowledgment.as_deref(), Some(SUBMIT_SUCCESS));
    }

    #[test]
    fn test_unapproved_genre_fails() {
        let mut f = form("Alex", "Sports");
        assert!(!validate_form(&mut f));
        assert_eq!(f.error, GENRE_NOT_APPROVED);
        assert!(f.failed);
        assert!(f.acknowledgment.is_none());
    }

    #[test]
    fn test_previous_error_cleared_on_success() {
        let mut f = form("", "RPG");
        validate_form(&mut f);
        assert!(f.failed);

        f.nickname = "Alex".to_string();
        assert!(validate_form(&mut f));
        assert!(f.error.is_empty());
        assert!(!f.failed);
    }

    #[test]
    fn test_reset_is_idempotent_on_repeated_failure() {
        let mut f = form("Alex", "MOBA");
        validate_form(&mut f);
        validate_form(&mut f);
        assert_eq!(f.error, GENRE_NOT_APPROVED);
    }

    #[test]
    fn test_genre_cycling_wraps() {
        let mut f = SignupForm::default();
        assert_eq!(f.genre(), "RPG");
        f.prev_genre();
        assert_eq!(f.genre(), "Puzzle");
        f.next_genre();
        assert_eq!(f.genre(), "RPG");
    }

    #[test]
    fn test_select_unknown_genre_keeps_selection() {
        let mut f = SignupForm::default();
        f.next_genre();
        assert!(!f.select_genre("Racing"));
        assert_eq!(f.genre(), "SLG");
    }
}
