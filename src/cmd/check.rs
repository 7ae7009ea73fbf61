use crate::calc::validate::{validate_with, SignupForm};
use anyhow::{bail, Result};

pub fn run(nickname: &str, genre: &str) -> Result<()> {
    if !write_check(nickname, genre, &mut std::io::stdout())? {
        bail!("submission rejected");
    }
    Ok(())
}

/// Runs the form validator on the given values and prints what the page
/// would show. Returns whether the submission was accepted.
pub(crate) fn write_check<W: std::io::Write>(
    nickname: &str,
    genre: &str,
    out: &mut W,
) -> Result<bool> {
    let mut form = SignupForm {
        nickname: nickname.to_string(),
        ..SignupForm::default()
    };
    let accepted = validate_with(&mut form, genre);
    if accepted {
        if let Some(ack) = &form.acknowledgment {
            writeln!(out, "{ack}")?;
        }
        writeln!(out, "  Nickname: {}", nickname)?;
        writeln!(out, "  Genre:    {}", genre)?;
    } else {
        writeln!(out, "{}", form.error)?;
    }
    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::validate::{GENRE_NOT_APPROVED, NICKNAME_REQUIRED, SUBMIT_SUCCESS};

    fn check(nickname: &str, genre: &str) -> (bool, String) {
        let mut buf = Vec::new();
        let ok = write_check(nickname, genre, &mut buf).unwrap();
        (ok, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_check_accepts_approved_genre() {
        let (ok, out) = check("Alex", "rpg");
        assert!(ok);
        assert!(out.contains(SUBMIT_SUCCESS));
        assert!(out.contains("Alex"));
    }

    #[test]
    fn test_check_rejects_unapproved_genre() {
        let (ok, out) = check("Alex", "Sports");
        assert!(!ok);
        assert!(out.contains(GENRE_NOT_APPROVED));
    }

    #[test]
    fn test_check_rejects_blank_nickname() {
        let (ok, out) = check("  ", "RPG");
        assert!(!ok);
        assert!(out.contains(NICKNAME_REQUIRED));
    }

    #[test]
    fn test_check_accepts_genre_outside_selector() {
        // The CLI is not limited to the selector's options.
        let (ok, _) = check("Alex", "射击");
        assert!(ok);
    }
}
