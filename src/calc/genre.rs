/// Genres accepted by the sign-up form. Matching ignores case.
pub const APPROVED_GENRES: [&str; 5] = ["RPG", "SLG", "开放世界", "策略", "射击"];

/// Everything the genre selector offers, approved or not.
pub const GENRE_OPTIONS: [&str; 8] = [
    "RPG", "SLG", "开放世界", "策略", "射击", "Sports", "MOBA", "Puzzle",
];

/// Returns true when `candidate` equals an approved genre, ignoring case.
pub fn is_approved_genre(candidate: &str) -> bool {
    let wanted = candidate.to_uppercase();
    APPROVED_GENRES
        .iter()
        .any(|genre| genre.to_uppercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_approved_genre_matches_itself() {
        for genre in APPROVED_GENRES {
            assert!(is_approved_genre(genre), "{genre} should be approved");
        }
    }

    #[test]
    fn test_case_permutations_match() {
        assert!(is_approved_genre("rpg"));
        assert!(is_approved_genre("Rpg"));
        assert!(is_approved_genre("rPg"));
        assert!(is_approved_genre("slg"));
        assert!(is_approved_genre("sLG"));
    }

    #[test]
    fn test_unapproved_genres_rejected_in_any_case() {
        assert!(!is_approved_genre("Sports"));
        assert!(!is_approved_genre("SPORTS"));
        assert!(!is_approved_genre("moba"));
        assert!(!is_approved_genre("puzzle"));
    }

    #[test]
    fn test_partial_and_padded_input_rejected() {
        assert!(!is_approved_genre("RP"));
        assert!(!is_approved_genre("RPGs"));
        assert!(!is_approved_genre(" RPG"));
        assert!(!is_approved_genre(""));
    }

    #[test]
    fn test_options_contain_every_approved_genre() {
        for genre in APPROVED_GENRES {
            assert!(GENRE_OPTIONS.contains(&genre));
        }
        assert!(GENRE_OPTIONS.iter().any(|g| !is_approved_genre(g)));
    }
}
