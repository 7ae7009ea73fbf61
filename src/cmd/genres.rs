use crate::calc::{is_approved_genre, GENRE_OPTIONS};
use anyhow::Result;

pub fn run() -> Result<()> {
    write_genres(&mut std::io::stdout())
}

pub(crate) fn write_genres<W: std::io::Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Genres")?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<14} {}", "Genre", "Approved")?;
    let mut approved = 0;
    for genre in GENRE_OPTIONS {
        let ok = is_approved_genre(genre);
        if ok {
            approved += 1;
        }
        writeln!(out, "  {:<14} {}", genre, if ok { "yes" } else { "no" })?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} approved of {}", approved, GENRE_OPTIONS.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> String {
        let mut buf = Vec::new();
        write_genres(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_genres_lists_every_option() {
        let out = output();
        for genre in GENRE_OPTIONS {
            assert!(out.contains(genre));
        }
    }

    #[test]
    fn test_write_genres_marks_approval() {
        let out = output();
        assert!(out.lines().any(|l| l.contains("RPG") && l.ends_with("yes")));
        assert!(out.lines().any(|l| l.contains("Sports") && l.ends_with("no")));
    }

    #[test]
    fn test_write_genres_total() {
        assert!(output().contains("Total: 5 approved of 8"));
    }
}
