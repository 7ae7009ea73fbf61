pub mod genre;
pub mod validate;

pub use genre::{is_approved_genre, GENRE_OPTIONS};
