pub mod advice;
pub mod check;
pub mod genres;
pub mod init;
pub mod root;
