pub mod app_settings;
pub mod persistence;
pub mod profile;

pub use app_settings::PageSettings;
pub use persistence::Persistable;
pub use profile::Profile;
