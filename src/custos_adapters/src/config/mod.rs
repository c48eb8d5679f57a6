pub mod settings;

pub use settings::{
    ApplicationSettings, AuthSettings, DatabaseSettings, EmailSettings, Settings, SettingsError,
};
