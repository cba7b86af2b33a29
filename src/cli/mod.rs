pub mod convert;
pub mod format;
pub mod interactive;
pub mod rates;
pub mod setup;
pub mod ui;
