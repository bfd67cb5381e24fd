#[cfg(feature = "logger")]
pub mod logger;
