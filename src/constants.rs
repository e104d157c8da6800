/// Browser-side settings for the planner front-end.
// localStorage key holding the saved-design library (JSON array)
pub const STORAGE_KEY: &str = "homeTheaterDesigns";

// Console log level for the wasm build
pub const CONSOLE_LOG_LEVEL: log::Level = log::Level::Info;
