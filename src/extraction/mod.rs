pub mod enums;
pub mod errors;
pub mod gemini;
pub mod models;
pub mod service;
pub mod util;
