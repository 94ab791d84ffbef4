pub mod http;

pub use self::http::{API_KEY_ENV_VARS, HttpGeminiClient};
