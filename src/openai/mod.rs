mod core;

pub use self::core::{CompletionError, MAX_OUTPUT_TOKENS, TEMPERATURE, completion};
