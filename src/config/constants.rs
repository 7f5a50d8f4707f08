// Project-wide constants
//
// Centralised here so endpoint URLs, timeouts and other magic values have
// one source of truth. Import via `use crate::config::constants::*;`.

/// Groq OpenAI-compatible chat completions endpoint.
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Model used to rank candidate palindromes.
pub const ORACLE_MODEL: &str = "openai/gpt-oss-120b";

/// Maximum completion tokens for one ranking request.
pub const ORACLE_MAX_COMPLETION_TOKENS: u32 = 8192;

/// Request timeout for one oracle call.
pub const ORACLE_TIMEOUT_SECS: u64 = 30;

/// Wall-clock timeout for one palindromer invocation.
pub const GENERATOR_TIMEOUT_SECS: u64 = 60;

/// Delimiter separating the two halves of a candidate phrase.
pub const DELIMITER: char = '|';

/// Default number of refinement rounds.
pub const DEFAULT_MAX_ITERATIONS: usize = 5;

/// Default path of the palindromer binary.
pub const DEFAULT_GENERATOR_PATH: &str = "./Palindromer";

/// Default lexicon file, one token per line.
pub const DEFAULT_LEXICON_PATH: &str = "dictionary.txt";
