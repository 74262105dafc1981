use nanoid::nanoid;
use validator::ValidationError;

const HEX_ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

pub const GENERATED_CODE_LEN: usize = 6;
pub const MIN_CODE_LEN: usize = 6;
pub const MAX_CODE_LEN: usize = 8;

/// Random lowercase hex code. Uniqueness is left to the store's index.
pub fn generate_code() -> String {
    nanoid!(GENERATED_CODE_LEN, &HEX_ALPHABET)
}

/// True if `code` matches `^[a-zA-Z0-9]{6,8}$`.
pub fn is_valid_code(code: &str) -> bool {
    (MIN_CODE_LEN..=MAX_CODE_LEN).contains(&code.len())
        && code.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validator hook for caller-supplied codes. An empty code means "generate one".
pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() || is_valid_code(code) {
        return Ok(());
    }
    Err(ValidationError::new("code_format")
        .with_message("Code must be 6-8 alphanumeric characters.".into()))
}
