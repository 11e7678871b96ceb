use rand::{
    Rng,
    distr::Alphanumeric,
};

/// Number of characters in a generated token.
pub const TOKEN_LENGTH: usize = 32;

/// Generate a random alphanumeric token of [`TOKEN_LENGTH`] characters.
///
/// Alphanumeric tokens can travel in HTTP headers and URLs without
/// escaping. The generator is seeded by the operating system and panics
/// when no entropy is available, a token is never empty.
pub fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        assert_eq!(generate_token().len(), TOKEN_LENGTH);
    }

    #[test]
    fn test_token_charset() {
        let token = generate_token();
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tokens_differ() {
        assert_ne!(generate_token(), generate_token());
    }
}
