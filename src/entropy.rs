use crate::generator::SIMPLE_SYMBOLS;

const DIGIT_ALPHABET_SIZE: usize = 10;

/// Estimated entropy in bits for a plain passphrase: each word is one
/// uniform draw with replacement from the word list.
pub fn passphrase_bits(wordlist_size: usize, word_count: usize) -> f64 {
    word_count as f64 * (wordlist_size as f64).log2()
}

/// Estimated entropy in bits for a requirements-mode password.
///
/// The symbol and digit each add one uniform draw from their fixed
/// alphabets. Title-casing is fully determined by word position and
/// contributes nothing. Both figures are upper bounds assuming uniform
/// independent draws.
pub fn password_bits(wordlist_size: usize, word_count: usize) -> f64 {
    passphrase_bits(wordlist_size, word_count)
        + (SIMPLE_SYMBOLS.len() as f64).log2()
        + (DIGIT_ALPHABET_SIZE as f64).log2()
}
