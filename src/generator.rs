use crate::wordlist::WordList;
use anyhow::{Context, Result};
use rand::prelude::IndexedRandom;
use zeroize::Zeroizing;

// Number-row symbols only, and no parentheses or brackets; anything else
// tends to trip shell quoting or picky password fields.
pub const SIMPLE_SYMBOLS: &[u8] = b"!@#$%^&*";

const DIGITS: &[u8] = b"0123456789";

/// Generates a passphrase of the form "correct horse battery staple".
///
/// Words are drawn independently and uniformly with replacement from the
/// word list, using the thread-local CSPRNG. A word count of zero yields
/// an empty string.
pub fn generate_passphrase(word_list: &WordList, word_count: usize) -> Result<Zeroizing<String>> {
    if word_list.is_empty() {
        anyhow::bail!("cannot generate from an empty word list");
    }

    let mut rng = rand::rng();
    let mut passphrase = Zeroizing::new(String::new());

    for i in 0..word_count {
        let word = word_list
            .words()
            .choose(&mut rng)
            .context("word list is empty")?;
        if i > 0 {
            passphrase.push(' ');
        }
        passphrase.push_str(word);
    }

    Ok(passphrase)
}

/// Generates a password of the form "CorrectHorseBatteryStaple!1".
///
/// Each drawn word is title-cased and concatenated without separators,
/// then exactly one symbol from [`SIMPLE_SYMBOLS`] and one decimal digit
/// are appended. The casing is positional, not random, so it adds no
/// entropy of its own.
pub fn generate_password(word_list: &WordList, word_count: usize) -> Result<Zeroizing<String>> {
    if word_list.is_empty() {
        anyhow::bail!("cannot generate from an empty word list");
    }

    let mut rng = rand::rng();
    let mut password = Zeroizing::new(String::new());

    for _ in 0..word_count {
        let word = word_list
            .words()
            .choose(&mut rng)
            .context("word list is empty")?;
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            password.push(first.to_ascii_uppercase());
            password.push_str(chars.as_str());
        }
    }

    let symbol = SIMPLE_SYMBOLS.choose(&mut rng).context("empty symbol set")?;
    let digit = DIGITS.choose(&mut rng).context("empty digit set")?;
    password.push(*symbol as char);
    password.push(*digit as char);

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_list(words: &[&str]) -> WordList {
        WordList::new(words.iter().map(|w| w.to_string()))
    }

    const XKCD: &[&str] = &["correct", "horse", "battery", "staple"];

    #[test]
    fn test_symbol_set() {
        assert_eq!(SIMPLE_SYMBOLS.len(), 8);

        use std::collections::HashSet;
        let unique: HashSet<_> = SIMPLE_SYMBOLS.iter().collect();
        assert_eq!(unique.len(), SIMPLE_SYMBOLS.len(), "symbol set has duplicates");

        for symbol in SIMPLE_SYMBOLS {
            assert!(
                !b"()[]{}<>".contains(symbol),
                "symbol set must not contain brackets, found \"{}\"",
                *symbol as char
            );
        }
    }

    #[test]
    fn test_passphrase_word_count_and_membership() {
        let list = word_list(XKCD);
        let passphrase = generate_passphrase(&list, 4).unwrap();

        let tokens: Vec<&str> = passphrase.split(' ').collect();
        assert_eq!(tokens.len(), 4);
        for token in tokens {
            assert!(XKCD.contains(&token), "unexpected word \"{}\"", token);
        }
    }

    #[test]
    fn test_passphrase_zero_words() {
        let list = word_list(XKCD);
        let passphrase = generate_passphrase(&list, 0).unwrap();
        assert_eq!(&**passphrase, "");
    }

    #[test]
    fn test_passphrase_single_word_list() {
        let list = word_list(&["word"]);
        let passphrase = generate_passphrase(&list, 3).unwrap();
        assert_eq!(&**passphrase, "word word word");
    }

    #[test]
    fn test_password_suffix_shape() {
        let list = word_list(XKCD);

        for _ in 0..32 {
            let password = generate_password(&list, 2).unwrap();
            let bytes = password.as_bytes();
            let digit = bytes[bytes.len() - 1];
            let symbol = bytes[bytes.len() - 2];

            assert!(digit.is_ascii_digit(), "last char must be a digit");
            assert!(
                SIMPLE_SYMBOLS.contains(&symbol),
                "second-to-last char must be a simple symbol, found \"{}\"",
                symbol as char
            );
        }
    }

    #[test]
    fn test_password_title_cased_prefix() {
        let list = word_list(&["horse"]);
        let password = generate_password(&list, 2).unwrap();

        assert_eq!(password.len(), "HorseHorse".len() + 2);
        assert!(password.starts_with("HorseHorse"));
    }

    #[test]
    fn test_password_no_words_still_has_suffix() {
        let list = word_list(XKCD);
        let password = generate_password(&list, 0).unwrap();
        assert_eq!(password.len(), 2);
    }

    #[test]
    fn test_password_prefix_segments() {
        let list = word_list(XKCD);
        let password = generate_password(&list, 3).unwrap();
        let prefix = &password[..password.len() - 2];

        let uppercase_count = prefix.chars().filter(|c| c.is_ascii_uppercase()).count();
        assert_eq!(uppercase_count, 3, "one uppercase letter per word");
        assert!(prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_empty_list_rejected() {
        let list = word_list(&[]);

        let result = generate_passphrase(&list, 4);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty word list"));

        let result = generate_password(&list, 4);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty word list"));
    }

    #[test]
    fn test_empty_list_rejected_even_for_zero_words() {
        // The guard runs before any draw, so a zero-word request from an
        // empty list still fails.
        let list = word_list(&[]);
        assert!(generate_passphrase(&list, 0).is_err());
        assert!(generate_password(&list, 0).is_err());
    }
}
