use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use xkpass::wordlist::WordList;
use xkpass::{entropy, generator, ui};

const DEFAULT_WORD_LIST: &str = "/usr/share/dict/words";

#[derive(Parser)]
#[command(
    name = "xkpass",
    version,
    about = "Generate a password in the style of https://xkcd.com/936/",
    after_help = "The word list file should contain one word on each line, \
                  consisting only of lowercase ASCII letters. \
                  Lines containing other characters are discarded."
)]
struct Cli {
    /// File to read words from
    #[arg(short, long, value_name = "FILE")]
    word_list: Option<PathBuf>,

    /// Minimum word length
    #[arg(short = 'm', long, default_value_t = 4, value_name = "LEN")]
    min_word_length: usize,

    /// Maximum word length (ignored if less than the minimum)
    #[arg(short = 'M', long, default_value_t = 10, value_name = "LEN")]
    max_word_length: usize,

    /// Number of words in the password
    #[arg(short = 'c', long, default_value_t = 4, value_name = "N")]
    word_count: usize,

    /// Include capitals, a symbol, and a digit to satisfy arbitrary requirements
    #[arg(short, long)]
    requirements: bool,

    /// Generate multiple passwords to choose from
    #[arg(short = 'n', long, default_value_t = 1, value_name = "N")]
    password_count: usize,

    /// Increase output verbosity
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let word_list = match &cli.word_list {
        Some(path) => WordList::load(path, cli.min_word_length, cli.max_word_length)?,
        None => {
            let default = Path::new(DEFAULT_WORD_LIST);
            match WordList::load(default, cli.min_word_length, cli.max_word_length) {
                Ok(list) => list,
                Err(_) => anyhow::bail!(
                    "could not open default word list ({}); specify a word list file with --word-list",
                    DEFAULT_WORD_LIST
                ),
            }
        }
    };

    if word_list.is_empty() {
        anyhow::bail!("no words loaded; try specifying a wider range of allowable word lengths");
    }

    if cli.verbose {
        let color_support = ui::detect_color_support();
        let bits = if cli.requirements {
            entropy::password_bits(word_list.len(), cli.word_count)
        } else {
            entropy::passphrase_bits(word_list.len(), cli.word_count)
        };

        ui::report_word_count(word_list.len(), color_support);
        ui::report_entropy(bits, color_support);
    }

    for _ in 0..cli.password_count {
        let password = if cli.requirements {
            generator::generate_password(&word_list, cli.word_count)?
        } else {
            generator::generate_passphrase(&word_list, cli.word_count)?
        };
        println!("{}", &*password);
    }

    Ok(())
}
