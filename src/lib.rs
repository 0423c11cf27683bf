pub mod entropy;
pub mod generator;
pub mod ui;
pub mod wordlist;

pub use entropy::{passphrase_bits, password_bits};
pub use generator::{generate_passphrase, generate_password};
pub use wordlist::WordList;
