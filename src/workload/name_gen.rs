//! Name-based workload generator.
//!
//! The default workload is deterministic and toy by design: a full name
//! (three Cyrillic words — surname, given name, patronymic) is folded into a
//! sequence of small positive page numbers. Three names (the "previous",
//! "current" and "next" identities) give the three default processes their
//! streams.

use crate::common::config::DEFAULT_PROCESS_IDS;
use crate::common::{Error, Result};
use crate::workload::Workload;

/// The generator's alphabet. Letters outside it are an input error.
const ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// Fold one full name into a page-number sequence.
///
/// The name is lowercased and must split into exactly three words. With `n`
/// the length of the middle word, every letter of all three words maps to
/// `(alphabet_position + 1) mod n`, and zero results are dropped — so the
/// output is a finite sequence of page numbers in `1..n`.
///
/// # Errors
/// [`Error::MalformedName`] if the name is not three words,
/// [`Error::UnknownLetter`] for a letter outside the alphabet.
pub fn pages_from_full_name(full_name: &str) -> Result<Vec<u32>> {
    let lowered = full_name.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let [_, given_name, _] = words.as_slice() else {
        return Err(Error::MalformedName(full_name.to_string()));
    };

    let modulus = given_name.chars().count() as u32;

    let mut pages = Vec::new();
    for letter in words.concat().chars() {
        let position = ALPHABET
            .chars()
            .position(|a| a == letter)
            .ok_or(Error::UnknownLetter(letter))?;

        let page = (position as u32 + 1) % modulus;
        if page > 0 {
            pages.push(page);
        }
    }

    Ok(pages)
}

/// Build the default three-process workload from three full names.
///
/// The names go to processes `A`, `B`, `C` in that order.
pub fn workload_from_names(prev: &str, current: &str, next: &str) -> Result<Workload> {
    let names = [prev, current, next];

    let mut processes = Vec::with_capacity(names.len());
    for (pid, name) in DEFAULT_PROCESS_IDS.iter().zip(names) {
        processes.push((*pid, pages_from_full_name(name)?));
    }

    Workload::new(processes)
}
