// This file is part of xkpass.
//
// Copyright (c) 2026  The xkpass authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// A deduplicated set of candidate words, built once at startup and
/// immutable thereafter. Iteration order is unspecified.
#[derive(Debug)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Builds a word list from arbitrary strings, collapsing duplicates.
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        let unique: HashSet<String> = words.into_iter().collect();
        Self {
            words: unique.into_iter().collect(),
        }
    }

    /// Loads a word list from a file, one word per line.
    ///
    /// Lines are trimmed of surrounding whitespace and kept only if they
    /// consist solely of lowercase ASCII letters and their length falls in
    /// the resolved bounds (see [`resolve_bounds`]). All other lines are
    /// silently discarded. An empty result is not an error here.
    pub fn load(path: &Path, min_word_length: usize, max_word_length: usize) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("cannot read word list {}", path.display()))?;
        Self::from_reader(BufReader::new(file), min_word_length, max_word_length)
    }

    /// Filtering core behind [`WordList::load`], usable with any reader.
    pub fn from_reader<R: BufRead>(
        reader: R,
        min_word_length: usize,
        max_word_length: usize,
    ) -> Result<Self> {
        let (min, max) = resolve_bounds(min_word_length, max_word_length);

        let mut unique = HashSet::new();
        for line in reader.lines() {
            let line = line.context("failed to read word list line")?;
            let word = line.trim();
            if word_in_bounds(word.len(), min, max)
                && word.bytes().all(|b| b.is_ascii_lowercase())
            {
                unique.insert(word.to_string());
            }
        }

        Ok(Self {
            words: unique.into_iter().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Resolves the inclusive length bounds for word filtering.
///
/// The minimum is clamped to at least 1. A maximum below the clamped
/// minimum is ignored, leaving the range unbounded above. Both bounds
/// are inclusive.
pub fn resolve_bounds(min_word_length: usize, max_word_length: usize) -> (usize, Option<usize>) {
    let min = min_word_length.max(1);
    let max = if max_word_length >= min {
        Some(max_word_length)
    } else {
        None
    };
    (min, max)
}

fn word_in_bounds(len: usize, min: usize, max: Option<usize>) -> bool {
    len >= min && max.is_none_or(|m| len <= m)
}
