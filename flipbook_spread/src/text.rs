// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic filler text.

use crate::seed::seed_hash;

/// Paragraph count shown on non-cover pages.
pub const DEFAULT_PARAGRAPHS: usize = 3;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris",
    "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum", "pellentesque", "habitant",
    "morbi", "tristique", "senectus", "netus", "malesuada", "fames", "ac", "turpis", "egestas",
    "vestibulum", "lectus", "mauris", "ultrices", "eros", "cursus", "viverra", "tellus",
    "elementum", "sagittis", "vitae", "leo", "vel", "orci", "porta", "at", "auctor", "augue",
    "mauris", "diam", "phasellus", "faucibus", "scelerisque", "eleifend", "donec", "pretium",
    "vulputate", "sapien", "nec", "ullamcorper", "suspendisse", "potenti", "nullam", "libero",
    "nunc", "congue", "nisi", "vitae", "suscipit", "tellus", "mauris", "a", "diam",
];

/// Generates `count` paragraphs of placeholder prose from `seed`.
///
/// The same seed always yields the same paragraphs. Every paragraph has the
/// same word count, between 40 and 69, chosen by the seed; the walk through
/// the word list continues from one paragraph to the next. Each paragraph
/// starts with a capital letter and ends with a period.
///
/// ```rust
/// use flipbook_spread::placeholder_paragraphs;
///
/// let a = placeholder_paragraphs("p1", 3);
/// assert_eq!(a, placeholder_paragraphs("p1", 3));
/// assert!(a[0].starts_with("Esse cillum"));
/// ```
#[must_use]
pub fn placeholder_paragraphs(seed: &str, count: usize) -> Vec<String> {
    let h = seed_hash(seed) as usize;
    let words_per_paragraph = 40 + h % 30;
    let stride = 1 + h % 7;
    let mut index = h % WORDS.len();

    (0..count)
        .map(|_| {
            let mut paragraph = String::new();
            for w in 0..words_per_paragraph {
                let word = WORDS[index];
                if w == 0 {
                    let mut chars = word.chars();
                    if let Some(first) = chars.next() {
                        paragraph.extend(first.to_uppercase());
                        paragraph.push_str(chars.as_str());
                    }
                } else {
                    paragraph.push(' ');
                    paragraph.push_str(word);
                }
                index = (index + stride) % WORDS.len();
            }
            paragraph.push('.');
            paragraph
        })
        .collect()
}
