// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// 31-bit string hash used to seed generated content.
///
/// Folds `h * 31 + unit` over the UTF-16 code units of `seed` with 32-bit
/// signed wrap-around, then takes the magnitude. Stable across platforms, so
/// a page id always maps to the same text and picture.
pub(crate) fn seed_hash(seed: &str) -> u32 {
    let h = seed.encode_utf16().fold(0_i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    h.unsigned_abs()
}
