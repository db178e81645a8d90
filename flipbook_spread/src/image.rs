// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::seed::seed_hash;

const BASE: &str = "https://images.unsplash.com";

const PHOTO_IDS: [&str; 16] = [
    "1507003211169-0a1dd7228f2d",
    "1513542789411-b6d5d45989b5",
    "1497366216548-37526070297c",
    "1542744094-24638eff58bb",
    "1522071820081-009f0129c71c",
    "1524758631624-e2822e304c36",
    "1497215842964-222b430dc094",
    "1557804506-669a67965ba3",
    "1557683316-973673baf926",
    "1624555130581-1d9cca783bc0",
    "1587691592099-24045742c181",
    "1560472354-e33a6d0cbf82",
    "1544197150-e2ad7602706c",
    "1578662996442-1f60151d4985",
    "1600880292203-757bb62b4baf",
    "1605640840606-9442a6f2c5b2",
];

/// Background picture for a page, picked from a fixed pool by `seed`.
#[must_use]
pub fn image_url(seed: &str) -> String {
    let id = PHOTO_IDS[seed_hash(seed) as usize % PHOTO_IDS.len()];
    format!("{BASE}/photo-{id}?w=800&q=80")
}
