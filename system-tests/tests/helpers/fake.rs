// system-tests/tests/helpers/fake.rs
// ============================================================================
// Module: Fake Data
// Description: Plausible random request values for contract suites.
// Purpose: Satisfy field-level constraints the API enforces, nothing more.
// Dependencies: rand
// ============================================================================

//! Minimal fake-data collaborator for the contract suites. Values only need
//! to satisfy the field constraints the API enforces (for example a numeric
//! string of exactly 14 digits); realism beyond that is out of scope.

#![allow(dead_code, reason = "Helpers are shared across multiple test binaries.")]

use rand::Rng;
use rand::seq::SliceRandom;

/// Word pools for generated names.
const COMPANY_WORDS: [&str; 8] =
    ["Northway", "Harbor", "Cedar", "Summit", "Bluefin", "Oakline", "Riverton", "Stonegate"];
const COMPANY_SUFFIXES: [&str; 4] = ["Market", "Grocers", "Trading Co", "Foods"];
const STREET_NAMES: [&str; 6] = ["Elm", "Maple", "Birch", "Willow", "Aspen", "Juniper"];
const STREET_SUFFIXES: [&str; 4] = ["St", "Ave", "Rd", "Ln"];
const FRUITS: [&str; 6] = ["apple", "pear", "plum", "mango", "grape", "papaya"];
const VEGETABLES: [&str; 6] = ["carrot", "leek", "kale", "turnip", "pumpkin", "spinach"];

/// Picks a random entry from a pool.
fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or(pool[0])
}

/// Returns a plausible company name.
pub fn company_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, &COMPANY_WORDS), pick(rng, &COMPANY_SUFFIXES))
}

/// Returns a numeric string of exactly `len` digits.
pub fn numeric_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(b'0' + rng.gen_range(0u8..10))).collect()
}

/// Returns a plausible street address.
pub fn street_address<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        rng.gen_range(1..=999),
        pick(rng, &STREET_NAMES),
        pick(rng, &STREET_SUFFIXES)
    )
}

/// Returns a fruit name.
pub fn fruit<R: Rng>(rng: &mut R) -> String {
    pick(rng, &FRUITS).to_string()
}

/// Returns a vegetable name.
pub fn vegetable<R: Rng>(rng: &mut R) -> String {
    pick(rng, &VEGETABLES).to_string()
}
