// crates/netmgr-core/src/naming.rs
// ============================================================================
// Module: Name Normalization
// Description: Case conversion helpers for command and parameter names.
// Purpose: Derive CLI spellings and case-insensitive lookup keys from model names.
// Dependencies: convert_case
// ============================================================================

//! ## Overview
//! Model names are `PascalCase` (`CreateGlobalNetwork`, `AWSLocationZone`).
//! The CLI spells them in kebab case (`create-global-network`,
//! `aws-location-zone`) and lookups compare a normalized key that ignores
//! case and separators.

// ============================================================================
// SECTION: Imports
// ============================================================================

use convert_case::Boundary;
use convert_case::Case;
use convert_case::Converter;

// ============================================================================
// SECTION: Conversion
// ============================================================================

/// Word boundaries used when splitting model names.
///
/// Digits stay attached to the word before them, so `Ipv6Support` splits as
/// `Ipv6` and `Support`.
const NAME_BOUNDARIES: [Boundary; 6] = [
    Boundary::Underscore,
    Boundary::Hyphen,
    Boundary::Space,
    Boundary::LowerUpper,
    Boundary::DigitUpper,
    Boundary::Acronym,
];

/// Converts a `PascalCase` model name into kebab case.
///
/// Runs of uppercase letters are treated as one acronym word, so
/// `AWSLocation` becomes `aws-location`.
#[must_use]
pub fn kebab_case(name: &str) -> String {
    Converter::new().set_boundaries(&NAME_BOUNDARIES).to_case(Case::Kebab).convert(name)
}

/// Returns a lookup key that ignores case and word separators.
#[must_use]
pub fn normalize_key(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).map(|ch| ch.to_ascii_lowercase()).collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
