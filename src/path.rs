// coin-core/src/path.rs

//! BIP-44 Account-Path Validation and Labeling
//!
//! The validator is the last structural check before a derived private key
//! is used for signing: it pins a requested path to the canonical external
//! chain of a BIP-44 account belonging to the *declared* coin.
//!
//! Expected shape: `m/44'/coin_type'/account/0/address_index`, i.e. exactly
//! five `u32` segments with hardened values carrying the high bit.

use crate::display::DisplayBuffer;
use crate::error::DisplayResult;
use crate::registry::{Coin, CoinFamily};

// =============================================================================
// BIP-44 CONSTANTS
// =============================================================================

/// Hardened-derivation flag (most-significant bit of a path segment).
pub const HARDENED: u32 = 0x8000_0000;

/// Hardened BIP-44 purpose segment (44').
pub const BIP44_PURPOSE: u32 = 44 | HARDENED;

/// Segment count of a full BIP-44 path.
pub const BIP44_PATH_LEN: usize = 5;

/// Mask that removes the hardened flag from a segment.
const UNHARDENED_MASK: u32 = 0x7FFF_FFFF;

// =============================================================================
// VALIDATION
// =============================================================================

/// Whether `path` is a well-formed BIP-44 account path for `coin`.
///
/// Rules, in order:
/// 1. Exactly [`BIP44_PATH_LEN`] segments.
/// 2. `change` (segment 3) is 0 - only the external chain is signable.
/// 3. On [`CoinFamily::Account`] coins, `address_index` (segment 4) is 0 -
///    those chains have no address fan-out beneath an account.
/// 4. `purpose` (segment 0) is [`BIP44_PURPOSE`].
/// 5. `coin_type` (segment 1) matches the coin's `bip44_account_path`.
///
/// The `account` segment (2) is unconstrained, hardened or not.
pub fn is_valid_account_path(coin: &Coin, path: &[u32]) -> bool {
    if path.len() != BIP44_PATH_LEN {
        return false;
    }
    if path[3] != 0 {
        return false;
    }
    if coin.family == CoinFamily::Account && path[4] != 0 {
        return false;
    }
    path[0] == BIP44_PURPOSE && path[1] == coin.bip44_account_path
}

// =============================================================================
// LABEL RENDERING
// =============================================================================

/// Confirmation-screen label for a validated path, e.g. `"Bitcoin account #0"`.
///
/// `None` exactly when [`is_valid_account_path`] is false. The account number
/// is shown with its hardened bit masked off.
pub fn describe_account_path(coin: &Coin, path: &[u32]) -> Option<String> {
    if !is_valid_account_path(coin, path) {
        return None;
    }
    Some(render_label(coin, path))
}

/// Write the confirmation label for `path` into `buf`.
///
/// Returns `Ok(false)` without touching the buffer when the path is invalid,
/// `Ok(true)` after writing the label, and an overflow error when the label
/// does not fit the buffer's capacity.
pub fn describe_account_path_into(
    coin: &Coin,
    path: &[u32],
    buf: &mut DisplayBuffer,
) -> DisplayResult<bool> {
    if !is_valid_account_path(coin, path) {
        return Ok(false);
    }
    buf.push_str(&render_label(coin, path))?;
    Ok(true)
}

fn render_label(coin: &Coin, path: &[u32]) -> String {
    format!("{} account #{}", coin.name, path[2] & UNHARDENED_MASK)
}

// =============================================================================
// TESTS
// =============================================================================
