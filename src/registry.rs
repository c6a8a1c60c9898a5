// coin-core/src/registry.rs

//! Coin Registry - Compiled-In Table of Supported Chains
//!
//! One [`Coin`] record per supported chain/network variant, fixed at build
//! time and never mutated afterwards. Lookups are linear first-match scans
//! in declaration order; that order is part of the contract because two rows
//! may share a ticker (see `Dash` / `tDash`).

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

// =============================================================================
// COIN DESCRIPTOR
// =============================================================================

/// Address-space shape of a chain, decided once at table construction.
///
/// Replaces the firmware's name-string comparison for detecting chains
/// without address-index fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinFamily {
    /// UTXO chains (Bitcoin, Litecoin, ...) - many addresses per account.
    Utxo,
    /// Account-model chains (Ethereum, Ethereum Classic) - one address per
    /// account, so the BIP-44 address index must stay 0.
    Account,
}

/// One supported chain/network variant.
///
/// Entries live for the process lifetime; every accessor hands out
/// `&'static Coin`. The optional fields mirror the firmware image's
/// presence-flagged columns and are opaque to this crate - downstream
/// signing/encoding code branches on their presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    /// Display name, lookup key and label text (e.g., "Bitcoin").
    pub name: String,
    /// Ticker, lookup key and display suffix (e.g., "BTC").
    /// NOT unique across rows: `Dash` and `tDash` both carry "DASH".
    pub shortcut: Option<String>,
    /// Address version byte; absent for account-model chains.
    pub address_type: Option<u8>,
    /// P2SH address version byte.
    pub address_type_p2sh: Option<u8>,
    /// P2WPKH address version byte.
    pub address_type_p2wpkh: Option<u8>,
    /// P2WSH address version byte.
    pub address_type_p2wsh: Option<u8>,
    /// Fee ceiling in base units per kilobyte.
    pub max_fee_per_kb: Option<u64>,
    /// Signed-message header, varint length prefix included.
    pub signed_message_header: Option<String>,
    /// Hardened BIP-44 coin_type segment (e.g., 0x8000_0000 for Bitcoin).
    pub bip44_account_path: u32,
    /// Address-space family tag.
    pub family: CoinFamily,
}

impl Coin {
    #[allow(clippy::too_many_arguments)]
    fn new(
        name: &str,
        shortcut: Option<&str>,
        address_type: Option<u8>,
        address_type_p2sh: Option<u8>,
        address_type_p2wpkh: Option<u8>,
        address_type_p2wsh: Option<u8>,
        max_fee_per_kb: Option<u64>,
        signed_message_header: Option<&str>,
        bip44_account_path: u32,
        family: CoinFamily,
    ) -> Coin {
        Coin {
            name: name.to_string(),
            shortcut: shortcut.map(str::to_string),
            address_type,
            address_type_p2sh,
            address_type_p2wpkh,
            address_type_p2wsh,
            max_fee_per_kb,
            signed_message_header: signed_message_header.map(str::to_string),
            bip44_account_path,
            family,
        }
    }
}

// =============================================================================
// COIN TABLE
// =============================================================================

lazy_static! {
    /// The compiled-in coin table. Declaration order is load-bearing:
    /// shortcut collisions resolve to the earlier row.
    static ref COINS: Vec<Coin> = vec![
        Coin::new(
            "Bitcoin",
            Some("BTC"),
            Some(0),
            Some(5),
            Some(6),
            Some(10),
            Some(100_000),
            Some("\u{18}Bitcoin Signed Message:\n"),
            0x8000_0000,
            CoinFamily::Utxo,
        ),
        Coin::new(
            "Testnet",
            Some("TEST"),
            Some(111),
            Some(196),
            Some(3),
            Some(40),
            Some(10_000_000),
            Some("\u{18}Bitcoin Signed Message:\n"),
            0x8000_0001,
            CoinFamily::Utxo,
        ),
        Coin::new(
            "Namecoin",
            Some("NMC"),
            Some(52),
            Some(5),
            None,
            None,
            Some(10_000_000),
            Some("\u{19}Namecoin Signed Message:\n"),
            0x8000_0007,
            CoinFamily::Utxo,
        ),
        Coin::new(
            "Litecoin",
            Some("LTC"),
            Some(48),
            Some(5),
            None,
            None,
            Some(1_000_000),
            Some("\u{19}Litecoin Signed Message:\n"),
            0x8000_0002,
            CoinFamily::Utxo,
        ),
        Coin::new(
            "Dogecoin",
            Some("DOGE"),
            Some(30),
            Some(22),
            None,
            None,
            Some(1_000_000_000),
            Some("\u{19}Dogecoin Signed Message:\n"),
            0x8000_0003,
            CoinFamily::Utxo,
        ),
        Coin::new(
            "Dash",
            Some("DASH"),
            Some(76),
            Some(16),
            None,
            None,
            Some(100_000),
            Some("\u{19}DarkCoin Signed Message:\n"),
            0x8000_0005,
            CoinFamily::Utxo,
        ),
        Coin::new(
            "tDash",
            Some("DASH"),
            Some(140),
            Some(19),
            None,
            None,
            Some(100_000),
            Some("\u{19}DarkCoin Signed Message:\n"),
            0x8000_00a5,
            CoinFamily::Utxo,
        ),
        Coin::new(
            "Ethereum",
            Some("ETH"),
            None,
            None,
            None,
            None,
            Some(100_000),
            Some("\u{19}Ethereum Signed Message:\n"),
            0x8000_003c,
            CoinFamily::Account,
        ),
        Coin::new(
            "Ethereum Classic",
            Some("ETC"),
            None,
            None,
            None,
            None,
            Some(100_000),
            Some("\u{19}Ethereum Signed Message:\n"),
            0x8000_003d,
            CoinFamily::Account,
        ),
    ];
}

// =============================================================================
// LOOKUPS
// =============================================================================

/// All supported coins in declaration order.
pub fn coins() -> &'static [Coin] {
    &COINS
}

/// First coin whose ticker equals `shortcut`.
///
/// Tickers are not unique ("DASH" appears twice); callers that need to
/// disambiguate such rows must look up by name or address type instead.
pub fn coin_by_shortcut(shortcut: &str) -> Option<&'static Coin> {
    COINS
        .iter()
        .find(|coin| coin.shortcut.as_deref() == Some(shortcut))
}

/// First coin whose display name equals `name`.
pub fn coin_by_name(name: &str) -> Option<&'static Coin> {
    COINS.iter().find(|coin| coin.name == name)
}

/// First coin whose address version byte equals `address_type`.
///
/// Rows without an address type (account-model chains) never match.
pub fn coin_by_address_type(address_type: u8) -> Option<&'static Coin> {
    COINS
        .iter()
        .find(|coin| coin.address_type == Some(address_type))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_resolves_by_name() {
        for coin in coins() {
            let found = coin_by_name(&coin.name).unwrap();
            assert_eq!(found.name, coin.name);
            assert_eq!(found.bip44_account_path, coin.bip44_account_path);
        }
    }

    #[test]
    fn shortcut_lookup_returns_matching_ticker() {
        for coin in coins() {
            let ticker = coin.shortcut.as_deref().unwrap();
            let found = coin_by_shortcut(ticker).unwrap();
            assert_eq!(found.shortcut.as_deref(), Some(ticker));
        }
    }

    #[test]
    fn address_type_lookup_returns_matching_byte() {
        for coin in coins().iter().filter(|c| c.address_type.is_some()) {
            let byte = coin.address_type.unwrap();
            let found = coin_by_address_type(byte).unwrap();
            assert_eq!(found.address_type, Some(byte));
        }
    }

    #[test]
    fn duplicate_ticker_resolves_to_first_row() {
        // Dash (mainnet) is declared before tDash; both carry "DASH".
        let coin = coin_by_shortcut("DASH").unwrap();
        assert_eq!(coin.name, "Dash");
        assert_eq!(coin.address_type, Some(76));
        assert_eq!(coin.bip44_account_path, 0x8000_0005);

        // The testnet row stays reachable through its unique keys.
        let tdash = coin_by_name("tDash").unwrap();
        assert_eq!(tdash.address_type, Some(140));
        assert_eq!(tdash.bip44_account_path, 0x8000_00a5);
        assert_eq!(coin_by_address_type(140).unwrap().name, "tDash");
    }

    #[test]
    fn unknown_keys_are_not_found() {
        assert!(coin_by_shortcut("XYZ").is_none());
        assert!(coin_by_name("Bitcoinn").is_none());
        assert!(coin_by_address_type(250).is_none());
    }

    #[test]
    fn account_model_chains_have_no_address_type() {
        for name in ["Ethereum", "Ethereum Classic"] {
            let coin = coin_by_name(name).unwrap();
            assert_eq!(coin.family, CoinFamily::Account);
            assert_eq!(coin.address_type, None);
        }
        assert_eq!(coin_by_name("Bitcoin").unwrap().family, CoinFamily::Utxo);
    }

    #[test]
    fn table_round_trips_through_serde() {
        let json = serde_json::to_string(coins()).unwrap();
        let back: Vec<Coin> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_slice(), coins());
    }
}
