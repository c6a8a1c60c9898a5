// coin-core/src/lib.rs

//! Coin Core - Registry, Path Validation and Amount Display
//!
//! The pieces of the signing pipeline that sit between the request handler
//! and the key-derivation/signing code:
//!
//! - **Coin Registry**: compiled-in table of supported chains with
//!   first-match lookups via [`coin_by_shortcut`], [`coin_by_name`] and
//!   [`coin_by_address_type`].
//! - **Path Validation**: [`is_valid_account_path`] confirms a requested
//!   BIP-44 derivation path targets the declared coin's external chain
//!   before any key material is touched.
//! - **Display**: [`format_amount`] and [`describe_account_path`] render
//!   base-unit amounts and account labels for confirmation screens, with
//!   capacity-checked variants writing through [`DisplayBuffer`].
//!
//! Everything here is synchronous, allocation-light and free of I/O; key
//! derivation, signing and the transport protocol live elsewhere.

pub mod amount;
pub mod display;
pub mod error;
pub mod path;
pub mod registry;

// Re-exports for cleaner API access
pub use amount::{format_amount, format_amount_into, COIN_FRACTION};
pub use display::DisplayBuffer;
pub use error::{DisplayError, DisplayResult};
pub use path::{
    describe_account_path, describe_account_path_into, is_valid_account_path, BIP44_PATH_LEN,
    BIP44_PURPOSE, HARDENED,
};
pub use registry::{coin_by_address_type, coin_by_name, coin_by_shortcut, coins, Coin, CoinFamily};
