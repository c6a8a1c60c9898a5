// coin-core/src/amount.rs

//! Fixed-Point Amount Formatting
//!
//! Raw coin amounts are unsigned integers in base units (e.g. satoshis).
//! [`format_amount`] renders them as `"<whole>.<frac>[ <ticker>]"` for the
//! confirmation screen, trimming trailing fractional zeros so the shortest
//! string that still round-trips to the same base-unit value is shown.

use crate::display::DisplayBuffer;
use crate::error::DisplayResult;
use crate::registry::Coin;

/// Canonical base-unit divisor of the registry's native denominations:
/// 10^8 base units per display unit (satoshis per bitcoin).
pub const COIN_FRACTION: u64 = 100_000_000;

/// Render `amount` base units as a decimal string in display units.
///
/// `divisor` must be a nonzero power of ten; it defines the number of
/// fractional digits (`COIN_FRACTION` gives 8). Leading fractional zeros are
/// preserved (`0.00000005`), trailing ones are stripped, and a zero fraction
/// renders as the single digit `0`. The coin's ticker, when present, is
/// appended after a space.
pub fn format_amount(coin: &Coin, amount: u64, divisor: u64) -> String {
    debug_assert!(divisor > 0, "divisor must be a nonzero power of ten");
    let whole = amount / divisor;
    let frac = amount % divisor;

    let mut out = whole.to_string();
    out.push('.');
    if frac == 0 {
        out.push('0');
    } else {
        let rendered = format!("{:0>width$}", frac, width = fraction_digits(divisor));
        out.push_str(rendered.trim_end_matches('0'));
    }
    if let Some(ticker) = &coin.shortcut {
        out.push(' ');
        out.push_str(ticker);
    }
    out
}

/// [`format_amount`] into a capacity-checked buffer.
pub fn format_amount_into(
    coin: &Coin,
    amount: u64,
    divisor: u64,
    buf: &mut DisplayBuffer,
) -> DisplayResult<()> {
    buf.push_str(&format_amount(coin, amount, divisor))
}

/// Number of decimal digits the fractional part occupies, i.e. log10 of the
/// divisor.
fn fraction_digits(divisor: u64) -> usize {
    let mut digits = 0;
    let mut d = divisor;
    while d >= 10 {
        d /= 10;
        digits += 1;
    }
    digits
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{coin_by_name, CoinFamily};

    fn btc() -> &'static Coin {
        coin_by_name("Bitcoin").unwrap()
    }

    #[test]
    fn whole_and_fraction() {
        assert_eq!(format_amount(btc(), 150_000_000, COIN_FRACTION), "1.5 BTC");
        assert_eq!(
            format_amount(btc(), 123_456_789, COIN_FRACTION),
            "1.23456789 BTC"
        );
    }

    #[test]
    fn zero_amount_renders_single_fraction_digit() {
        assert_eq!(format_amount(btc(), 0, COIN_FRACTION), "0.0 BTC");
        assert_eq!(format_amount(btc(), 200_000_000, COIN_FRACTION), "2.0 BTC");
    }

    #[test]
    fn leading_fraction_zeros_are_preserved() {
        assert_eq!(format_amount(btc(), 5, COIN_FRACTION), "0.00000005 BTC");
        assert_eq!(format_amount(btc(), 1_050, COIN_FRACTION), "0.0000105 BTC");
    }

    #[test]
    fn divisor_one_keeps_base_units_whole() {
        assert_eq!(format_amount(btc(), 42, 1), "42.0 BTC");
        assert_eq!(
            format_amount(btc(), u64::MAX, 1),
            "18446744073709551615.0 BTC"
        );
    }

    #[test]
    fn other_tickers_are_appended() {
        let doge = coin_by_name("Dogecoin").unwrap();
        assert_eq!(
            format_amount(doge, 12_300_000_000, COIN_FRACTION),
            "123.0 DOGE"
        );
    }

    #[test]
    fn missing_ticker_omits_the_suffix() {
        let coin = Coin {
            name: "Unnamed".to_string(),
            shortcut: None,
            address_type: None,
            address_type_p2sh: None,
            address_type_p2wpkh: None,
            address_type_p2wsh: None,
            max_fee_per_kb: None,
            signed_message_header: None,
            bip44_account_path: 0x8000_00ff,
            family: CoinFamily::Utxo,
        };
        assert_eq!(format_amount(&coin, 150_000_000, COIN_FRACTION), "1.5");
    }

    #[test]
    fn rendered_string_reconstructs_the_amount() {
        for amount in [0, 1, 5, 99, 100_000_000, 150_000_000, 123_456_789, u64::MAX] {
            let text = format_amount(btc(), amount, COIN_FRACTION);
            let decimal = text.strip_suffix(" BTC").unwrap();
            let (whole, frac) = decimal.split_once('.').unwrap();
            // Re-scale the written fraction to the understood 8-digit width.
            let scale = 10u64.pow(8 - frac.len() as u32);
            let back = whole.parse::<u64>().unwrap() * COIN_FRACTION
                + frac.parse::<u64>().unwrap() * scale;
            assert_eq!(back, amount, "round-trip failed for {text}");
        }
    }

    #[test]
    fn bounded_write_goes_through_the_display_buffer() {
        let mut buf = DisplayBuffer::with_capacity(16);
        format_amount_into(btc(), 150_000_000, COIN_FRACTION, &mut buf).unwrap();
        assert_eq!(buf.as_str(), "1.5 BTC");

        let mut small = DisplayBuffer::with_capacity(6);
        assert!(format_amount_into(btc(), 150_000_000, COIN_FRACTION, &mut small).is_err());
        assert!(small.is_empty());
    }
}
