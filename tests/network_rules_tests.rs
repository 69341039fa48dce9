//! Network inference table, rule by rule.

use test_case::test_case;
use wallet_risk_intel::ingest::network::guess_network;

#[test_case("0x47ce0c6ac56edb84e2ad330bec0b500ad6e71bee", "EVM" ; "evm hex")]
#[test_case("bc1qdc9gnr2tqfm78lqhxunapaw605qhkpsq36ysr6", "BTC" ; "btc bech32")]
#[test_case("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", "BTC" ; "btc legacy")]
#[test_case("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy", "BTC" ; "btc p2sh")]
#[test_case("tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx", "BTC" ; "btc testnet")]
#[test_case("TQn9Y2khEsLJW1ChVWFMSMeRDow5KcbLSE", "TRON" ; "tron base58")]
#[test_case("tron-wallet-label", "TRON" ; "tron literal")]
#[test_case("LVg2kJoFNg45Nbpy53h7Fe1wKyeXVRhMH9", "LITECOIN" ; "litecoin")]
fn test_guess_network(address: &str, expected: &str) {
    assert_eq!(guess_network(address), Some(expected));
}

#[test_case("" ; "empty")]
#[test_case("   " ; "whitespace")]
#[test_case("mystery-wallet-001" ; "free text")]
#[test_case("Tshort" ; "short t prefix")]
fn test_guess_network_none(address: &str) {
    assert_eq!(guess_network(address), None);
}
