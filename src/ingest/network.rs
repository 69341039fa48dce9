//! Address-pattern network inference.
//!
//! Rules are evaluated top to bottom and the first match wins. Some rules are
//! shadowed by broader ones above them (`btc_p2sh_long` can never fire after
//! `btc`); they stay in the table so its behavior is unchanged.

pub const EVM: &str = "EVM";
pub const BTC: &str = "BTC";
pub const TRON: &str = "TRON";
pub const LITECOIN: &str = "LITECOIN";
pub const CARDANO: &str = "CARDANO";
pub const ALGORAND: &str = "ALGORAND";
pub const SOLANA: &str = "SOL";

pub struct NetworkRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub network: &'static str,
}

fn char_len(addr: &str) -> usize {
    addr.chars().count()
}

fn is_evm(a: &str) -> bool {
    a.starts_with("0x")
}

fn is_btc(a: &str) -> bool {
    a.starts_with("bc1") || a.starts_with('1') || a.starts_with('3')
}

fn is_btc_p2sh_long(a: &str) -> bool {
    a.starts_with('3') && char_len(a) > 30
}

fn is_btc_testnet(a: &str) -> bool {
    a.starts_with("tb1")
}

fn is_tron_base58(a: &str) -> bool {
    a.starts_with('T') && matches!(char_len(a), 33 | 34)
}

fn is_tron_literal(a: &str) -> bool {
    a.to_uppercase().starts_with("TRON")
}

fn is_tron_hex(a: &str) -> bool {
    a.starts_with('4') && char_len(a) == 34
}

fn is_litecoin(a: &str) -> bool {
    a.starts_with('L') && char_len(a) >= 26
}

fn is_cardano(a: &str) -> bool {
    a.to_lowercase().starts_with("addr1")
}

fn is_algorand(a: &str) -> bool {
    a.to_uppercase().starts_with("IA") && char_len(a) > 40
}

fn is_solana(a: &str) -> bool {
    a.to_uppercase().starts_with('C') && char_len(a) > 40
}

pub const NETWORK_RULES: &[NetworkRule] = &[
    NetworkRule { name: "evm", matches: is_evm, network: EVM },
    NetworkRule { name: "btc", matches: is_btc, network: BTC },
    NetworkRule { name: "btc_p2sh_long", matches: is_btc_p2sh_long, network: BTC },
    NetworkRule { name: "btc_testnet", matches: is_btc_testnet, network: BTC },
    NetworkRule { name: "tron_base58", matches: is_tron_base58, network: TRON },
    NetworkRule { name: "tron_literal", matches: is_tron_literal, network: TRON },
    NetworkRule { name: "tron_hex", matches: is_tron_hex, network: TRON },
    NetworkRule { name: "litecoin", matches: is_litecoin, network: LITECOIN },
    NetworkRule { name: "cardano", matches: is_cardano, network: CARDANO },
    NetworkRule { name: "algorand", matches: is_algorand, network: ALGORAND },
    NetworkRule { name: "solana", matches: is_solana, network: SOLANA },
];

/// First rule matching `address`, if any.
pub fn matching_rule(address: &str) -> Option<&'static NetworkRule> {
    let addr = address.trim();
    if addr.is_empty() {
        return None;
    }
    NETWORK_RULES.iter().find(|rule| (rule.matches)(addr))
}

/// Infer a network tag from the shape of an address.
pub fn guess_network(address: &str) -> Option<&'static str> {
    matching_rule(address).map(|rule| rule.network)
}
