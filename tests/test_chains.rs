use chain_balance::chains::{self, ChainKey};

#[test]
fn parses_exact_keys_only() {
    assert_eq!(ChainKey::parse("ethereum"), Some(ChainKey::Ethereum));
    assert_eq!(ChainKey::parse("mode"), Some(ChainKey::Mode));
    for bad in ["", "Ethereum", "ETHEREUM", "mode ", "modes", "eth", "polygon"] {
        assert_eq!(ChainKey::parse(bad), None, "{bad:?} should not parse");
    }
}

#[test]
fn is_supported_matches_parse() {
    assert!(chains::is_supported("ethereum"));
    assert!(chains::is_supported("mode"));
    assert!(!chains::is_supported("Mode"));
    assert!(!chains::is_supported("arbitrum"));
}

#[test]
fn ethereum_config() {
    let config = chains::config_for(ChainKey::Ethereum);
    assert_eq!(config.key, ChainKey::Ethereum);
    assert_eq!(config.name, "Ethereum Mainnet");
    assert_eq!(config.symbol, "ETH");
    assert_eq!(config.explorer, "https://etherscan.io");
    assert_eq!(config.chain_id, 1);
    assert!(config.rpc_url.starts_with("http"));
}

#[test]
fn mode_config() {
    let config = chains::config_for(ChainKey::Mode);
    assert_eq!(config.name, "Mode Mainnet");
    assert_eq!(config.symbol, "ETH");
    assert_eq!(config.explorer, "https://explorer.mode.network");
    assert_eq!(config.chain_id, 34443);
}

#[test]
fn all_lists_every_chain_once() {
    let keys: Vec<ChainKey> = chains::all().map(|c| c.key).collect();
    assert_eq!(keys, vec![ChainKey::Ethereum, ChainKey::Mode]);
}

#[test]
fn explorer_deep_link() {
    let config = chains::config_for(ChainKey::Ethereum);
    assert_eq!(
        config.explorer_address_url("0x4838b106fce9647bdf1e7877bf73ce8b0bad5f97"),
        "https://etherscan.io/address/0x4838b106fce9647bdf1e7877bf73ce8b0bad5f97"
    );
}

#[test]
fn chain_key_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&ChainKey::Ethereum).unwrap(),
        "\"ethereum\""
    );
    let key: ChainKey = serde_json::from_str("\"mode\"").unwrap();
    assert_eq!(key, ChainKey::Mode);
}
