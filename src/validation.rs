use alloy::primitives::Address;
use thiserror::Error;

use crate::chains::ChainKey;

// ── Errors ───────────────────────────────────────────────────────────

/// One variant per validation rule. Messages are the user-facing
/// (French) copy shown by the form and the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("L'adresse est requise")]
    AddressRequired,

    #[error("Adresse Ethereum invalide. Doit commencer par 0x et faire 42 caractères.")]
    InvalidAddress { address: String },

    #[error("Adresse Ethereum invalide. Format attendu: 0x suivi de 40 caractères hexadécimaux.")]
    AddressFormat { address: String },

    #[error("Adresse Ethereum invalide selon la spécification EIP-55.")]
    AddressChecksum { address: String },

    #[error("La chaîne est requise")]
    ChainRequired,

    #[error("Chaîne non supportée: {chain}")]
    UnsupportedChain { chain: String },
}

// ── Validated request ────────────────────────────────────────────────

/// A balance request that passed validation. The address string is
/// kept exactly as the caller supplied it (trimmed for form input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceRequest {
    pub address: String,
    pub chain: ChainKey,
}

// ── Address validity ─────────────────────────────────────────────────

/// Whether a string is a valid Ethereum address.
///
/// `0x` + 40 hex characters, then EIP-55: an all-lowercase hex body
/// carries no checksum information and is accepted as-is; any body
/// containing an uppercase character must checksum exactly.
pub fn is_valid_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }
    if !hex.bytes().any(|b| b.is_ascii_uppercase()) {
        return true;
    }
    Address::parse_checksummed(address, None).is_ok()
}

// ── Entry points ─────────────────────────────────────────────────────

/// Server-side validation. Check order: address empty, address
/// checksum, chain empty, chain supported; the first failure wins.
pub fn validate_request(address: &str, chain: &str) -> Result<BalanceRequest, ValidationError> {
    if address.is_empty() {
        return Err(ValidationError::AddressRequired);
    }
    if !is_valid_address(address) {
        return Err(ValidationError::InvalidAddress {
            address: address.to_string(),
        });
    }
    validate_chain(chain).map(|chain| BalanceRequest {
        address: address.to_string(),
        chain,
    })
}

/// Client-side form validation. Trims the address, then runs shape
/// pre-checks (`0x` prefix, exact length, hex charset) with a format
/// message before the same EIP-55 check, which has its own message.
pub fn validate_form_input(address: &str, chain: &str) -> Result<BalanceRequest, ValidationError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(ValidationError::AddressRequired);
    }
    let well_formed = address.strip_prefix("0x").is_some_and(|hex| {
        hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit())
    });
    if !well_formed {
        return Err(ValidationError::AddressFormat {
            address: address.to_string(),
        });
    }
    if !is_valid_address(address) {
        return Err(ValidationError::AddressChecksum {
            address: address.to_string(),
        });
    }
    validate_chain(chain).map(|chain| BalanceRequest {
        address: address.to_string(),
        chain,
    })
}

fn validate_chain(chain: &str) -> Result<ChainKey, ValidationError> {
    if chain.is_empty() {
        return Err(ValidationError::ChainRequired);
    }
    ChainKey::parse(chain).ok_or_else(|| ValidationError::UnsupportedChain {
        chain: chain.to_string(),
    })
}
