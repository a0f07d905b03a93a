//! The 1559 call object and its wire-format field validation.

use serde::{Deserialize, Serialize};

use crate::error::TransactionError;

/// One entry of an EIP-2930/2718 access list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessListEntry {
    /// The address this entry grants warm access to.
    pub address: String,
    /// Storage slots on `address` this entry grants warm access to.
    #[serde(rename = "storageKeys")]
    pub storage_keys: Vec<String>,
}

/// An unvalidated EIP-1559 call/transaction object, field names matching the
/// JSON-RPC wire format exactly. Every field is omitted from the JSON
/// envelope (not serialized as `null`) when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallObject {
    /// Transaction type, `"0x2"` for EIP-1559.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Sender's next nonce, as a hex quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    /// Target contract address. Absent for contract creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Sender address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Gas limit, as a hex quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<String>,
    /// Value to send, in wei, as a hex quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Calldata: the 4-byte selector followed by ABI-encoded arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// EIP-1559 priority fee, as a hex quantity.
    #[serde(rename = "maxPriorityFeePerGas", skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<String>,
    /// EIP-1559 max fee, as a hex quantity.
    #[serde(rename = "maxFeePerGas", skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<String>,
    /// EIP-2930 access list.
    #[serde(rename = "accessList", skip_serializing_if = "Option::is_none")]
    pub access_list: Option<Vec<AccessListEntry>>,
    /// Chain ID, as a hex quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
}

fn is_hex_body(s: &str, body_is_valid: impl Fn(&str) -> bool) -> bool {
    s.strip_prefix("0x").is_some_and(body_is_valid)
}

/// `^0x([0-9a-fA-F]){1,2}$`
fn is_type(s: &str) -> bool {
    is_hex_body(s, |body| {
        (1..=2).contains(&body.len()) && body.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

/// `^0x([1-9a-fA-F]+[0-9a-fA-F]*|0)$`
fn is_quantity(s: &str) -> bool {
    is_hex_body(s, |body| {
        if body == "0" {
            return true;
        }
        let mut bytes = body.bytes();
        match bytes.next() {
            Some(b) if b.is_ascii_hexdigit() && b != b'0' => bytes.all(|b| b.is_ascii_hexdigit()),
            _ => false,
        }
    })
}

/// `^0x[0-9a-fA-F]{40}$`
fn is_address(s: &str) -> bool {
    is_hex_body(s, |body| body.len() == 40 && body.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// `^0x([0-9a-fA-F]{2})*$`
fn is_data(s: &str) -> bool {
    is_hex_body(s, |body| body.len() % 2 == 0 && body.bytes().all(|b| b.is_ascii_hexdigit()))
}

impl CallObject {
    /// Validates every present field against its wire-format pattern.
    ///
    /// Short-circuits on the first invalid field, matching the builder's
    /// "first failing validator stops the pipeline" contract.
    pub fn validate(&self) -> Result<(), TransactionError> {
        let checks: &[(&str, &Option<String>, fn(&str) -> bool)] = &[
            ("type", &self.ty, is_type as fn(&str) -> bool),
            ("nonce", &self.nonce, is_quantity),
            ("to", &self.to, is_address),
            ("from", &self.from, is_address),
            ("gas", &self.gas, is_quantity),
            ("value", &self.value, is_quantity),
            ("data", &self.data, is_data),
            ("maxPriorityFeePerGas", &self.max_priority_fee_per_gas, is_quantity),
            ("maxFeePerGas", &self.max_fee_per_gas, is_quantity),
            ("chainId", &self.chain_id, is_quantity),
        ];
        for (field, value, matches) in checks.iter().copied() {
            if let Some(v) = value {
                if !matches(v) {
                    return Err(TransactionError::InvalidField { field, value: v.clone() });
                }
            }
        }
        if let Some(list) = &self.access_list {
            for entry in list {
                if !is_address(&entry.address) {
                    return Err(TransactionError::InvalidField {
                        field: "accessList.address",
                        value: entry.address.clone(),
                    });
                }
                for key in &entry.storage_keys {
                    if !is_data(key) || key.len() != 66 {
                        return Err(TransactionError::InvalidField {
                            field: "accessList.storageKeys",
                            value: key.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_call() {
        let call = CallObject {
            ty: Some("0x2".into()),
            to: Some("0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccc".into()),
            value: Some("0x3e8".into()),
            data: Some("0xa9059cbb".into()),
            chain_id: Some("0x1".into()),
            ..Default::default()
        };
        assert!(call.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_address() {
        let call = CallObject { to: Some("0xnotanaddress".into()), ..Default::default() };
        assert!(matches!(call.validate(), Err(TransactionError::InvalidField { field: "to", .. })));
    }

    #[test]
    fn quantity_allows_bare_zero_but_not_leading_zero() {
        assert!(is_quantity("0x0"));
        assert!(!is_quantity("0x01"));
        assert!(is_quantity("0x1"));
    }

    #[test]
    fn data_requires_even_length() {
        assert!(is_data("0xa9059cbb"));
        assert!(!is_data("0xabc"));
        assert!(is_data("0x"));
    }
}
