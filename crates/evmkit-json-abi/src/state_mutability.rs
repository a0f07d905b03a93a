use serde::{Deserialize, Serialize};

/// A function's declared state mutability, as written in the JSON ABI's
/// `stateMutability` field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateMutability {
    /// Promises not to read from or modify the state.
    #[serde(rename = "pure")]
    Pure,
    /// Promises not to modify the state.
    #[serde(rename = "view")]
    View,
    /// Promises not to receive Ether.
    #[serde(rename = "nonpayable")]
    NonPayable,
    /// Makes no promises; may receive Ether and modify state.
    #[serde(rename = "payable")]
    Payable,
}

impl StateMutability {
    /// `true` for `payable`.
    pub const fn is_payable(self) -> bool {
        matches!(self, Self::Payable)
    }
}
