//! Builds an unvalidated 1559 call object from a contract descriptor, a
//! function criterion and a set of typed arguments, then validates and
//! hands it to the RPC layer.

use evmkit_abi::EVMValue;
use evmkit_json_abi::{ContractDescriptor, Criterion};
use evmkit_primitives::{Address, U256};
use serde_json::Value;

use crate::call::CallObject;
use crate::error::TransactionError;

/// The block parameter appended to `eth_call`/`eth_estimateGas`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockTag {
    /// The most recent mined block.
    Latest,
    /// The pending block, including unconfirmed transactions.
    Pending,
    /// The genesis block.
    Earliest,
    /// A specific block number.
    Number(u64),
}

impl BlockTag {
    /// Renders this tag as the JSON-RPC parameter it is sent as.
    pub fn as_param(&self) -> Value {
        match self {
            Self::Latest => Value::String("latest".into()),
            Self::Pending => Value::String("pending".into()),
            Self::Earliest => Value::String("earliest".into()),
            Self::Number(n) => Value::String(format!("0x{n:x}")),
        }
    }
}

/// Caller-supplied constants held constant across a single call/transaction:
/// the signer, gas hints, and which block to evaluate reads against.
#[derive(Debug, Clone)]
pub struct SessionConstants {
    /// The address submitting the call.
    pub from: Address,
    /// An explicit gas limit, if the caller wants to skip estimation.
    pub gas: Option<u64>,
    /// EIP-1559 max fee per gas, in wei.
    pub max_fee_per_gas: Option<U256>,
    /// EIP-1559 max priority fee per gas, in wei.
    pub max_priority_fee_per_gas: Option<U256>,
    /// The block to evaluate `eth_call`/`eth_estimateGas` against.
    pub block_tag: BlockTag,
    /// Chain ID the signer reports it is configured for, if known. Checked
    /// against the descriptor's own `chain_id` before any call is built.
    pub signer_chain_id: Option<u64>,
}

fn hex_address(addr: &Address) -> String {
    format!("0x{}", hex::encode(addr.as_bytes()))
}

fn hex_quantity(v: U256) -> String {
    if v.is_zero() { "0x0".into() } else { format!("0x{v:x}") }
}

/// Parses a decimal or `0x`-prefixed hex base-unit quantity (e.g. wei) into a [`U256`].
pub fn parse_value(s: &str) -> Result<U256, TransactionError> {
    let parsed = match s.strip_prefix("0x") {
        Some(hex) => U256::from_str_radix(hex, 16),
        None => U256::from_str_radix(s, 10),
    };
    parsed.map_err(|_| TransactionError::InvalidValueArgument)
}

/// Builds [`CallObject`]s for a single [`ContractDescriptor`].
#[derive(Debug, Clone, Copy)]
pub struct TransactionBuilder<'a> {
    contract: &'a ContractDescriptor,
}

impl<'a> TransactionBuilder<'a> {
    /// Builds against `contract`.
    pub const fn new(contract: &'a ContractDescriptor) -> Self {
        Self { contract }
    }

    /// Builds a call to a named function, looked up by `criterion`.
    ///
    /// Encodes `args` against the resolved function's input types, prepends
    /// its selector, and runs the 1559 call object through field validation
    /// before returning it.
    pub fn function_call(
        &self,
        criterion: Criterion<'_>,
        args: &[EVMValue],
        value: U256,
        session: &SessionConstants,
    ) -> Result<CallObject, TransactionError> {
        self.check_signer_chain(session)?;
        let function = self.contract.find(criterion)?;

        if !args.is_empty() && function.input_types.is_empty() {
            return Err(TransactionError::ArgumentsToEmptyFunctionSignature);
        }
        if args.is_empty() && !function.input_types.is_empty() {
            return Err(TransactionError::FunctionArgumentsMissing);
        }
        if !value.is_zero() && !function.state_mutability.is_payable() {
            return Err(TransactionError::ValueToNonPayable);
        }
        if value.is_zero() && function.state_mutability.is_payable() {
            tracing::warn!("{}", TransactionError::PayableZeroValueWarning);
        }

        let encoded = evmkit_abi::encode(args, &function.input_types)?;
        let mut data = function.selector.to_vec();
        data.extend(encoded);

        let call = self.base_call_object(Some(data), value, session);
        call.validate()?;
        Ok(call)
    }

    /// Builds a call to the contract's `receive` function: no selector, no
    /// calldata, a non-zero `value`.
    ///
    /// Per spec, calling `receive` on a contract that declares none is a
    /// hard error at the library level.
    pub fn receive_call(
        &self,
        value: U256,
        session: &SessionConstants,
    ) -> Result<CallObject, TransactionError> {
        self.check_signer_chain(session)?;
        if !self.contract.has_receive() {
            return Err(TransactionError::ContractLacksReceive);
        }
        let call = self.base_call_object(None, value, session);
        call.validate()?;
        Ok(call)
    }

    /// Builds a call to the contract's `fallback` function, sending
    /// caller-provided raw `data` (which is not selector-dispatched).
    pub fn fallback_call(
        &self,
        data: Vec<u8>,
        value: U256,
        session: &SessionConstants,
    ) -> Result<CallObject, TransactionError> {
        self.check_signer_chain(session)?;
        if !self.contract.has_fallback() {
            return Err(TransactionError::ContractLacksFallback);
        }
        let call = self.base_call_object(Some(data), value, session);
        call.validate()?;
        Ok(call)
    }

    fn check_signer_chain(&self, session: &SessionConstants) -> Result<(), TransactionError> {
        match session.signer_chain_id {
            Some(got) if got != self.contract.chain_id => {
                Err(TransactionError::WrongChainInSigner { expected: self.contract.chain_id, got })
            }
            _ => Ok(()),
        }
    }

    fn base_call_object(
        &self,
        data: Option<Vec<u8>>,
        value: U256,
        session: &SessionConstants,
    ) -> CallObject {
        CallObject {
            ty: Some("0x2".into()),
            nonce: None,
            to: self.contract.address.as_ref().map(hex_address),
            from: Some(hex_address(&session.from)),
            gas: session.gas.map(|g| format!("0x{g:x}")),
            value: Some(hex_quantity(value)),
            data: data.map(|d| format!("0x{}", hex::encode(d))),
            max_priority_fee_per_gas: session.max_priority_fee_per_gas.map(hex_quantity),
            max_fee_per_gas: session.max_fee_per_gas.map(hex_quantity),
            access_list: None,
            chain_id: Some(format!("0x{:x}", self.contract.chain_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evmkit_json_abi::{ContractDescriptor, JsonAbi, LookupError};

    const ERC20_ABI: &str = r#"[
        {"type":"function","name":"transfer","stateMutability":"nonpayable",
         "inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"}],
         "outputs":[{"name":"","type":"bool"}]},
        {"type":"function","name":"balanceOf","stateMutability":"view",
         "inputs":[{"name":"owner","type":"address"}],
         "outputs":[{"name":"","type":"uint256"}]},
        {"type":"receive","stateMutability":"payable"},
        {"type":"fallback","stateMutability":"nonpayable"}
    ]"#;

    fn descriptor() -> ContractDescriptor {
        let abi = JsonAbi::from_json_str(ERC20_ABI).unwrap();
        ContractDescriptor::deployed(Address::from([0x11u8; 20]), 1, abi)
    }

    fn session() -> SessionConstants {
        SessionConstants {
            from: Address::from([0x22u8; 20]),
            gas: Some(21_000),
            max_fee_per_gas: Some(U256::from(100u64)),
            max_priority_fee_per_gas: Some(U256::from(1u64)),
            block_tag: BlockTag::Latest,
            signer_chain_id: None,
        }
    }

    #[test]
    fn function_call_encodes_selector_and_args() {
        let contract = descriptor();
        let builder = TransactionBuilder::new(&contract);
        let args = [EVMValue::Address(Address::from([0x33u8; 20])), EVMValue::Uint(U256::from(7u64), 256)];
        let call = builder
            .function_call(Criterion::Name("transfer"), &args, U256::ZERO, &session())
            .unwrap();
        let data = call.data.unwrap();
        assert!(data.starts_with("0xa9059cbb"));
        assert_eq!(data.len(), 2 + 8 + 64 * 2);
    }

    #[test]
    fn value_to_non_payable_function_is_rejected() {
        let contract = descriptor();
        let builder = TransactionBuilder::new(&contract);
        let args = [EVMValue::Address(Address::from([0x33u8; 20])), EVMValue::Uint(U256::from(7u64), 256)];
        let err = builder
            .function_call(Criterion::Name("transfer"), &args, U256::from(1u64), &session())
            .unwrap_err();
        assert!(matches!(err, TransactionError::ValueToNonPayable));
    }

    #[test]
    fn missing_arguments_are_rejected() {
        let contract = descriptor();
        let builder = TransactionBuilder::new(&contract);
        let err =
            builder.function_call(Criterion::Name("transfer"), &[], U256::ZERO, &session()).unwrap_err();
        assert!(matches!(err, TransactionError::FunctionArgumentsMissing));
    }

    #[test]
    fn unknown_function_surfaces_lookup_error() {
        let contract = descriptor();
        let builder = TransactionBuilder::new(&contract);
        let err = builder
            .function_call(Criterion::Name("doesNotExist"), &[], U256::ZERO, &session())
            .unwrap_err();
        assert!(matches!(err, TransactionError::Lookup(LookupError::FunctionNotFound)));
    }

    #[test]
    fn receive_call_succeeds_when_declared() {
        let contract = descriptor();
        let builder = TransactionBuilder::new(&contract);
        let call = builder.receive_call(U256::from(5u64), &session()).unwrap();
        assert!(call.data.is_none());
        assert_eq!(call.value.unwrap(), "0x5");
    }

    #[test]
    fn fallback_call_carries_raw_data() {
        let contract = descriptor();
        let builder = TransactionBuilder::new(&contract);
        let call = builder.fallback_call(vec![0xde, 0xad], U256::ZERO, &session()).unwrap();
        assert_eq!(call.data.unwrap(), "0xdead");
    }

    #[test]
    fn wrong_signer_chain_is_rejected() {
        let contract = descriptor();
        let builder = TransactionBuilder::new(&contract);
        let mut s = session();
        s.signer_chain_id = Some(5);
        let err = builder.receive_call(U256::ZERO, &s).unwrap_err();
        assert!(matches!(err, TransactionError::WrongChainInSigner { expected: 1, got: 5 }));
    }

    #[test]
    fn parse_value_accepts_hex_and_decimal() {
        assert_eq!(parse_value("0x10").unwrap(), U256::from(16u64));
        assert_eq!(parse_value("16").unwrap(), U256::from(16u64));
        assert!(parse_value("not-a-number").is_err());
    }
}
