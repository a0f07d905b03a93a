use crate::{AbiParseError, ContractArtifact, Function, JsonAbi, LookupError, StateMutability};
use alloc::vec::Vec;
use evmkit_primitives::{Address, Bytes, Selector};

/// A criterion for [`ContractDescriptor::find`]. Solidity overloading makes
/// a bare name ambiguous in general; the other variants let the caller
/// narrow the match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Criterion<'a> {
    /// Match by name alone.
    Name(&'a str),
    /// Match by name and exact 4-byte selector.
    NameAndSelector(&'a str, Selector),
    /// Match by name and the canonical rendering of its input tuple, e.g. `"(uint256,address)"`.
    NameAndCanonicalInputs(&'a str, &'a str),
    /// Match by name and the canonical rendering of its output tuple.
    NameAndCanonicalOutputs(&'a str, &'a str),
    /// Match by name and declared state mutability.
    NameAndMutability(&'a str, StateMutability),
}

fn canonical_tuple(types: &[evmkit_abi::TypeTemplate]) -> alloc::string::String {
    use alloc::string::String;
    let mut out = String::from("(");
    for (i, t) in types.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&t.canonical());
    }
    out.push(')');
    out
}

impl Criterion<'_> {
    fn matches(&self, f: &Function) -> bool {
        match self {
            Self::Name(name) => &f.name == name,
            Self::NameAndSelector(name, sel) => &f.name == name && f.selector == *sel,
            Self::NameAndCanonicalInputs(name, inputs) => {
                &f.name == name && canonical_tuple(&f.input_types) == *inputs
            }
            Self::NameAndCanonicalOutputs(name, outputs) => {
                &f.name == name && canonical_tuple(&f.output_types) == *outputs
            }
            Self::NameAndMutability(name, m) => &f.name == name && f.state_mutability == *m,
        }
    }
}

/// An immutable, load-once model of a contract: its parsed ABI, optional
/// on-chain address, and deployment bytecode.
///
/// Two shapes are produced at load time and never mutated afterward: an
/// *undeployed* descriptor (bytecode present, no address) and a *deployed*
/// one (address present, no bytecode required).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractDescriptor {
    /// The contract's on-chain address, if deployed.
    pub address: Option<Address>,
    /// The chain this descriptor's address (if any) is valid on.
    pub chain_id: u64,
    /// The parsed, immutable ABI.
    pub raw_abi: JsonAbi,
    /// The contract's deployment bytecode, if this is an undeployed descriptor.
    pub raw_bytecode: Option<Bytes>,
}

impl ContractDescriptor {
    /// Builds a descriptor for an already-deployed contract.
    pub const fn deployed(address: Address, chain_id: u64, raw_abi: JsonAbi) -> Self {
        Self { address: Some(address), chain_id, raw_abi, raw_bytecode: None }
    }

    /// Builds a descriptor for a contract not yet deployed, carrying its creation bytecode.
    pub const fn undeployed(chain_id: u64, raw_abi: JsonAbi, raw_bytecode: Bytes) -> Self {
        Self { address: None, chain_id, raw_abi, raw_bytecode: Some(raw_bytecode) }
    }

    /// Parses a combined build artifact (a bare ABI array, or a
    /// Hardhat/Foundry-style `{"abi": [...], "bytecode": "0x...", ...}`
    /// document) into a deployed descriptor at `address`.
    pub fn deployed_from_artifact(
        json: &str,
        address: Address,
        chain_id: u64,
    ) -> Result<Self, AbiParseError> {
        let artifact = ContractArtifact::from_json_str(json)?;
        Ok(Self::deployed(address, chain_id, artifact.abi))
    }

    /// Parses a combined build artifact into an undeployed descriptor,
    /// taking its creation bytecode from the artifact's `bytecode` field
    /// (or `evm.bytecode.object`).
    ///
    /// Fails with [`AbiParseError::MissingBytecode`] if the artifact carried
    /// no creation bytecode.
    pub fn undeployed_from_artifact(json: &str, chain_id: u64) -> Result<Self, AbiParseError> {
        let artifact = ContractArtifact::from_json_str(json)?;
        let raw_bytecode = artifact.bytecode.ok_or(AbiParseError::MissingBytecode)?;
        Ok(Self::undeployed(chain_id, artifact.abi, raw_bytecode))
    }

    /// `true` if this descriptor has recorded bytecode (not yet deployed).
    pub const fn is_undeployed(&self) -> bool {
        self.raw_bytecode.is_some()
    }

    /// `true` if the ABI declares a `fallback` function.
    pub const fn has_fallback(&self) -> bool {
        self.raw_abi.fallback.is_some()
    }

    /// `true` if the ABI declares a `receive` function.
    pub const fn has_receive(&self) -> bool {
        self.raw_abi.receive.is_some()
    }

    /// Looks up a function by `criterion`.
    ///
    /// A single match returns it; zero matches fails with
    /// [`LookupError::FunctionNotFound`]; more than one fails with
    /// [`LookupError::Ambiguous`] carrying the match count.
    pub fn find(&self, criterion: Criterion<'_>) -> Result<&Function, LookupError> {
        let mut matches = self.raw_abi.functions.iter().filter(|f| criterion.matches(f));
        let first = matches.next().ok_or(LookupError::FunctionNotFound)?;
        let rest = matches.count();
        if rest > 0 {
            return Err(LookupError::Ambiguous(rest + 1));
        }
        Ok(first)
    }

    /// All functions matching `name`, for callers that want to disambiguate themselves.
    pub fn find_all<'a>(&'a self, name: &'a str) -> Vec<&'a Function> {
        self.raw_abi.functions_named(name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JsonAbi;

    const OVERLOADED_ABI: &str = r#"[
        {"type":"function","name":"transfer","stateMutability":"nonpayable",
         "inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"}],
         "outputs":[{"name":"","type":"bool"}]},
        {"type":"function","name":"transfer","stateMutability":"nonpayable",
         "inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"},{"name":"data","type":"bytes"}],
         "outputs":[{"name":"","type":"bool"}]},
        {"type":"function","name":"owner","stateMutability":"view",
         "inputs":[],"outputs":[{"name":"","type":"address"}]}
    ]"#;

    fn descriptor() -> ContractDescriptor {
        let abi = JsonAbi::from_json_str(OVERLOADED_ABI).unwrap();
        ContractDescriptor::deployed(Address::from([0u8; 20]), 1, abi)
    }

    #[test]
    fn unambiguous_name_resolves() {
        let d = descriptor();
        let f = d.find(Criterion::Name("owner")).unwrap();
        assert_eq!(f.name, "owner");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let d = descriptor();
        assert_eq!(d.find(Criterion::Name("nope")), Err(LookupError::FunctionNotFound));
    }

    #[test]
    fn overloaded_name_is_ambiguous() {
        let d = descriptor();
        assert_eq!(d.find(Criterion::Name("transfer")), Err(LookupError::Ambiguous(2)));
    }

    #[test]
    fn canonical_inputs_disambiguate_an_overload() {
        let d = descriptor();
        let f = d.find(Criterion::NameAndCanonicalInputs("transfer", "(address,uint256,bytes)")).unwrap();
        assert_eq!(f.input_types.len(), 3);
    }

    #[test]
    fn find_all_returns_every_overload() {
        let d = descriptor();
        assert_eq!(d.find_all("transfer").len(), 2);
    }

    #[test]
    fn has_fallback_and_receive_are_false_without_them() {
        let d = descriptor();
        assert!(!d.has_fallback());
        assert!(!d.has_receive());
    }

    const ARTIFACT_JSON: &str = r#"{
        "abi": [{"type":"function","name":"owner","stateMutability":"view","inputs":[],"outputs":[{"name":"","type":"address"}]}],
        "bytecode": "0x6080",
        "deployedBytecode": "0x6090"
    }"#;

    #[test]
    fn deployed_from_artifact_discards_bytecode() {
        let d = ContractDescriptor::deployed_from_artifact(ARTIFACT_JSON, Address::from([1u8; 20]), 1).unwrap();
        assert!(!d.is_undeployed());
        assert_eq!(d.find(Criterion::Name("owner")).unwrap().name, "owner");
    }

    #[test]
    fn undeployed_from_artifact_carries_creation_bytecode() {
        let d = ContractDescriptor::undeployed_from_artifact(ARTIFACT_JSON, 1).unwrap();
        assert!(d.is_undeployed());
        assert_eq!(d.raw_bytecode, Some(Bytes::copy_from_slice(&[0x60, 0x80])));
    }

    #[test]
    fn undeployed_from_artifact_rejects_a_bare_abi_array() {
        let bare = r#"[{"type":"function","name":"owner","stateMutability":"view","inputs":[],"outputs":[{"name":"","type":"address"}]}]"#;
        assert_eq!(
            ContractDescriptor::undeployed_from_artifact(bare, 1),
            Err(AbiParseError::MissingBytecode)
        );
    }
}
