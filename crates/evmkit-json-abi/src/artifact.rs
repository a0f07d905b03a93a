//! Parsing for a combined build artifact: a bare ABI array, or a
//! Hardhat/Foundry-style document carrying the ABI alongside creation and
//! deployed bytecode.

use crate::{AbiItem, AbiParseError, JsonAbi};
use alloc::{string::ToString, vec::Vec};
use evmkit_primitives::Bytes;
use serde::Deserialize;

/// A contract's ABI plus whatever bytecode a build artifact carried
/// alongside it.
///
/// Deserializes from either shape a toolchain might hand a caller: a bare
/// `[{"type": "function", ...}, ...]` array, or an object with an `"abi"`
/// key and optional `"bytecode"`/`"deployedBytecode"` fields (top-level, or
/// nested under `"evm"`, as Hardhat and `solc --combined-json` both emit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractArtifact {
    /// The parsed ABI.
    pub abi: JsonAbi,
    /// The contract's creation (constructor) bytecode, if the artifact carried one.
    pub bytecode: Option<Bytes>,
    /// The contract's deployed (runtime) bytecode, if the artifact carried one.
    pub deployed_bytecode: Option<Bytes>,
}

impl ContractArtifact {
    /// Parses `json` as either a bare ABI array or a combined artifact document.
    pub fn from_json_str(json: &str) -> Result<Self, AbiParseError> {
        serde_json::from_str(json).map_err(|e| AbiParseError::Json(e.to_string()))
    }
}

/// A bytecode field that is either a plain hex string, or an `{"object": "0x..."}`
/// wrapper, the shape `solc`'s `--combined-json` output nests bytecode in.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Bytes(Bytes),
    Object {
        object: Bytes,
    },
}

impl RawBytecode {
    fn into_bytes(self) -> Bytes {
        match self {
            Self::Bytes(b) | Self::Object { object: b } => b,
        }
    }
}

#[derive(Deserialize)]
struct RawEvm {
    bytecode: Option<RawBytecode>,
    #[serde(rename = "deployedBytecode")]
    deployed_bytecode: Option<RawBytecode>,
}

impl<'de> Deserialize<'de> for ContractArtifact {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ArtifactVisitor)
    }
}

struct ArtifactVisitor;

impl<'de> serde::de::Visitor<'de> for ArtifactVisitor {
    type Value = ContractArtifact;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a JSON ABI array, or an object with an \"abi\" field")
    }

    fn visit_seq<A: serde::de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<AbiItem>()? {
            items.push(item);
        }
        let abi = JsonAbi::from_items(items).map_err(serde::de::Error::custom)?;
        Ok(ContractArtifact { abi, bytecode: None, deployed_bytecode: None })
    }

    fn visit_map<A: serde::de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut abi = None;
        let mut bytecode = None;
        let mut deployed_bytecode = None;

        while let Some(key) = map.next_key::<&str>()? {
            match key {
                "abi" if abi.is_none() => {
                    let items: Vec<AbiItem> = map.next_value()?;
                    abi = Some(JsonAbi::from_items(items).map_err(serde::de::Error::custom)?);
                }
                "evm" => {
                    let evm: RawEvm = map.next_value()?;
                    if bytecode.is_none() {
                        bytecode = evm.bytecode.map(RawBytecode::into_bytes);
                    }
                    if deployed_bytecode.is_none() {
                        deployed_bytecode = evm.deployed_bytecode.map(RawBytecode::into_bytes);
                    }
                }
                "bytecode" | "byteCode" | "bin" if bytecode.is_none() => {
                    bytecode = Some(map.next_value::<RawBytecode>()?.into_bytes());
                }
                "deployedBytecode" | "deployedbytecode" | "runtimeBin" if deployed_bytecode.is_none() => {
                    deployed_bytecode = Some(map.next_value::<RawBytecode>()?.into_bytes());
                }
                _ => {
                    map.next_value::<serde::de::IgnoredAny>()?;
                }
            }
        }

        let abi = abi.ok_or_else(|| serde::de::Error::missing_field("abi"))?;
        Ok(ContractArtifact { abi, bytecode, deployed_bytecode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE_ABI: &str = r#"[
        {"type":"function","name":"owner","inputs":[],"outputs":[{"name":"","type":"address"}],"stateMutability":"view"}
    ]"#;

    #[test]
    fn parses_a_bare_abi_array() {
        let artifact = ContractArtifact::from_json_str(BARE_ABI).unwrap();
        assert_eq!(artifact.abi.functions.len(), 1);
        assert!(artifact.bytecode.is_none());
        assert!(artifact.deployed_bytecode.is_none());
    }

    #[test]
    fn parses_a_hardhat_style_artifact() {
        let json = r#"{
            "abi": [{"type":"function","name":"owner","inputs":[],"outputs":[{"name":"","type":"address"}],"stateMutability":"view"}],
            "bytecode": "0x6080",
            "deployedBytecode": "0x6090",
            "unrelatedField": 1234
        }"#;
        let artifact = ContractArtifact::from_json_str(json).unwrap();
        assert_eq!(artifact.abi.functions.len(), 1);
        assert_eq!(artifact.bytecode.unwrap(), Bytes::copy_from_slice(&[0x60, 0x80]));
        assert_eq!(artifact.deployed_bytecode.unwrap(), Bytes::copy_from_slice(&[0x60, 0x90]));
    }

    #[test]
    fn parses_nested_evm_bytecode_object() {
        let json = r#"{
            "abi": [],
            "evm": {"bytecode": {"object": "0x6080"}, "deployedBytecode": {"object": "0x6090"}}
        }"#;
        let artifact = ContractArtifact::from_json_str(json).unwrap();
        assert_eq!(artifact.bytecode.unwrap(), Bytes::copy_from_slice(&[0x60, 0x80]));
        assert_eq!(artifact.deployed_bytecode.unwrap(), Bytes::copy_from_slice(&[0x60, 0x90]));
    }

    #[test]
    fn rejects_an_artifact_missing_the_abi_key() {
        let json = r#"{"bytecode": "0x6080"}"#;
        assert!(matches!(ContractArtifact::from_json_str(json), Err(AbiParseError::Json(_))));
    }
}
