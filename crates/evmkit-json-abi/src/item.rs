use crate::{resolve, AbiParseError, EventParam, Param, StateMutability};
use alloc::{format, string::String, vec::Vec};
use evmkit_abi::TypeTemplate;
use evmkit_primitives::{selector as selector_of, topic as topic_of, Selector, B256};
use serde::{Deserialize, Serialize};

fn canonical_inputs(inputs: &[Param]) -> Result<(Vec<TypeTemplate>, String), AbiParseError> {
    let types = inputs.iter().map(resolve).collect::<Result<Vec<_>, _>>()?;
    let rendered = types.iter().map(TypeTemplate::canonical).collect::<Vec<_>>().join(",");
    Ok((types, rendered))
}

/// A parsed Solidity function: its resolved input/output templates,
/// declared mutability, and 4-byte selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    /// The function's name.
    pub name: String,
    /// The raw JSON parameter specs, preserved for re-serialization/display.
    pub inputs: Vec<Param>,
    /// The raw JSON parameter specs, preserved for re-serialization/display.
    pub outputs: Vec<Param>,
    /// Declared state mutability.
    pub state_mutability: StateMutability,
    /// Resolved input type templates, in declaration order.
    pub input_types: Vec<TypeTemplate>,
    /// Resolved output type templates, in declaration order.
    pub output_types: Vec<TypeTemplate>,
    /// `keccak256(name + canonical(inputs))[..4]`.
    pub selector: Selector,
}

impl Function {
    fn from_json(raw: RawFunction) -> Result<Self, AbiParseError> {
        let (input_types, canonical) = canonical_inputs(&raw.inputs)?;
        let output_types = raw.outputs.iter().map(resolve).collect::<Result<Vec<_>, _>>()?;
        let preimage = format!("{}({canonical})", raw.name);
        Ok(Self {
            name: raw.name,
            inputs: raw.inputs,
            outputs: raw.outputs,
            state_mutability: raw.state_mutability,
            input_types,
            output_types,
            selector: selector_of(&preimage).into(),
        })
    }

    /// The canonical signature used as the selector preimage, e.g. `foo(uint64,(address,uint256)[])`.
    pub fn signature(&self) -> String {
        let canonical = self.input_types.iter().map(TypeTemplate::canonical).collect::<Vec<_>>().join(",");
        format!("{}({canonical})", self.name)
    }
}

/// A parsed Solidity event: its resolved parameter templates, indexed flags,
/// and 32-byte topic hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// The event's name.
    pub name: String,
    /// The raw JSON parameter specs (each carrying its own `indexed` flag).
    pub inputs: Vec<EventParam>,
    /// `true` if the event omits its topic-0 signature hash (rare, gas-optimization ABIs).
    pub anonymous: bool,
    /// Resolved parameter type templates, in declaration order.
    pub input_types: Vec<TypeTemplate>,
    /// `true` for each parameter written to a log topic rather than the data payload.
    pub indexed: Vec<bool>,
    /// `keccak256(name + canonical(inputs))`, the event's topic-0 (unless `anonymous`).
    pub topic: B256,
}

impl Event {
    fn from_json(raw: RawEvent) -> Result<Self, AbiParseError> {
        let params: Vec<Param> = raw
            .inputs
            .iter()
            .map(|p| Param { name: p.name.clone(), ty: p.ty.clone(), components: p.components.clone() })
            .collect();
        let (input_types, canonical) = canonical_inputs(&params)?;
        let preimage = format!("{}({canonical})", raw.name);
        let indexed = raw.inputs.iter().map(|p| p.indexed).collect();
        Ok(Self {
            name: raw.name,
            inputs: raw.inputs,
            anonymous: raw.anonymous,
            input_types,
            indexed,
            topic: topic_of(&preimage),
        })
    }
}

/// A parsed Solidity custom error: like [`Function`] but with no outputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomError {
    /// The error's name.
    pub name: String,
    /// The raw JSON parameter specs.
    pub inputs: Vec<Param>,
    /// Resolved input type templates, in declaration order.
    pub input_types: Vec<TypeTemplate>,
    /// `keccak256(name + canonical(inputs))[..4]`.
    pub selector: Selector,
}

impl CustomError {
    fn from_json(raw: RawError) -> Result<Self, AbiParseError> {
        let (input_types, canonical) = canonical_inputs(&raw.inputs)?;
        let preimage = format!("{}({canonical})", raw.name);
        Ok(Self { name: raw.name, inputs: raw.inputs, input_types, selector: selector_of(&preimage).into() })
    }
}

/// The contract constructor: an input template and a mutability flag, no selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constructor {
    /// The raw JSON parameter specs.
    pub inputs: Vec<Param>,
    /// Declared state mutability (`nonpayable` or `payable`; never `pure`/`view`).
    pub state_mutability: StateMutability,
    /// Resolved input type templates, in declaration order.
    pub input_types: Vec<TypeTemplate>,
}

impl Constructor {
    fn from_json(raw: RawConstructor) -> Result<Self, AbiParseError> {
        let input_types = raw.inputs.iter().map(resolve).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { inputs: raw.inputs, state_mutability: raw.state_mutability, input_types })
    }
}

/// The contract's `fallback` function: an optional `bytes` input/output, optionally payable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fallback {
    /// Declared state mutability.
    pub state_mutability: StateMutability,
}

/// The contract's `receive` function: no inputs, no outputs, always payable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receive {
    /// Declared state mutability; always [`StateMutability::Payable`] in a well-formed ABI.
    pub state_mutability: StateMutability,
}

#[derive(Deserialize)]
struct RawFunction {
    name: String,
    #[serde(default)]
    inputs: Vec<Param>,
    #[serde(default)]
    outputs: Vec<Param>,
    #[serde(default = "default_mutability", rename = "stateMutability")]
    state_mutability: StateMutability,
}

#[derive(Deserialize)]
struct RawEvent {
    name: String,
    #[serde(default)]
    inputs: Vec<EventParam>,
    #[serde(default)]
    anonymous: bool,
}

#[derive(Deserialize)]
struct RawError {
    name: String,
    #[serde(default)]
    inputs: Vec<Param>,
}

#[derive(Deserialize)]
struct RawConstructor {
    #[serde(default)]
    inputs: Vec<Param>,
    #[serde(default = "default_mutability", rename = "stateMutability")]
    state_mutability: StateMutability,
}

#[derive(Deserialize)]
struct RawFallback {
    #[serde(default = "default_mutability", rename = "stateMutability")]
    state_mutability: StateMutability,
}

#[derive(Deserialize)]
struct RawReceive {
    #[serde(default = "default_mutability", rename = "stateMutability")]
    state_mutability: StateMutability,
}

const fn default_mutability() -> StateMutability {
    StateMutability::NonPayable
}

/// One entry of a JSON ABI array, dispatched on its `"type"` field.
///
/// Parsed with serde's internally-tagged enum support rather than a
/// hand-rolled [`serde::de::Visitor`]: the wire format already carries a
/// discriminant field (`"type"`) matching this shape exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbiItem {
    /// A `"type": "function"` entry.
    Function(Function),
    /// A `"type": "event"` entry.
    Event(Event),
    /// A `"type": "error"` entry.
    Error(CustomError),
    /// A `"type": "constructor"` entry.
    Constructor(Constructor),
    /// A `"type": "fallback"` entry.
    Fallback(Fallback),
    /// A `"type": "receive"` entry.
    Receive(Receive),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawItem {
    Function(RawFunction),
    Event(RawEvent),
    Error(RawError),
    Constructor(RawConstructor),
    Fallback(RawFallback),
    Receive(RawReceive),
}

impl<'de> Deserialize<'de> for AbiItem {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawItem::deserialize(deserializer)?;
        let item = match raw {
            RawItem::Function(f) => Self::Function(Function::from_json(f).map_err(serde::de::Error::custom)?),
            RawItem::Event(e) => Self::Event(Event::from_json(e).map_err(serde::de::Error::custom)?),
            RawItem::Error(e) => Self::Error(CustomError::from_json(e).map_err(serde::de::Error::custom)?),
            RawItem::Constructor(c) => {
                Self::Constructor(Constructor::from_json(c).map_err(serde::de::Error::custom)?)
            }
            RawItem::Fallback(f) => Self::Fallback(Fallback { state_mutability: f.state_mutability }),
            RawItem::Receive(r) => Self::Receive(Receive { state_mutability: r.state_mutability }),
        };
        Ok(item)
    }
}

impl Serialize for AbiItem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(None)?;
        match self {
            Self::Function(f) => {
                map.serialize_entry("type", "function")?;
                map.serialize_entry("name", &f.name)?;
                map.serialize_entry("inputs", &f.inputs)?;
                map.serialize_entry("outputs", &f.outputs)?;
                map.serialize_entry("stateMutability", &f.state_mutability)?;
            }
            Self::Event(e) => {
                map.serialize_entry("type", "event")?;
                map.serialize_entry("name", &e.name)?;
                map.serialize_entry("inputs", &e.inputs)?;
                map.serialize_entry("anonymous", &e.anonymous)?;
            }
            Self::Error(e) => {
                map.serialize_entry("type", "error")?;
                map.serialize_entry("name", &e.name)?;
                map.serialize_entry("inputs", &e.inputs)?;
            }
            Self::Constructor(c) => {
                map.serialize_entry("type", "constructor")?;
                map.serialize_entry("inputs", &c.inputs)?;
                map.serialize_entry("stateMutability", &c.state_mutability)?;
            }
            Self::Fallback(f) => {
                map.serialize_entry("type", "fallback")?;
                map.serialize_entry("stateMutability", &f.state_mutability)?;
            }
            Self::Receive(r) => {
                map.serialize_entry("type", "receive")?;
                map.serialize_entry("stateMutability", &r.state_mutability)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_mutability_survives_a_json_round_trip() {
        let json = r#"{"type":"function","name":"balanceOf","inputs":[{"name":"account","type":"address"}],"outputs":[{"name":"","type":"uint256"}],"stateMutability":"view"}"#;
        let item: AbiItem = serde_json::from_str(json).unwrap();
        let AbiItem::Function(f) = item else { panic!("expected a function item") };
        assert_eq!(f.state_mutability, StateMutability::View);

        let fallback_json = r#"{"type":"fallback","stateMutability":"payable"}"#;
        let item: AbiItem = serde_json::from_str(fallback_json).unwrap();
        let AbiItem::Fallback(fb) = item else { panic!("expected a fallback item") };
        assert_eq!(fb.state_mutability, StateMutability::Payable);
    }
}
