use serde::{Deserialize, Serialize};

/// JSON specification of a function/error input or output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Param {
    /// The parameter's name; the empty string for unnamed parameters.
    #[serde(default)]
    pub name: String,
    /// The parameter's Solidity type, using the literal string `"tuple"`
    /// (optionally suffixed with array brackets) for compound types.
    #[serde(rename = "type")]
    pub ty: String,
    /// If `ty` is a tuple (or a tuple array), the tuple's own fields, in
    /// declaration order. Empty otherwise.
    #[serde(default)]
    pub components: Vec<Param>,
}

/// JSON specification of an event parameter: a [`Param`] plus the `indexed` flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventParam {
    /// The parameter's name; the empty string for unnamed parameters.
    #[serde(default)]
    pub name: String,
    /// The parameter's Solidity type, see [`Param::ty`].
    #[serde(rename = "type")]
    pub ty: String,
    /// If `ty` is a tuple (or a tuple array), the tuple's own fields.
    #[serde(default)]
    pub components: Vec<Param>,
    /// `true` if this parameter is written to a log topic rather than the data payload.
    #[serde(default)]
    pub indexed: bool,
}
