use crate::{AbiItem, AbiParseError, Constructor, CustomError, Event, Fallback, Function, Receive};
use alloc::{string::ToString, vec::Vec};

/// A parsed Solidity JSON ABI document: every function, event, error, and
/// the special constructor/fallback/receive members it declared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JsonAbi {
    /// The constructor, if the ABI declares one.
    pub constructor: Option<Constructor>,
    /// The fallback function, if the ABI declares one.
    pub fallback: Option<Fallback>,
    /// The receive function, if the ABI declares one.
    pub receive: Option<Receive>,
    /// All parsed functions, in document order.
    pub functions: Vec<Function>,
    /// All parsed events, in document order.
    pub events: Vec<Event>,
    /// All parsed custom errors, in document order.
    pub errors: Vec<CustomError>,
}

impl JsonAbi {
    /// Parses a JSON array of ABI items.
    ///
    /// After parsing, every function's selector is checked for uniqueness;
    /// a collision (two functions rendering to the same 4-byte selector)
    /// fails the whole parse rather than silently shadowing one of them.
    pub fn from_json_str(json: &str) -> Result<Self, AbiParseError> {
        let items: Vec<AbiItem> =
            serde_json::from_str(json).map_err(|e| AbiParseError::Json(e.to_string()))?;
        Self::from_items(items)
    }

    /// Builds a document from already-deserialized items, e.g. the `abi`
    /// array of a combined build artifact.
    pub fn from_items(items: Vec<AbiItem>) -> Result<Self, AbiParseError> {
        let mut abi = Self::default();
        for item in items {
            match item {
                AbiItem::Function(f) => abi.functions.push(f),
                AbiItem::Event(e) => abi.events.push(e),
                AbiItem::Error(e) => abi.errors.push(e),
                AbiItem::Constructor(c) => abi.constructor = Some(c),
                AbiItem::Fallback(f) => abi.fallback = Some(f),
                AbiItem::Receive(r) => abi.receive = Some(r),
            }
        }

        abi.check_selector_collisions()?;
        Ok(abi)
    }

    fn check_selector_collisions(&self) -> Result<(), AbiParseError> {
        for (i, a) in self.functions.iter().enumerate() {
            for b in &self.functions[i + 1..] {
                if a.selector == b.selector {
                    return Err(AbiParseError::HashCollision(a.signature()));
                }
            }
        }
        Ok(())
    }

    /// All functions with the given name, in document order.
    pub fn functions_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Function> {
        self.functions.iter().filter(move |f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ERC20_ABI: &str = r#"[
        {"type":"function","name":"transfer","inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"}],"outputs":[{"name":"","type":"bool"}],"stateMutability":"nonpayable"},
        {"type":"function","name":"balanceOf","inputs":[{"name":"account","type":"address"}],"outputs":[{"name":"","type":"uint256"}],"stateMutability":"view"},
        {"type":"function","name":"approve","inputs":[{"name":"spender","type":"address"},{"name":"amount","type":"uint256"}],"outputs":[{"name":"","type":"bool"}],"stateMutability":"nonpayable"},
        {"type":"event","name":"Transfer","inputs":[{"name":"from","type":"address","indexed":true},{"name":"to","type":"address","indexed":true},{"name":"value","type":"uint256","indexed":false}],"anonymous":false},
        {"type":"receive","stateMutability":"payable"}
    ]"#;

    #[test]
    fn parses_erc20_and_computes_known_selectors() {
        let abi = JsonAbi::from_json_str(ERC20_ABI).unwrap();
        assert_eq!(abi.functions.len(), 3);
        assert!(abi.receive.is_some());

        let transfer = abi.functions_named("transfer").next().unwrap();
        assert_eq!(hex::encode(transfer.selector.as_slice()), "a9059cbb");

        let balance_of = abi.functions_named("balanceOf").next().unwrap();
        assert_eq!(hex::encode(balance_of.selector.as_slice()), "70a08231");
        // "view" is non-default (the default is NonPayable); this only
        // survives parsing if stateMutability is wired to the wire key.
        assert_eq!(balance_of.state_mutability, crate::StateMutability::View);

        let approve = abi.functions_named("approve").next().unwrap();
        assert_eq!(hex::encode(approve.selector.as_slice()), "095ea7b3");
    }

    #[test]
    fn rejects_duplicate_selectors() {
        let dup = r#"[
            {"type":"function","name":"transfer","inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"}],"outputs":[],"stateMutability":"nonpayable"},
            {"type":"function","name":"transfer","inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"}],"outputs":[],"stateMutability":"view"}
        ]"#;
        assert!(matches!(JsonAbi::from_json_str(dup), Err(AbiParseError::HashCollision(_))));
    }
}
