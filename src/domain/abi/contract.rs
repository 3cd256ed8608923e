//! Contract ABI - method lookup, encoding and decoding

use alloy_dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy_json_abi::{Function, JsonAbi};

use super::value::coerce_arg;
use crate::domain::error::{Error, Result};

/// A parsed contract ABI
#[derive(Debug, Clone)]
pub struct ContractAbi {
    abi: JsonAbi,
}

impl ContractAbi {
    pub fn new(abi: JsonAbi) -> Self {
        Self { abi }
    }

    /// Parse ABI JSON content
    ///
    /// Accepts either a bare ABI array or a compiler artifact carrying the
    /// ABI in an `abi` field (Foundry `out/`, Hardhat `artifacts/`).
    pub fn from_json(content: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| Error::AbiParse(e.to_string()))?;

        let abi_value = if value.is_array() {
            value
        } else if let Some(abi) = value.get("abi") {
            abi.clone()
        } else {
            return Err(Error::AbiParse(
                "expected a JSON array or an object with an \"abi\" field".into(),
            ));
        };

        let abi: JsonAbi =
            serde_json::from_value(abi_value).map_err(|e| Error::AbiParse(e.to_string()))?;
        Ok(Self::new(abi))
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Resolve a method by name and argument count
    ///
    /// Overloads are told apart by arity only; the first declared match wins.
    pub fn function(&self, name: &str, arity: usize) -> Result<&Function> {
        self.abi
            .function(name)
            .and_then(|overloads| overloads.iter().find(|f| f.inputs.len() == arity))
            .ok_or_else(|| Error::UnknownMethod {
                name: name.to_string(),
                arity,
            })
    }

    /// Encode calldata (selector + arguments) for a method call
    pub fn encode_input(&self, name: &str, args: &[DynSolValue]) -> Result<Vec<u8>> {
        let function = self.function(name, args.len())?;
        function.abi_encode_input(args).map_err(|e| Error::Argument {
            method: function.signature(),
            index: 0,
            reason: e.to_string(),
        })
    }

    /// Decode the return data of a method call
    pub fn decode_output(&self, name: &str, arity: usize, data: &[u8]) -> Result<Vec<DynSolValue>> {
        let function = self.function(name, arity)?;
        function.abi_decode_output(data).map_err(|e| Error::Decode {
            method: function.signature(),
            reason: e.to_string(),
        })
    }

    /// Convert textual arguments into typed values using the method's inputs
    pub fn coerce_args(&self, name: &str, args: &[String]) -> Result<Vec<DynSolValue>> {
        let function = self.function(name, args.len())?;
        function
            .inputs
            .iter()
            .zip(args)
            .enumerate()
            .map(|(index, (param, arg))| {
                coerce_arg(param, arg).map_err(|reason| Error::Argument {
                    method: function.signature(),
                    index,
                    reason,
                })
            })
            .collect()
    }
}
