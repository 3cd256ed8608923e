//! Conversions between textual values and `DynSolValue`

use alloy_dyn_abi::{DynSolValue, Specifier};
use alloy_json_abi::Param;

/// Parse a textual argument according to an ABI parameter's type
pub fn coerce_arg(param: &Param, arg: &str) -> Result<DynSolValue, String> {
    let ty = param
        .resolve()
        .map_err(|e| format!("unsupported type '{}': {}", param.ty, e))?;
    ty.coerce_str(arg.trim())
        .map_err(|e| format!("'{}' is not a valid {}: {}", arg, param.ty, e))
}

/// Format a decoded value for printing
///
/// Integers are printed in full decimal so balances come out verbatim.
pub fn format_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Int(i, _) => i.to_string(),
        DynSolValue::Uint(u, _) => u.to_string(),
        DynSolValue::FixedBytes(word, size) => {
            let bytes = &word.as_slice()[..(*size).min(32)];
            format!("0x{}", hex::encode(bytes))
        }
        DynSolValue::Address(addr) => addr.to_checksum(None),
        DynSolValue::Function(func) => format!("0x{}", hex::encode(func.as_slice())),
        DynSolValue::Bytes(bytes) => format!("0x{}", hex::encode(bytes)),
        DynSolValue::String(s) => s.clone(),
        DynSolValue::Array(arr) | DynSolValue::FixedArray(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        DynSolValue::Tuple(fields) => {
            let items: Vec<String> = fields.iter().map(format_value).collect();
            format!("({})", items.join(", "))
        }
    }
}
