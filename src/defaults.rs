use serde::{Deserialize, Serialize};
use std::fs;

/// Every fallback value the code generator substitutes for missing user input.
///
/// Loaded from JSON with [`CodegenDefaults::from_file`]; keys that are absent
/// keep their built-in value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CodegenDefaults {
    /// Witness type used when no eligible struct exists in the graph.
    pub witness_name: String,
    pub coin_decimals: u8,
    pub coin_symbol: String,
    pub coin_name: String,
    pub coin_description: String,
    /// Body of functions whose intent is not recognized.
    pub placeholder_body: String,
    pub package_version: String,
    pub framework_git: String,
    pub framework_subdir: String,
    pub framework_rev: String,
    pub package_address: String,
}

impl Default for CodegenDefaults {
    fn default() -> Self {
        Self {
            witness_name: "MY_COIN".to_string(),
            coin_decimals: 9,
            coin_symbol: "SYM".to_string(),
            coin_name: "My Coin".to_string(),
            coin_description: String::new(),
            placeholder_body: "// logic not generated".to_string(),
            package_version: "0.0.1".to_string(),
            framework_git: "https://github.com/MystenLabs/sui.git".to_string(),
            framework_subdir: "crates/sui-framework/packages/sui-framework".to_string(),
            framework_rev: "framework/testnet".to_string(),
            package_address: "0x0".to_string(),
        }
    }
}

impl CodegenDefaults {
    /// Load overrides from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(serde_json::from_str(json)?)
    }
}
