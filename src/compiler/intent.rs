use crate::sanitize;
use ahash::AHashMap;
use std::fmt;

/// What a function node's generated body does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionIntent {
    /// Mint coins with the treasury capability and send them to the sender.
    MintCoin,
    /// Build a `SimpleNFT` and send it to the sender.
    MintNft,
    /// Hand an object to a recipient address.
    Transfer,
    /// No body is generated; a placeholder comment is emitted instead.
    Unrecognized,
}

impl fmt::Display for FunctionIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FunctionIntent::MintCoin => "mint-coin",
            FunctionIntent::MintNft => "mint-nft",
            FunctionIntent::Transfer => "transfer",
            FunctionIntent::Unrecognized => "unrecognized",
        };
        f.write_str(name)
    }
}

/// A label matches a rule when it contains every marker (case-insensitive).
struct IntentRule {
    intent: FunctionIntent,
    markers: &'static [&'static str],
}

/// Evaluated in order, first match wins.
const RULES: &[IntentRule] = &[
    IntentRule {
        intent: FunctionIntent::MintCoin,
        markers: &["mint", "coin::"],
    },
    IntentRule {
        intent: FunctionIntent::MintNft,
        markers: &["mint", "nft::"],
    },
    IntentRule {
        intent: FunctionIntent::Transfer,
        markers: &["transfer::transfer"],
    },
    IntentRule {
        intent: FunctionIntent::Transfer,
        markers: &["transfer::public_transfer"],
    },
];

const TRANSFER_FUNCTION_NAME: &str = "transfer_transfer";

/// Classifies function labels into intents.
///
/// Explicit label mappings take precedence over the built-in marker rules, so
/// a user-invented label can opt into a recognized body.
#[derive(Debug, Clone, Default)]
pub struct IntentRegistry {
    mappings: AHashMap<String, FunctionIntent>,
}

impl IntentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: &str, intent: FunctionIntent) {
        self.mappings.insert(label.to_string(), intent);
    }

    pub fn classify(&self, label: &str) -> FunctionIntent {
        if let Some(intent) = self.mappings.get(label) {
            return *intent;
        }
        classify_label(label)
    }
}

/// Built-in classification of a raw function label.
pub fn classify_label(label: &str) -> FunctionIntent {
    let lowered = label.to_lowercase();
    let matched = RULES
        .iter()
        .find(|rule| rule.markers.iter().all(|m| lowered.contains(m)))
        .map(|rule| rule.intent);

    match matched {
        Some(intent) => intent,
        None if sanitize::callable_name(label) == TRANSFER_FUNCTION_NAME => FunctionIntent::Transfer,
        None => FunctionIntent::Unrecognized,
    }
}
