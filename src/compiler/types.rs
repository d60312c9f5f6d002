//! Generic substitution for function parameter types.
//!
//! Struct fields are emitted exactly as declared; only parameters go through
//! [`resolve_param_type`].

const TREASURY_CAP: &str = "TreasuryCap";
const COIN: &str = "Coin";
const TX_CONTEXT: &str = "TxContext";
const PLACEHOLDER: &str = "T";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reference {
    None,
    Immutable,
    Mutable,
}

impl Reference {
    fn prefix(self) -> &'static str {
        match self {
            Reference::None => "",
            Reference::Immutable => "&",
            Reference::Mutable => "&mut ",
        }
    }
}

/// Resolves a declared parameter type against the module's witness name.
///
/// - `TreasuryCap`, `TreasuryCap<T>`, `&mut TreasuryCap` become
///   `&mut TreasuryCap<W>`; an immutable reference stays immutable.
/// - `Coin`, `Coin<T>` and the bare placeholder `T` become `Coin<W>`, keeping
///   any reference marker.
/// - Any `TxContext` form becomes `&mut TxContext`.
/// - Everything else is returned unchanged.
pub fn resolve_param_type(declared: &str, witness: &str) -> String {
    let (reference, core) = split_reference(declared.trim());
    let (base, argument) = split_generic(core);
    let placeholder_or_bare = matches!(argument, None | Some(PLACEHOLDER));

    if base == TREASURY_CAP && placeholder_or_bare {
        let reference = match reference {
            Reference::Immutable => Reference::Immutable,
            _ => Reference::Mutable,
        };
        return format!("{}{}<{}>", reference.prefix(), TREASURY_CAP, witness);
    }
    if (base == COIN && placeholder_or_bare) || core == PLACEHOLDER {
        return format!("{}{}<{}>", reference.prefix(), COIN, witness);
    }
    if base == TX_CONTEXT && argument.is_none() {
        return format!("{}{}", Reference::Mutable.prefix(), TX_CONTEXT);
    }
    declared.to_string()
}

fn split_reference(token: &str) -> (Reference, &str) {
    if let Some(rest) = token.strip_prefix('&') {
        let rest = rest.trim_start();
        if let Some(inner) = rest.strip_prefix("mut ") {
            return (Reference::Mutable, inner.trim_start());
        }
        return (Reference::Immutable, rest);
    }
    (Reference::None, token)
}

fn split_generic(core: &str) -> (&str, Option<&str>) {
    match core.split_once('<') {
        Some((base, rest)) => {
            let argument = rest.strip_suffix('>').unwrap_or(rest).trim();
            (base.trim(), Some(argument))
        }
        None => (core, None),
    }
}
