use std::fmt;

/// A named connection point on a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The struct's own type flowing out (`obj-main`).
    ObjectMain,
    /// The i-th field's type flowing out (`field-<i>`).
    Field(usize),
    /// A function's result flowing out (`return-val`).
    ReturnValue,
    /// The i-th parameter slot receiving a value (`param-<i>`).
    Param(usize),
    /// The initializer's sole input slot (`witness-input`).
    WitnessInput,
    /// No handle recorded on the edge.
    Unspecified,
    /// Anything else, kept verbatim.
    Other(String),
}

impl Handle {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Handle::Unspecified;
        };
        match raw {
            "" => Handle::Unspecified,
            "obj-main" => Handle::ObjectMain,
            "return-val" => Handle::ReturnValue,
            "witness-input" => Handle::WitnessInput,
            _ => Self::parse_indexed(raw).unwrap_or_else(|| Handle::Other(raw.to_string())),
        }
    }

    fn parse_indexed(raw: &str) -> Option<Self> {
        let (prefix, index) = raw.rsplit_once('-')?;
        let index = index.parse().ok()?;
        match prefix {
            "field" => Some(Handle::Field(index)),
            "param" => Some(Handle::Param(index)),
            _ => None,
        }
    }

    /// The editor's string form, `None` for [`Handle::Unspecified`].
    pub fn as_wire(&self) -> Option<String> {
        match self {
            Handle::Unspecified => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handle::ObjectMain => write!(f, "obj-main"),
            Handle::Field(i) => write!(f, "field-{}", i),
            Handle::ReturnValue => write!(f, "return-val"),
            Handle::Param(i) => write!(f, "param-{}", i),
            Handle::WitnessInput => write!(f, "witness-input"),
            Handle::Unspecified => write!(f, "<none>"),
            Handle::Other(raw) => write!(f, "{}", raw),
        }
    }
}
