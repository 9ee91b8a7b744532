use thiserror::Error;

/// A preset name that matches no entry in the fixed preset tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} preset: {name:?}")]
pub struct UnknownPreset {
    pub kind: &'static str,
    pub name: String,
}

impl UnknownPreset {
    pub fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}
