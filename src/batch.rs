//! Input batch generation.

/// Default prefix for generated inputs.
pub const DEFAULT_PREFIX: &str = "password";

/// An immutable, ordered batch of inputs to hash.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputBatch {
    inputs: Vec<String>,
}

impl InputBatch {
    /// Generates `size` inputs of the form `prefix + index`, for index in `0..size`.
    pub fn generate(prefix: &str, size: usize) -> Self {
        let inputs = (0..size).map(|i| format!("{}{}", prefix, i)).collect();
        Self { inputs }
    }

    /// Wraps an existing list of inputs.
    pub fn from_inputs(inputs: Vec<String>) -> Self {
        Self { inputs }
    }

    /// Returns the inputs as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.inputs
    }

    /// Returns the number of inputs.
    #[inline]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns true if the batch has no inputs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Returns an iterator over the inputs, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.inputs.iter()
    }
}

impl AsRef<[String]> for InputBatch {
    fn as_ref(&self) -> &[String] {
        &self.inputs
    }
}
