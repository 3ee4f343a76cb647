//! Generic attribute records, as handed over by the command-stream tokenizer.

use std::fmt;

/// Category of an attribute record, taken from the command marker the
/// tokenizer stripped (`TF`, `TA`, `TO`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttributeKind {
    /// File attribute (`TF`): attached to the file as a whole.
    #[default]
    File,
    /// Aperture attribute (`TA`): attached to an aperture definition.
    Aperture,
    /// Object attribute (`TO`): attached to graphical objects.
    Object,
}

/// A tokenized attribute record: tag name, category, and ordered values.
///
/// Produced upstream by splitting an attribute command on its field
/// delimiter. Standard attribute names begin with `.`; the values are
/// positional, so their order is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericRecord {
    pub name: String,
    pub kind: AttributeKind,
    pub values: Vec<String>,
}

impl GenericRecord {
    pub fn new(name: impl Into<String>, kind: AttributeKind, values: Vec<String>) -> Self {
        GenericRecord {
            name: name.into(),
            kind,
            values,
        }
    }
}

impl fmt::Display for GenericRecord {
    /// Renders the comma-joined field form, e.g. `.FileFunction,Copper,L1,Top`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for v in &self.values {
            write!(f, ",{}", v)?;
        }
        Ok(())
    }
}
