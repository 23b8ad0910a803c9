use crate::types::FieldValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One named field of a decoded message
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

/// One decoded sample, fields kept in decoder order
///
/// The same name may appear more than once; consumers keyed by name see the
/// last occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Record {
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Builder-style variant of [`Record::push`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Last value recorded under `name`
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .rev()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }
}

impl<N, V> FromIterator<(N, V)> for Record
where
    N: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.push(name, value);
        }
        record
    }
}
