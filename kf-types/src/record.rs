use crate::Offset;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A message read from a partition: the raw value bytes and where it sits in the log.
pub struct Record {
    value: Vec<u8>,
    offset: Offset,
}

impl Record {
    pub fn new<V: Into<Vec<u8>>>(value: V, offset: Offset) -> Self {
        Self {
            value: value.into(),
            offset,
        }
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }
}
