use crate::conversion::{column_name, convert_value};
use crate::types::Record;
use crate::Result;
use fitparser::profile::MesgNum;
use fitparser::FitDataRecord;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Options controlling how decoded messages become records
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Append units to field names, e.g. `speed (m/s)`
    pub include_units: bool,
}

/// A fully decoded FIT file
///
/// All messages are held in memory, so [`FitFile::get_messages`] can be
/// called any number of times and always sees the complete message list.
#[derive(Debug)]
pub struct FitFile {
    messages: Vec<FitDataRecord>,
}

impl FitFile {
    /// Read and decode a FIT file from disk
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let messages = fitparser::from_reader(&mut reader)?;
        Ok(Self { messages })
    }

    /// Decode FIT data already in memory
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let messages = fitparser::from_bytes(data)?;
        Ok(Self { messages })
    }

    /// Total number of decoded data messages of any kind
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Number of decoded messages per message kind, keyed by kind name
    pub fn message_summary(&self) -> BTreeMap<String, usize> {
        let mut summary = BTreeMap::new();
        for message in &self.messages {
            *summary.entry(format!("{:?}", message.kind())).or_insert(0) += 1;
        }
        summary
    }

    /// Build records for every message of `kind`, in file order
    pub fn get_messages(&self, kind: MesgNum, options: DecodeOptions) -> Vec<Record> {
        self.messages
            .iter()
            .filter(|message| message.kind() == kind)
            .map(|message| message_to_record(message, options))
            .collect()
    }

    /// Shorthand for the `record` samples of the file
    pub fn records(&self, options: DecodeOptions) -> Vec<Record> {
        self.get_messages(MesgNum::Record, options)
    }
}

fn message_to_record(message: &FitDataRecord, options: DecodeOptions) -> Record {
    let mut record = Record::new();
    for field in message.fields() {
        record.push(
            column_name(field.name(), field.units(), options.include_units),
            convert_value(field.value()),
        );
    }
    record
}
