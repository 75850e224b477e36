//! JSON form of a ledger.
//!
//! A document is what travels between the front end and this crate: the
//! ordered group list plus the payments indexing into it. Decoding only
//! checks shapes; converting into a [`Ledger`] checks the invariants.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

use crate::{Error, Group, Ledger, Payment, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl LedgerDocument {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let document = Self::from_reader(BufReader::new(File::open(path)?))?;
        debug!(
            path = %path.display(),
            groups = document.groups.len(),
            payments = document.payments.len(),
            "ledger document loaded"
        );
        Ok(document)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        debug!(path = %path.as_ref().display(), "ledger document saved");
        Ok(())
    }
}

impl TryFrom<LedgerDocument> for Ledger {
    type Error = Error;

    fn try_from(document: LedgerDocument) -> Result<Self> {
        Ledger::from_parts(document.groups, document.payments)
    }
}

impl From<&Ledger> for LedgerDocument {
    fn from(ledger: &Ledger) -> Self {
        Self {
            groups: ledger.groups().to_vec(),
            payments: ledger.payments().to_vec(),
        }
    }
}
