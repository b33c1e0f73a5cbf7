//! CSV telemetry sink with write-then-stop semantics.
//!
//! Every record is flushed as soon as it is written so a crashed run still
//! leaves a usable log. The record that carries the invalidation is the
//! last one: writing it closes the sink, and later calls are ignored the
//! same way the closed-file check in the original logger ignored them.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use phantom_core::state::TickSnapshot;
use phantom_core::telemetry::{csv_header_line, csv_record_line};

pub struct CsvSink<W: Write> {
    writer: Option<W>,
}

impl CsvSink<BufWriter<File>> {
    /// Create the log file and write the header row.
    pub fn create(path: &str) -> io::Result<Self> {
        Self::from_writer(BufWriter::new(File::create(path)?))
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap any writer, emitting the header row immediately.
    pub fn from_writer(mut writer: W) -> io::Result<Self> {
        writeln!(writer, "{}", csv_header_line())?;
        writer.flush()?;
        Ok(Self {
            writer: Some(writer),
        })
    }

    /// Write one record and flush it. An invalid snapshot is recorded and
    /// then the sink closes; anything after that is a no-op.
    pub fn record(&mut self, snapshot: &TickSnapshot) -> io::Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };

        writeln!(writer, "{}", csv_record_line(snapshot))?;
        writer.flush()?;

        if !snapshot.is_valid() {
            self.writer = None;
        }
        Ok(())
    }

    pub fn closed(&self) -> bool {
        self.writer.is_none()
    }
}
