//! Reporting sinks for the diagnostic side effects of the plant model.
//!
//! Panel resizes and slot dumps are emitted through a [`Reporter`] passed in
//! by the caller, so the simulation core never writes to the console itself.

use std::io::{self, Write};

/// A diagnostic event emitted by the model.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    /// A panel was resized; `slot` is `None` for a standalone setup.
    PanelResized { slot: Option<usize>, area_cm2: f64 },
    /// One line of a plant dump.
    SlotSummary {
        index: usize,
        mount_angle_rad: f64,
        area_cm2: f64,
    },
}

/// Receiver for diagnostic events.
pub trait Reporter {
    /// Called after a panel has been resized.
    fn panel_resized(&mut self, slot: Option<usize>, area_cm2: f64);

    /// Called once per slot while dumping a plant.
    fn slot_summary(&mut self, index: usize, mount_angle_rad: f64, area_cm2: f64);
}

/// Writes one human-readable line per event to any writer.
///
/// Reporting never fails a computation: the first write error is logged and
/// later events are dropped.
pub struct WriteReporter<W: Write> {
    writer: W,
    failed: bool,
}

impl<W: Write> WriteReporter<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if self.failed {
            return;
        }
        if let Err(e) = self.writer.write_fmt(line).and_then(|()| self.writer.write_all(b"\n")) {
            log::warn!("report sink failed, dropping further events: {e}");
            self.failed = true;
        }
    }
}

impl WriteReporter<io::Stdout> {
    /// Reporter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter for WriteReporter<W> {
    fn panel_resized(&mut self, slot: Option<usize>, area_cm2: f64) {
        match slot {
            Some(i) => self.emit(format_args!("  {i} resized panel area {area_cm2}")),
            None => self.emit(format_args!("resized panel area {area_cm2}")),
        }
    }

    fn slot_summary(&mut self, index: usize, mount_angle_rad: f64, area_cm2: f64) {
        self.emit(format_args!(
            "  {index} angle {mount_angle_rad:.4} panel area {area_cm2}"
        ));
    }
}

/// Forwards events to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn panel_resized(&mut self, slot: Option<usize>, area_cm2: f64) {
        log::info!("panel resized: slot={slot:?} area_cm2={area_cm2}");
    }

    fn slot_summary(&mut self, index: usize, mount_angle_rad: f64, area_cm2: f64) {
        log::info!("slot {index}: mount_angle_rad={mount_angle_rad} area_cm2={area_cm2}");
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn panel_resized(&mut self, _slot: Option<usize>, _area_cm2: f64) {}

    fn slot_summary(&mut self, _index: usize, _mount_angle_rad: f64, _area_cm2: f64) {}
}

/// Collects events in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub events: Vec<ReportEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for RecordingReporter {
    fn panel_resized(&mut self, slot: Option<usize>, area_cm2: f64) {
        self.events.push(ReportEvent::PanelResized { slot, area_cm2 });
    }

    fn slot_summary(&mut self, index: usize, mount_angle_rad: f64, area_cm2: f64) {
        self.events.push(ReportEvent::SlotSummary {
            index,
            mount_angle_rad,
            area_cm2,
        });
    }
}
