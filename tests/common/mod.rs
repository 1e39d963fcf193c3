//! Common test utilities: a recording drag host and table fixtures.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::RefCell;
use std::rc::Rc;

use colresize::{CellValue, Column, ColumnResizeTable, DragHost, ResizeConfig, Row, TableModel};

// ============================================================================
// Recording Host
// ============================================================================

/// What the host saw, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Listeners attached and cursor set for column `index`
    Captured(usize),
    /// Capture guard dropped
    Released(usize),
}

pub type HostLog = Rc<RefCell<Vec<HostEvent>>>;

/// Drag host that records capture/release instead of touching a window.
#[derive(Default)]
pub struct RecordingHost {
    pub log: HostLog,
}

pub struct RecordingCapture {
    index: usize,
    log: HostLog,
}

impl Drop for RecordingCapture {
    fn drop(&mut self) {
        self.log.borrow_mut().push(HostEvent::Released(self.index));
    }
}

impl DragHost for RecordingHost {
    type Capture = RecordingCapture;

    fn capture(&mut self, index: usize) -> Self::Capture {
        self.log.borrow_mut().push(HostEvent::Captured(index));
        RecordingCapture {
            index,
            log: Rc::clone(&self.log),
        }
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("이름", 150.0),
        Column::new("나이", 100.0),
        Column::new("직업", 200.0),
    ]
}

pub fn sample_rows() -> Vec<Row> {
    vec![
        [
            ("이름", CellValue::from("홍길동")),
            ("나이", CellValue::from(30_i64)),
            ("직업", CellValue::from("개발자")),
        ]
        .into_iter()
        .collect(),
        [
            ("이름", CellValue::from("김철수")),
            ("나이", CellValue::from(25_i64)),
            ("직업", CellValue::from("디자이너")),
        ]
        .into_iter()
        .collect(),
    ]
}

pub fn sample_model() -> TableModel {
    TableModel::new(sample_columns(), sample_rows()).expect("sample table is valid")
}

/// Sample table wired to a recording host; returns the host's log too.
pub fn recorded_table() -> (ColumnResizeTable<RecordingHost>, HostLog) {
    let host = RecordingHost::default();
    let log = Rc::clone(&host.log);
    let table = ColumnResizeTable::new(sample_model(), host, ResizeConfig::default())
        .expect("default config is valid");
    (table, log)
}

pub fn events(log: &HostLog) -> Vec<HostEvent> {
    log.borrow().clone()
}
