use crate::error::Result;
use crate::table::{ColumnLayout, TableModel};
use crate::types::{ResizeConfig, TableDefinition, TableSnapshot};

use super::{DragHost, HeadlessHost, PointerEvent, ResizeController, ResizeOutcome};

/// A table together with its resize controller.
///
/// This is the single owner of the model: every width write goes through
/// `&mut self`, so writes are serialized even when the host shares the table
/// behind a `RefCell`.
pub struct ColumnResizeTable<H: DragHost = HeadlessHost> {
    model: TableModel,
    controller: ResizeController<H>,
}

impl ColumnResizeTable<HeadlessHost> {
    /// Build a headless table from a parsed definition.
    ///
    /// # Errors
    /// Invalid columns or config, see [`TableModel::new`] and
    /// [`ResizeController::new`].
    pub fn from_definition(definition: TableDefinition) -> Result<Self> {
        Self::from_definition_with_host(definition, HeadlessHost)
    }

    /// Parse a JSON table definition.
    ///
    /// # Errors
    /// Malformed JSON or an invalid table.
    pub fn from_json(json: &str) -> Result<Self> {
        let definition: TableDefinition = serde_json::from_str(json)?;
        Self::from_definition(definition)
    }
}

impl<H: DragHost> ColumnResizeTable<H> {
    /// # Errors
    /// `InvalidWidth` if `config` is unusable.
    pub fn new(model: TableModel, host: H, config: ResizeConfig) -> Result<Self> {
        Ok(Self {
            model,
            controller: ResizeController::new(host, config)?,
        })
    }

    /// # Errors
    /// Invalid columns or config.
    pub fn from_definition_with_host(definition: TableDefinition, host: H) -> Result<Self> {
        let model = TableModel::new(definition.columns, definition.rows)?;
        Self::new(model, host, definition.config)
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn controller(&self) -> &ResizeController<H> {
        &self.controller
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.controller.host_mut()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn layout(&self) -> ColumnLayout {
        ColumnLayout::from_columns(self.model.columns())
    }

    pub fn snapshot(&self) -> TableSnapshot {
        self.model.snapshot()
    }

    /// # Errors
    /// See [`TableModel::set_column_width`].
    pub fn set_column_width(&mut self, index: usize, new_width: f32) -> Result<()> {
        self.model.set_column_width(index, new_width)
    }

    /// # Errors
    /// See [`ResizeController::begin_resize`].
    pub fn begin_resize(
        &mut self,
        index: usize,
        pointer_x: f32,
        column_left_edge_x: f32,
    ) -> Result<ResizeOutcome> {
        self.controller
            .begin_resize(&self.model, index, pointer_x, column_left_edge_x)
    }

    /// # Errors
    /// See [`ResizeController::update_resize`].
    pub fn update_resize(&mut self, pointer_x: f32) -> Result<ResizeOutcome> {
        self.controller.update_resize(&mut self.model, pointer_x)
    }

    pub fn end_resize(&mut self) -> ResizeOutcome {
        self.controller.end_resize()
    }

    pub fn cancel(&mut self) -> ResizeOutcome {
        self.controller.cancel()
    }

    /// # Errors
    /// See [`ResizeController::dispatch`].
    pub fn dispatch(&mut self, event: PointerEvent) -> Result<ResizeOutcome> {
        self.controller.dispatch(&mut self.model, event)
    }

    /// Like [`Self::dispatch`], but a rejected event is logged and dropped so
    /// the table stays interactive.
    pub fn handle(&mut self, event: PointerEvent) -> ResizeOutcome {
        match self.dispatch(event) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(?event, error = %e, "pointer event rejected");
                ResizeOutcome::Rejected
            }
        }
    }

    /// Feed a recorded gesture through [`Self::handle`].
    pub fn replay<I>(&mut self, events: I) -> Vec<ResizeOutcome>
    where
        I: IntoIterator<Item = PointerEvent>,
    {
        events.into_iter().map(|event| self.handle(event)).collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
    use super::*;

    const TABLE: &str = r#"{
        "columns": [
            {"name": "이름", "width": 150},
            {"name": "나이", "width": 100},
            {"name": "직업", "width": 200}
        ],
        "rows": [
            {"이름": "홍길동", "나이": 30, "직업": "개발자"},
            {"이름": "김철수", "나이": 25, "직업": "디자이너"}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let table = ColumnResizeTable::from_json(TABLE).unwrap();
        assert_eq!(table.model().column_count(), 3);
        assert_eq!(table.controller().config().min_width, 20.0);
        assert_eq!(
            table.snapshot().rows,
            vec![
                vec!["홍길동", "30", "개발자"],
                vec!["김철수", "25", "디자이너"],
            ]
        );
    }

    #[test]
    fn test_replay_swallows_rejections() {
        let mut table = ColumnResizeTable::from_json(TABLE).unwrap();
        let outcomes = table.replay([
            PointerEvent::Down {
                index: 0,
                pointer_x: 160.0,
                column_left_edge_x: 10.0,
            },
            PointerEvent::Down {
                index: 1,
                pointer_x: 260.0,
                column_left_edge_x: 160.0,
            },
            PointerEvent::Move { pointer_x: 210.0 },
            PointerEvent::Up,
            PointerEvent::Up,
        ]);
        assert_eq!(
            outcomes,
            vec![
                ResizeOutcome::Started { index: 0 },
                ResizeOutcome::Rejected,
                ResizeOutcome::Resized {
                    index: 0,
                    width: 200.0
                },
                ResizeOutcome::Ended { index: 0 },
                ResizeOutcome::Noop,
            ]
        );
        assert_eq!(table.model().widths(), vec![200.0, 100.0, 200.0]);
    }

    #[test]
    fn test_layout_tracks_widths() {
        let mut table = ColumnResizeTable::from_json(TABLE).unwrap();
        table.set_column_width(0, 50.0).unwrap();
        let layout = table.layout();
        assert_eq!(layout.left_edge(1), Some(50.0));
        assert_eq!(layout.total_width(), 350.0);
    }

    #[test]
    fn test_bad_config_in_definition() {
        let json = r#"{"columns": [{"name": "a", "width": 10}], "config": {"minWidth": 0}}"#;
        assert!(ColumnResizeTable::from_json(json).is_err());
    }
}
