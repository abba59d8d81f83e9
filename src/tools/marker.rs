use egui::Pos2;

use crate::command::Preview;
use crate::state::EditorState;
use crate::stroke::MutableStroke;
use crate::tools::Tool;

/// Freehand marker with a fixed width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerTool {
    width: f32,
}

impl MarkerTool {
    pub fn new(width: f32) -> Self {
        Self { width }
    }
}

impl Tool for MarkerTool {
    fn name(&self) -> String {
        format!("Marker ({}px)", self.width)
    }

    fn on_pointer_down(&self, pos: Pos2) -> EditorState {
        // Start a new stroke at the cursor position
        let mut stroke = MutableStroke::new(self.width);
        stroke.add_point(pos);
        EditorState::Drawing { stroke }
    }

    fn preview(&self, pos: Pos2) -> Preview {
        // The circle radius follows the marker width
        Preview::tool(pos, self.width)
    }
}
