use egui::Pos2;

use crate::command::Command;
use crate::sticker::StickerPlacement;
use crate::stroke::MutableStroke;

/// Where the pointer is in its press/drag/release lifecycle
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorState {
    #[default]
    Idle,
    /// Marker pressed; the stroke grows with every move
    Drawing { stroke: MutableStroke },
    /// Sticker pressed; the placement follows the pointer until release
    Placing { sticker: StickerPlacement },
}

impl EditorState {
    /// The operation that represents this drag at the top of the history
    pub fn head_command(&self) -> Option<Command> {
        match self {
            Self::Idle => None,
            Self::Drawing { stroke } => Some(Command::AddStroke(stroke.to_stroke())),
            Self::Placing { sticker } => Some(Command::PlaceSticker(sticker.clone())),
        }
    }

    /// Follow the pointer while the button is held. Returns false when idle.
    pub fn drag_to(&mut self, pos: Pos2) -> bool {
        match self {
            Self::Idle => false,
            Self::Drawing { stroke } => {
                stroke.add_point(pos);
                true
            }
            Self::Placing { sticker } => {
                *sticker = sticker.moved_to(pos);
                true
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing { .. } => "Drawing",
            Self::Placing { .. } => "Placing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_extends_stroke() {
        let mut stroke = MutableStroke::new(1.0);
        stroke.add_point(Pos2::new(0.0, 0.0));
        let mut state = EditorState::Drawing { stroke };

        assert!(state.drag_to(Pos2::new(1.0, 0.0)));
        let head = state.head_command().unwrap();
        assert_eq!(head.as_stroke().unwrap().points().len(), 2);
    }

    #[test]
    fn test_placing_replaces_position() {
        let mut state = EditorState::Placing {
            sticker: StickerPlacement::new(Pos2::new(0.0, 0.0), "💖"),
        };
        state.drag_to(Pos2::new(7.0, 8.0));
        assert_eq!(state.head_command(), Some(Command::sticker(Pos2::new(7.0, 8.0), "💖")));
    }

    #[test]
    fn test_idle_has_no_head() {
        let mut state = EditorState::Idle;
        assert!(!state.drag_to(Pos2::ZERO));
        assert_eq!(state.head_command(), None);
        assert!(!state.is_dragging());
    }
}
