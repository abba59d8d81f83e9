use super::Command;

/// Manages the history of committed render operations for undo/redo
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandHistory {
    /// Operations currently displayed, oldest first
    undo_stack: Vec<Command>,
    /// Operations that have been undone, most recently undone last
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a new operation. Anything that could have been redone is dropped.
    pub fn commit(&mut self, command: Command) {
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Undo the last displayed operation. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(command) => {
                self.redo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone operation. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(command) => {
                self.undo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Replace the in-progress head operation without growing the history
    pub fn replace_top(&mut self, command: Command) {
        self.undo_stack.pop();
        self.undo_stack.push(command);
    }

    /// Drop the head operation for good; it does not become redoable
    pub fn discard_top(&mut self) -> Option<Command> {
        self.undo_stack.pop()
    }

    /// Empty the displayed operations, leaving the redo stack alone
    pub fn clear_all(&mut self) {
        self.undo_stack.clear();
    }

    pub fn top(&self) -> Option<&Command> {
        self.undo_stack.last()
    }

    /// Operations to replay, in commit order
    pub fn done(&self) -> &[Command] {
        &self.undo_stack
    }

    /// Operations available for redo; the next one to redo is last
    pub fn undone(&self) -> &[Command] {
        &self.redo_stack
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    fn sticker(x: f32) -> Command {
        Command::sticker(Pos2::new(x, x), "⭐")
    }

    #[test]
    fn test_replace_top_keeps_length() {
        let mut history = CommandHistory::new();
        history.commit(sticker(1.0));
        history.commit(sticker(2.0));
        history.replace_top(sticker(3.0));

        assert_eq!(history.len(), 2);
        assert_eq!(history.top(), Some(&sticker(3.0)));
        assert_eq!(history.done()[0], sticker(1.0));
    }

    #[test]
    fn test_replace_top_on_empty_pushes() {
        let mut history = CommandHistory::new();
        history.replace_top(sticker(1.0));
        assert_eq!(history.done(), &[sticker(1.0)]);
    }

    #[test]
    fn test_replace_top_does_not_touch_redo() {
        let mut history = CommandHistory::new();
        history.commit(sticker(1.0));
        history.commit(sticker(2.0));
        history.undo();
        history.replace_top(sticker(3.0));
        assert_eq!(history.undone(), &[sticker(2.0)]);
    }

    #[test]
    fn test_discard_top_is_not_redoable() {
        let mut history = CommandHistory::new();
        history.commit(sticker(1.0));
        assert_eq!(history.discard_top(), Some(sticker(1.0)));
        assert!(history.is_empty());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_clear_all_keeps_redo_stack() {
        let mut history = CommandHistory::new();
        history.commit(sticker(1.0));
        history.commit(sticker(2.0));
        history.undo();
        history.clear_all();

        assert!(history.is_empty());
        assert_eq!(history.undone(), &[sticker(2.0)]);
    }
}
