use super::types::BlockPath;

/// An open list ancestor and the indentation it was opened at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFrame {
    /// Path of the list item, or `None` for a todo context that cannot own
    /// children.
    pub owner: Option<BlockPath>,
    pub indent: usize,
}

/// The chain of currently open list ancestors, innermost last.
#[derive(Debug, Default, Clone)]
pub struct ListStack(Vec<ListFrame>);

impl ListStack {
    /// Closes every open list.
    pub fn reset(&mut self) {
        self.0.clear();
    }

    /// Replaces the stack with a single todo context.
    pub fn enter_todo(&mut self) {
        self.0.clear();
        self.0.push(ListFrame {
            owner: None,
            indent: 0,
        });
    }

    /// Pops every frame opened at `indent` or deeper, then returns the path
    /// of the item a new entry at `indent` should nest under.
    ///
    /// Equal indentation makes a sibling, not a child.
    pub fn parent_for(&mut self, indent: usize) -> Option<&BlockPath> {
        while self.0.last().is_some_and(|f| f.indent >= indent) {
            self.0.pop();
        }
        self.innermost()
    }

    pub fn push(&mut self, owner: BlockPath, indent: usize) {
        self.0.push(ListFrame {
            owner: Some(owner),
            indent,
        });
    }

    /// Path of the innermost open list item, if it can own children.
    pub fn innermost(&self) -> Option<&BlockPath> {
        self.0.last().and_then(|f| f.owner.as_ref())
    }
}
