use super::FrameId;

/// Focus-ordered list of free windows and tab groups. The last entry is
/// topmost; each entry renders at `base + index`.
#[derive(Debug, Clone)]
pub struct StackOrder {
    order: Vec<FrameId>,
    base: u32,
}

impl StackOrder {
    pub fn new(base: u32) -> Self {
        Self {
            order: Vec::new(),
            base,
        }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &FrameId) -> bool {
        self.order.contains(id)
    }

    /// Append at the top if not already present.
    pub fn push(&mut self, id: FrameId) {
        if !self.contains(&id) {
            self.order.push(id);
        }
    }

    pub fn remove(&mut self, id: &FrameId) -> bool {
        let before = self.order.len();
        self.order.retain(|entry| entry != id);
        self.order.len() != before
    }

    /// Move `id` to the top. Unknown ids are ignored.
    pub fn bring_to_front(&mut self, id: &FrameId) -> bool {
        let Some(pos) = self.order.iter().position(|entry| entry == id) else {
            return false;
        };
        let item = self.order.remove(pos);
        self.order.push(item);
        true
    }

    pub fn topmost(&self) -> Option<&FrameId> {
        self.order.last()
    }

    pub fn depth(&self, id: &FrameId) -> Option<u32> {
        self.order
            .iter()
            .position(|entry| entry == id)
            .map(|idx| self.base + idx as u32)
    }

    /// Bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &FrameId> {
        self.order.iter()
    }

    pub fn to_vec(&self) -> Vec<FrameId> {
        self.order.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::GroupId;

    #[test]
    fn bring_to_front_moves_to_tail_and_reassigns_depth() {
        let mut stack = StackOrder::new(1000);
        stack.push(FrameId::window("a"));
        stack.push(FrameId::window("b"));
        stack.push(FrameId::Group(GroupId::new(1)));
        assert_eq!(stack.depth(&FrameId::window("a")), Some(1000));
        assert!(stack.bring_to_front(&FrameId::window("a")));
        assert_eq!(stack.topmost(), Some(&FrameId::window("a")));
        assert_eq!(stack.depth(&FrameId::window("a")), Some(1002));
        assert_eq!(stack.depth(&FrameId::window("b")), Some(1000));
    }

    #[test]
    fn push_is_idempotent_and_remove_reports() {
        let mut stack = StackOrder::new(0);
        stack.push(FrameId::window("a"));
        stack.push(FrameId::window("a"));
        assert_eq!(stack.len(), 1);
        assert!(stack.remove(&FrameId::window("a")));
        assert!(!stack.remove(&FrameId::window("a")));
        assert!(!stack.bring_to_front(&FrameId::window("a")));
        assert!(stack.is_empty());
    }
}
