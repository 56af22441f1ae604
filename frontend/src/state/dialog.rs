pub const LOCKED_OVERFLOW: &str = "hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockId(u64);

#[derive(Debug, Default)]
pub struct ScrollLockStack {
    next_id: u64,
    locks: Vec<(LockId, String)>,
}

impl ScrollLockStack {
    pub fn acquire(&mut self, current_overflow: &str) -> LockId {
        self.next_id += 1;
        let id = LockId(self.next_id);
        self.locks.push((id, current_overflow.to_string()));
        id
    }

    /// Returns the value to write back to the body, if any.
    pub fn release(&mut self, id: LockId) -> Option<String> {
        let position = self.locks.iter().position(|(lock, _)| *lock == id)?;
        let (_, saved) = self.locks.remove(position);
        if position == self.locks.len() {
            return Some(saved);
        }
        // a lock above is still held; it inherits our saved value
        self.locks[position].1 = saved;
        None
    }

    pub fn is_topmost(&self, id: LockId) -> bool {
        self.locks.last().map(|(top, _)| *top == id).unwrap_or(false)
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        !self.locks.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Explicit,
    Escape,
    Backdrop,
}

pub fn accepts_close(reason: CloseReason, close_on_backdrop: bool) -> bool {
    match reason {
        CloseReason::Backdrop => close_on_backdrop,
        CloseReason::Explicit | CloseReason::Escape => true,
    }
}

pub fn escape_closes(key: &str, default_prevented: bool, topmost: bool) -> bool {
    key == "Escape" && !default_prevented && topmost
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Body {
        overflow: String,
        stack: ScrollLockStack,
    }

    impl Body {
        fn new(overflow: &str) -> Self {
            Self { overflow: overflow.to_string(), stack: ScrollLockStack::default() }
        }

        fn open(&mut self) -> LockId {
            let id = self.stack.acquire(&self.overflow);
            self.overflow = LOCKED_OVERFLOW.to_string();
            id
        }

        fn close(&mut self, id: LockId) {
            if let Some(restore) = self.stack.release(id) {
                self.overflow = restore;
            }
        }
    }

    #[test]
    fn single_dialog_restores_previous_policy() {
        let mut body = Body::new("scroll");
        let lock = body.open();
        assert_eq!(body.overflow, LOCKED_OVERFLOW);
        assert!(body.stack.is_locked());
        body.close(lock);
        assert_eq!(body.overflow, "scroll");
        assert!(!body.stack.is_locked());
    }

    #[test]
    fn nested_dialogs_closed_in_order() {
        let mut body = Body::new("");
        let outer = body.open();
        let inner = body.open();
        body.close(inner);
        assert_eq!(body.overflow, LOCKED_OVERFLOW);
        body.close(outer);
        assert_eq!(body.overflow, "");
    }

    #[test]
    fn nested_dialogs_closed_out_of_order() {
        let mut body = Body::new("auto");
        let outer = body.open();
        let inner = body.open();
        body.close(outer);
        assert_eq!(body.overflow, LOCKED_OVERFLOW);
        body.close(inner);
        assert_eq!(body.overflow, "auto");
    }

    #[test]
    fn double_release_is_ignored() {
        let mut body = Body::new("visible");
        let lock = body.open();
        body.close(lock);
        body.overflow = "clip".to_string();
        body.close(lock);
        assert_eq!(body.overflow, "clip");
    }

    #[test]
    fn only_the_inner_dialog_is_topmost() {
        let mut body = Body::new("");
        let outer = body.open();
        let inner = body.open();
        assert!(body.stack.is_topmost(inner));
        assert!(!body.stack.is_topmost(outer));
        body.close(inner);
        assert!(body.stack.is_topmost(outer));
        body.close(outer);
        assert!(!body.stack.is_topmost(outer));
    }

    #[test]
    fn escape_reaches_one_dialog_at_a_time() {
        let mut body = Body::new("");
        let outer = body.open();
        let inner = body.open();
        let closes = |id| escape_closes("Escape", false, body.stack.is_topmost(id));
        assert!(closes(inner));
        assert!(!closes(outer));
    }

    #[test]
    fn escape_already_handled_by_a_select_is_ignored() {
        assert!(!escape_closes("Escape", true, true));
        assert!(!escape_closes("Enter", false, true));
        assert!(escape_closes("Escape", false, true));
    }

    #[test]
    fn backdrop_close_is_configurable() {
        assert!(accepts_close(CloseReason::Backdrop, true));
        assert!(!accepts_close(CloseReason::Backdrop, false));
        assert!(accepts_close(CloseReason::Escape, false));
        assert!(accepts_close(CloseReason::Explicit, false));
    }
}
