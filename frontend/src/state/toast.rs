use chrono::{DateTime, Duration, Utc};

/// How long a toast stays up when nobody dismisses it.
pub const TOAST_LIFETIME_MS: i64 = 4_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Success,
    Error,
}

impl ToastVariant {
    pub fn class(self) -> &'static str {
        match self {
            ToastVariant::Default => "toast-default",
            ToastVariant::Success => "toast-success",
            ToastVariant::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastOptions {
    pub message: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl ToastOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), ..Default::default() }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastRecord {
    pub id: ToastId,
    pub message: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
    pub created_at: DateTime<Utc>,
}

impl ToastRecord {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::milliseconds(TOAST_LIFETIME_MS)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    next_id: u64,
    records: Vec<ToastRecord>,
}

impl ToastQueue {
    pub fn push(&mut self, options: ToastOptions, now: DateTime<Utc>) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.records.push(ToastRecord {
            id,
            message: options.message,
            description: options.description,
            variant: options.variant,
            created_at: now,
        });
        id
    }

    /// Removes the toast; returns false when it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    pub fn expire(&mut self, now: DateTime<Utc>) -> Vec<ToastId> {
        let (expired, live): (Vec<_>, Vec<_>) =
            self.records.drain(..).partition(|record| record.expires_at() <= now);
        self.records = live;
        expired.into_iter().map(|record| record.id).collect()
    }

    pub fn records(&self) -> &[ToastRecord] {
        &self.records
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000 + ms).unwrap()
    }

    #[test]
    fn push_appends_with_unique_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastOptions::new("first"), at(0));
        let b = queue.push(ToastOptions::new("second").variant(ToastVariant::Success), at(0));
        assert_ne!(a, b);
        let messages: Vec<_> = queue.records().iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
        assert_eq!(queue.records()[1].variant, ToastVariant::Success);
    }

    #[test]
    fn dismiss_before_lifetime_removes_and_is_idempotent() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastOptions::new("saved"), at(0));
        assert!(queue.dismiss(id));
        assert!(!queue.contains(id));
        assert!(!queue.dismiss(id));
        assert!(!queue.dismiss(ToastId(999)));
    }

    #[test]
    fn expires_exactly_at_lifetime() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastOptions::new("hello"), at(0));
        assert!(queue.expire(at(TOAST_LIFETIME_MS - 1)).is_empty());
        assert!(queue.contains(id));
        assert_eq!(queue.expire(at(TOAST_LIFETIME_MS)), vec![id]);
        assert!(queue.is_empty());
    }

    #[test]
    fn toasts_expire_independently() {
        let mut queue = ToastQueue::default();
        let early = queue.push(ToastOptions::new("early"), at(0));
        let middle = queue.push(ToastOptions::new("middle"), at(1_000));
        let late = queue.push(ToastOptions::new("late"), at(2_000));

        queue.dismiss(middle);
        assert_eq!(queue.expire(at(4_600)), vec![early]);
        assert_eq!(queue.len(), 1);
        assert!(queue.contains(late));
        assert_eq!(queue.expire(at(6_500)), vec![late]);
    }
}
