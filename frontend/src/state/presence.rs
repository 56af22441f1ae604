/// Mount lifecycle of collapsible content: it stays in the document while
/// open or while its collapse transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Closed,
    Entering,
    Open,
    Exiting,
}

impl Presence {
    pub fn initial(open: bool) -> Self {
        if open { Presence::Open } else { Presence::Closed }
    }

    pub fn is_mounted(self) -> bool {
        !matches!(self, Presence::Closed)
    }

    pub fn sync(self, open: bool) -> Self {
        match (self, open) {
            (Presence::Closed | Presence::Exiting, true) => Presence::Entering,
            (Presence::Entering | Presence::Open, false) => Presence::Exiting,
            (phase, _) => phase,
        }
    }

    pub fn settle(self) -> Self {
        match self {
            Presence::Entering => Presence::Open,
            Presence::Exiting => Presence::Closed,
            phase => phase,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Presence::Closed => "closed",
            Presence::Entering => "entering",
            Presence::Open => "open",
            Presence::Exiting => "exiting",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_unmounts_only_after_transition() {
        let phase = Presence::initial(true).sync(false);
        assert_eq!(phase, Presence::Exiting);
        assert!(phase.is_mounted());
        assert!(!phase.settle().is_mounted());
    }

    #[test]
    fn expand_mounts_immediately() {
        let phase = Presence::initial(false).sync(true);
        assert!(phase.is_mounted());
        assert_eq!(phase.settle(), Presence::Open);
    }

    #[test]
    fn reopening_during_collapse_enters_again() {
        assert_eq!(Presence::Exiting.sync(true), Presence::Entering);
        assert_eq!(Presence::Open.sync(true), Presence::Open);
        assert_eq!(Presence::Closed.sync(false), Presence::Closed);
    }
}
