//! Change listeners for the site configuration handle.
#![allow(clippy::redundant_pub_crate)]

use std::fmt;

use super::state::SiteConfigurationState;

type Listener = Box<dyn Fn(&SiteConfigurationState)>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&self, state: &SiteConfigurationState) {
        for (_, listener) in &self.entries {
            listener(state);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_removal_is_exact() {
        let mut listeners = Listeners::default();
        let first = listeners.add(Box::new(|_| {}));
        let second = listeners.add(Box::new(|_| {}));
        assert_ne!(first, second);
        assert!(listeners.remove(first));
        assert_eq!(listeners.len(), 1);
        assert!(!listeners.remove(first));
    }

    #[test]
    fn debug_reports_count_without_closures() {
        let mut listeners = Listeners::default();
        listeners.add(Box::new(|_| {}));
        let rendered = format!("{listeners:?}");
        assert!(rendered.contains("count: 1"));
        assert!(rendered.ends_with(".. }"));
    }
}
