use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::domain::activity::Activity;

pub type Activities = IndexMap<String, Activity>;

/// In-memory activity registry, shared by every worker through `web::Data`.
///
/// Activities are fixed after construction; only rosters change. The write lock
/// is held for the whole closure passed to [`ActivityStore::modify`], so a
/// check-then-mutate step is atomic.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: RwLock<Activities>,
}

impl ActivityStore {
    pub fn new(activities: Activities) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }

    pub fn snapshot(&self) -> Activities {
        self.activities.read().clone()
    }

    pub fn find(&self, name: &str) -> Option<Activity> {
        self.activities.read().get(name).cloned()
    }

    /// Runs `f` on the named activity under the write lock.
    /// `None` if there is no such activity.
    pub fn modify<R>(&self, name: &str, f: impl FnOnce(&mut Activity) -> R) -> Option<R> {
        let mut activities = self.activities.write();
        activities.get_mut(name).map(f)
    }
}

impl From<Activities> for ActivityStore {
    fn from(value: Activities) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn store() -> ActivityStore {
        let mut activities = Activities::new();
        activities.insert("Chess Club".into(), Activity::new("Chess", "Fridays", 12));
        activities.insert("Art Club".into(), Activity::new("Art", "Thursdays", 15));
        ActivityStore::new(activities)
    }

    #[test]
    fn snapshot_keeps_insertion_order() {
        let names: Vec<_> = store().snapshot().into_keys().collect();
        assert_eq!(names, ["Chess Club", "Art Club"]);
    }

    #[test]
    fn modify_unknown_is_none() {
        let store = store();
        assert!(store.modify("Knitting", |_| ()).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn snapshot_is_detached() {
        let store = store();
        let before = store.snapshot();
        store.modify("Chess Club", |a| a.enroll("x@mergington.edu".into()));
        assert!(before["Chess Club"].participants().is_empty());
        assert_eq!(store.find("Chess Club").unwrap().participants().len(), 1);
    }

    #[test]
    fn concurrent_enrolls_admit_one() {
        let store = store();
        let admitted = AtomicUsize::new(0);
        std::thread::scope(|s| {
            for _ in 0..16 {
                s.spawn(|| {
                    let ok = store
                        .modify("Chess Club", |a| a.enroll("race@mergington.edu".into()))
                        .unwrap();
                    if ok {
                        admitted.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });
        assert_eq!(admitted.load(Ordering::SeqCst), 1);
        assert_eq!(store.find("Chess Club").unwrap().participants().len(), 1);
    }
}
