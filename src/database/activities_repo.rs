use tokio::sync::RwLock;

use crate::models::{Activity, ActivityMap};

/// In-memory activity store. One lock guards the whole registry; writers hold
/// it across check and mutation so concurrent signups cannot lose updates.
#[derive(Debug, Default)]
pub struct ActivitiesRepo {
    activities: RwLock<Vec<Activity>>,
}

impl ActivitiesRepo {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub async fn list_activities(&self) -> ActivityMap {
        ActivityMap(self.activities.read().await.clone())
    }

    pub async fn find_activity(&self, name: &str) -> Option<Activity> {
        self.activities
            .read()
            .await
            .iter()
            .find(|a| a.name == name)
            .cloned()
    }

    /// Runs `f` against the named activity under the write lock.
    /// Returns `None` when no activity has that name.
    pub async fn update_activity<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Activity) -> T,
    ) -> Option<T> {
        let mut activities = self.activities.write().await;
        activities.iter_mut().find(|a| a.name == name).map(f)
    }
}
