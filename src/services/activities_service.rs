use thiserror::Error;

use crate::database::{seed, ActivitiesRepo};
use crate::models::{Activity, ActivityMap};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up")]
    NotSignedUp,

    #[error("Activity is full")]
    ActivityFull,
}

/// Signup rules on top of the activity store.
#[derive(Debug)]
pub struct ActivitiesService {
    repo: ActivitiesRepo,
    enforce_capacity: bool,
}

impl ActivitiesService {
    pub fn new(repo: ActivitiesRepo, enforce_capacity: bool) -> Self {
        Self {
            repo,
            enforce_capacity,
        }
    }

    pub fn seeded(enforce_capacity: bool) -> Self {
        Self::new(ActivitiesRepo::new(seed::seed_activities()), enforce_capacity)
    }

    pub async fn list_activities(&self) -> ActivityMap {
        self.repo.list_activities().await
    }

    pub async fn get_activity(&self, activity_name: &str) -> Result<Activity, RegistryError> {
        self.repo
            .find_activity(activity_name)
            .await
            .ok_or(RegistryError::ActivityNotFound)
    }

    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let enforce_capacity = self.enforce_capacity;
        self.repo
            .update_activity(activity_name, |activity| {
                if activity.is_signed_up(email) {
                    return Err(RegistryError::AlreadySignedUp);
                }
                if enforce_capacity && activity.is_full() {
                    return Err(RegistryError::ActivityFull);
                }
                activity.participants.push(email.to_string());
                Ok(format!("Signed up {} for {}", email, activity_name))
            })
            .await
            .unwrap_or(Err(RegistryError::ActivityNotFound))
    }

    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<String, RegistryError> {
        self.repo
            .update_activity(activity_name, |activity| {
                let Some(pos) = activity.participants.iter().position(|p| p == email) else {
                    return Err(RegistryError::NotSignedUp);
                };
                activity.participants.remove(pos);
                Ok(format!("Unregistered {} from {}", email, activity_name))
            })
            .await
            .unwrap_or(Err(RegistryError::ActivityNotFound))
    }
}
