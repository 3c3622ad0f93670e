use crate::core::{ActivityStore, CapacityPolicy, Directory};
use crate::utils::error::{Result, SignupError};
use std::sync::{Mutex, MutexGuard};

/// 只放在記憶體中的活動名冊，重新啟動後就會回到種子資料
#[derive(Debug)]
pub struct InMemoryActivityStore {
    directory: Mutex<Directory>,
    policy: CapacityPolicy,
}

impl InMemoryActivityStore {
    pub fn new(directory: Directory) -> Self {
        Self::with_policy(directory, CapacityPolicy::default())
    }

    pub fn with_policy(directory: Directory, policy: CapacityPolicy) -> Self {
        Self {
            directory: Mutex::new(directory),
            policy,
        }
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// 持有鎖的執行緒 panic 後留下的狀態
    #[cfg(test)]
    pub(crate) fn poisoned(directory: Directory) -> Self {
        let store = Self::new(directory);
        let outcome = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = store.directory.lock();
                    panic!("writer crashed while holding the directory lock");
                })
                .join()
        });
        debug_assert!(outcome.is_err());
        store
    }

    fn lock(&self) -> Result<MutexGuard<'_, Directory>> {
        self.directory
            .lock()
            .map_err(|e| SignupError::StateUnavailable {
                message: e.to_string(),
            })
    }
}

impl ActivityStore for InMemoryActivityStore {
    fn list(&self) -> Result<Directory> {
        Ok(self.lock()?.clone())
    }

    fn sign_up(&self, activity: &str, email: &str) -> Result<()> {
        self.lock()?.sign_up(activity, email, self.policy)
    }

    fn unregister(&self, activity: &str, email: &str) -> Result<()> {
        self.lock()?.unregister(activity, email)
    }
}
