use crate::utils::error::{Result, SignupError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        for email in participants {
            self.add_participant(email);
        }
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// 加入參加者，已存在則回傳 false
    pub fn add_participant(&mut self, email: &str) -> bool {
        if self.has_participant(email) {
            return false;
        }
        self.participants.push(email.to_string());
        true
    }

    /// 移除參加者，不存在則回傳 false
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }
}

/// `max_participants` 只是描述，還是報名時要檢查
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    #[default]
    Descriptive,
    Enforced,
}

impl CapacityPolicy {
    pub fn from_flag(enforce: bool) -> Self {
        if enforce {
            CapacityPolicy::Enforced
        } else {
            CapacityPolicy::Descriptive
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    activities: BTreeMap<String, Activity>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, activity: Activity) {
        self.activities.insert(name.to_string(), activity);
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.activities.iter().map(|(name, a)| (name.as_str(), a))
    }

    pub fn sign_up(&mut self, activity: &str, email: &str, policy: CapacityPolicy) -> Result<()> {
        let entry = self.activity_mut(activity)?;

        if entry.has_participant(email) {
            return Err(SignupError::AlreadySignedUp {
                email: email.to_string(),
                activity: activity.to_string(),
            });
        }

        if policy == CapacityPolicy::Enforced && entry.is_full() {
            return Err(SignupError::ActivityFull {
                activity: activity.to_string(),
                max_participants: entry.max_participants,
            });
        }

        entry.add_participant(email);
        Ok(())
    }

    pub fn unregister(&mut self, activity: &str, email: &str) -> Result<()> {
        let entry = self.activity_mut(activity)?;

        if !entry.remove_participant(email) {
            return Err(SignupError::NotSignedUp {
                email: email.to_string(),
                activity: activity.to_string(),
            });
        }
        Ok(())
    }

    fn activity_mut(&mut self, name: &str) -> Result<&mut Activity> {
        self.activities
            .get_mut(name)
            .ok_or_else(|| SignupError::ActivityNotFound {
                activity: name.to_string(),
            })
    }
}

impl FromIterator<(String, Activity)> for Directory {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        Self {
            activities: iter.into_iter().collect(),
        }
    }
}

/// 報名或取消成功後回給呼叫端的內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn signed_up(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity),
        }
    }

    pub fn unregistered(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Unregistered {} from {}", email, activity),
        }
    }
}
