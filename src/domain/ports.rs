use crate::domain::model::Directory;
use crate::utils::error::Result;

/// 活動名冊的存放位置。每個操作都必須是一次完整的「檢查後修改」。
pub trait ActivityStore: Send + Sync {
    fn list(&self) -> Result<Directory>;
    fn sign_up(&self, activity: &str, email: &str) -> Result<()>;
    fn unregister(&self, activity: &str, email: &str) -> Result<()>;
}
