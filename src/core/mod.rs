pub mod printer;

pub use crate::domain::model::Announcement;
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
