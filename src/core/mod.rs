pub mod api;
pub mod store;
pub mod view;

pub use crate::domain::model::{AnalyticsData, EdgeKey, GraphData, SocialState};
pub use crate::domain::ports::{ConfigProvider, SocialApi};
pub use crate::utils::error::Result;
