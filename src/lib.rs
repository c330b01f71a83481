pub use client::TennisClient;
pub use dashboard::{load_dashboard, DashboardView};
pub use error::{Result, TennisError};
pub use matchlist::{
    partition_by_confirmation, to_available_list, to_records, MatchFeed, MatchList,
};
pub use selection::SelectionSlot;

pub mod client;
pub mod dashboard;
pub mod error;
pub mod matchlist;
pub mod model;
pub mod selection;
pub(crate) mod tennis_api;
