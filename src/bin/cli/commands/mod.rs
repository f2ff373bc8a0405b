pub mod add;
pub mod ai;
pub mod connect;
pub mod delete;
pub mod export;
pub mod list;
pub mod mv;
pub mod quiz;
pub mod quiz_history;
pub mod settings;
pub mod show;
pub mod stats;
