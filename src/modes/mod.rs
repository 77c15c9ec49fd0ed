pub mod agent;
pub mod human;

pub use agent::AgentMode;
pub use human::HumanMode;
