pub mod advisory;
pub mod appliance;
pub mod consumption;
pub mod policy;
pub mod report;
pub mod solar;
pub mod units;
