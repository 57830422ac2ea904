pub mod appliance;
pub mod operation;

pub use appliance::{Appliance, FeatureInput, Refrigerator, Television};
pub use operation::{operate_appliances, OperationError};
