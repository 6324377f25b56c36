// Domain layer - sensor catalogue, thresholds and snapshot types
pub mod channel;
pub mod color;
pub mod sensor;
pub mod snapshot;
pub mod threshold;
