pub mod staff;

pub use staff::MockStaffDirectory;
pub use staff::DEFAULT_PASSWORD;
