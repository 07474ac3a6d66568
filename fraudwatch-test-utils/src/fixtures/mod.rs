//! Database fixture helpers, reached through the accessors on
//! [`TestSetup`](crate::TestSetup).

pub mod complaint;
pub mod customer;
pub mod driver;

pub use complaint::ComplaintFixtures;
pub use customer::CustomerFixtures;
pub use driver::DriverFixtures;
