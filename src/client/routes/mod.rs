pub mod customers;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod register;

pub use customers::{CustomerCreate, CustomerDetail, CustomerList};
pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
