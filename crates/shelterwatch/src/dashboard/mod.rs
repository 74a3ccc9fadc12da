pub mod domain;
pub mod filter;
pub mod geodesy;
pub mod report;
pub mod risk;
pub mod session;
pub mod source;

pub use session::DashboardSession;
