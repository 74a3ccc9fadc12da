mod rankings;
pub mod views;

pub use rankings::{region_ranking, top_by_risk, TOP_RISK_LIMIT};
