//! 태양광 사이징/비용 계산 모듈 모음.

pub mod costing;
pub mod sizing;

pub use costing::*;
pub use sizing::*;
