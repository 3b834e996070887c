//! 대출 상환/수익성 평가 모듈 모음.

pub mod loan;
pub mod viability;

pub use loan::*;
pub use viability::*;
