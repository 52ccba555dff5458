// Team DNA engine
// Implements: MBTI vector aggregation, hire recommendation, readiness scoring,
// role balance and roadmap. Everything here is pure; handlers only validate
// input and serialize the result.

pub mod engine;
pub mod handlers;
pub mod readiness;
pub mod recommendation;
pub mod roadmap;
pub mod role_balance;
pub mod validation;
pub mod vector;
