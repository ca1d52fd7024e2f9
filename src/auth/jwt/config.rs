// 24 hours
pub const JWT_EXP: i64 = 86400;
