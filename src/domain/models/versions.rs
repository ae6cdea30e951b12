//! Published Atlas contract-suite versions

pub const V1_0_0: &str = "1.0.0";
pub const V1_0_1: &str = "1.0.1";
pub const V1_1_0: &str = "1.1.0";

/// Newest published contract-suite version
pub const LATEST: &str = V1_1_0;
