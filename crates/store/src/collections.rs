//! Collection name constants.

pub const APPS: &str = "apps";
pub const CONCEPTS: &str = "concepts";
pub const LECTURES: &str = "lectures";
pub const AFFILIATE_ADS: &str = "affiliate_ads";
pub const CONTACT_SUBMISSIONS: &str = "contact_submissions";
