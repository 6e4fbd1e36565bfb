pub mod affiliate_ads;
pub mod apps;
pub mod auth;
pub mod concepts;
pub mod contact;
pub mod lectures;
