//! Shared vocabulary types used by the domain and the wire protocol.

mod referral;
pub use referral::ReferralSource;
