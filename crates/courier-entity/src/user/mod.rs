//! User-side endpoint-token entities.

pub mod profile;
pub mod token;

pub use profile::UserProfile;
pub use token::DeviceToken;
