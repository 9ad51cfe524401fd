//! Representations exchanged with the Admin API.

pub mod credential;
pub mod realm;
pub mod user;

pub use credential::{CredentialRepresentation, PasswordReset, OTP_TYPE, PASSWORD_TYPE};
pub use realm::{
    ComponentRepresentation, RealmRepresentation, UserProfileAttribute, UserProfileConfig,
    UserProfileGroup, USER_STORAGE_PROVIDER_TYPE,
};
pub use user::{BruteForceStatus, UserAccess, UserRepresentation};
