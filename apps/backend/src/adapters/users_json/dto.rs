//! On-disk shape of a user record in `users.json`.

use serde::{Deserialize, Serialize};

use crate::repos::users::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub mobile: String,
    /// bcrypt hash; the key name predates the hash/plaintext distinction
    pub password: String,
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        User {
            name: r.name,
            email: r.email,
            mobile: r.mobile,
            password_hash: r.password,
        }
    }
}

impl From<User> for UserRecord {
    fn from(u: User) -> Self {
        UserRecord {
            name: u.name,
            email: u.email,
            mobile: u.mobile,
            password: u.password_hash,
        }
    }
}
