pub mod auth_token;
pub mod current_user;
pub mod validated_json;

pub use auth_token::BearerToken;
pub use current_user::CurrentUser;
pub use validated_json::ValidatedJson;
