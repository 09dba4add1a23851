use chrono::{DateTime, Utc};
use lk_core::domain::entities::account::Account;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of signup and login requests: `{"user": {"email", "password"}}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(nested)]
    pub user: UserCredentials,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserCredentials {
    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password can't be blank"))]
    pub password: String,
}

/// Public view of an account; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountView {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            created_at: account.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub message: String,
    pub user: AccountView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDataResponse {
    pub message: String,
    pub user: AccountView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> CredentialsRequest {
        CredentialsRequest {
            user: UserCredentials {
                email: email.to_string(),
                password: password.to_string(),
            },
        }
    }

    #[test]
    fn test_valid_credentials() {
        assert!(request("a@x.com", "pw123456").validate().is_ok());
    }

    #[test]
    fn test_invalid_credentials() {
        assert!(request("not-an-email", "pw123456").validate().is_err());
        assert!(request("a@x.com", "").validate().is_err());
    }

    #[test]
    fn test_account_view_omits_hash() {
        let account = Account::new("a@x.com", "$2b$04$secret-hash");
        let json = serde_json::to_string(&AccountView::from(&account)).unwrap();

        assert!(json.contains("a@x.com"));
        assert!(!json.contains("secret-hash"));
    }
}
