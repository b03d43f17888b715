//! User account records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::MarketError;
use crate::persistence::{Entity, NEW_ID};

/// Marketplace role. Closed set: anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Role {
    DataProvider,
    DataConsumer,
    Admin,
    Moderator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::DataProvider => "DataProvider",
            Role::DataConsumer => "DataConsumer",
            Role::Admin => "Admin",
            Role::Moderator => "Moderator",
        }
    }

    /// Status a freshly registered account gets. `None` keeps whatever the
    /// caller supplied.
    pub fn initial_status(&self) -> Option<UserStatus> {
        match self {
            Role::DataProvider => Some(UserStatus::Pending),
            Role::DataConsumer => Some(UserStatus::Active),
            Role::Admin | Role::Moderator => None,
        }
    }
}

impl FromStr for Role {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Role::DataProvider,
            Role::DataConsumer,
            Role::Admin,
            Role::Moderator,
        ]
        .into_iter()
        .find(|role| role.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| MarketError::UnknownRole(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum UserStatus {
    Pending,
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Pending => "Pending",
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Suspended => "Suspended",
        }
    }
}

impl FromStr for UserStatus {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            UserStatus::Pending,
            UserStatus::Active,
            UserStatus::Inactive,
            UserStatus::Suspended,
        ]
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| MarketError::UnknownStatus(s.to_string()))
    }
}

/// User account
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = "Ann")]
    pub full_name: String,
    #[schema(example = "ann@x.com")]
    pub email: String,
    /// Stored form of the password (see `PasswordScheme`). Never serialized.
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub status: Option<UserStatus>,
}

impl User {
    /// Unsaved user with no status
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            user_id: NEW_ID,
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
            role,
            created_at: Utc::now(),
            status: None,
        }
    }
}

impl Entity for User {
    fn id(&self) -> i64 {
        self.user_id
    }

    fn assign_id(&mut self, id: i64) {
        self.user_id = id;
    }
}

/// User Registration Request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[schema(example = "Ann")]
    pub full_name: String,
    #[schema(example = "ann@x.com")]
    pub email: String,
    #[schema(example = "pw1")]
    pub password: String,
    /// DataProvider, DataConsumer, Admin or Moderator (any letter case)
    #[schema(example = "DataConsumer")]
    pub role: String,
    /// Only read for roles without a registration default (Admin, Moderator);
    /// ignored otherwise, even when unrecognised
    #[serde(default)]
    pub status: Option<String>,
}

impl TryFrom<RegisterRequest> for User {
    type Error = MarketError;

    fn try_from(req: RegisterRequest) -> Result<Self, Self::Error> {
        let role = req.role.parse::<Role>()?;
        // Roles with a registration default overwrite whatever was sent
        let status = match role.initial_status() {
            Some(_) => None,
            None => req
                .status
                .as_deref()
                .map(str::parse::<UserStatus>)
                .transpose()?,
        };
        let mut user = User::new(req.full_name, req.email, req.password, role);
        user.status = status;
        Ok(user)
    }
}

/// User Login Request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "ann@x.com")]
    pub email: String,
    #[schema(example = "pw1")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_ignores_case() {
        assert_eq!("DataProvider".parse::<Role>().unwrap(), Role::DataProvider);
        assert_eq!("dataprovider".parse::<Role>().unwrap(), Role::DataProvider);
        assert_eq!("DATACONSUMER".parse::<Role>().unwrap(), Role::DataConsumer);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn test_unknown_role_is_an_error() {
        let err = "Guest".parse::<Role>().unwrap_err();
        assert!(matches!(err, MarketError::UnknownRole(ref r) if r == "Guest"));
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_initial_status_by_role() {
        assert_eq!(Role::DataProvider.initial_status(), Some(UserStatus::Pending));
        assert_eq!(Role::DataConsumer.initial_status(), Some(UserStatus::Active));
        assert_eq!(Role::Admin.initial_status(), None);
        assert_eq!(Role::Moderator.initial_status(), None);
    }

    #[test]
    fn test_user_json_hides_password() {
        let user = User::new("Ann", "ann@x.com", "pw1", Role::DataConsumer);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["fullName"], "Ann");
        assert_eq!(json["role"], "DataConsumer");
        assert!(json.get("password").is_none());
        assert!(json["status"].is_null());
    }

    #[test]
    fn test_register_request_conversion() {
        let req: RegisterRequest = serde_json::from_value(serde_json::json!({
            "fullName": "Root",
            "email": "root@x.com",
            "password": "pw",
            "role": "ADMIN",
            "status": "active"
        }))
        .unwrap();
        let user = User::try_from(req).unwrap();
        assert_eq!(user.user_id, NEW_ID);
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.status, Some(UserStatus::Active));
    }

    #[test]
    fn test_register_request_rejects_unknown_status() {
        let req = RegisterRequest {
            full_name: "Root".into(),
            email: "root@x.com".into(),
            password: "pw".into(),
            role: "Admin".into(),
            status: Some("Frozen".into()),
        };
        assert!(matches!(
            User::try_from(req),
            Err(MarketError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_register_request_ignores_status_for_defaulted_roles() {
        for role in ["DataConsumer", "DataProvider"] {
            let req = RegisterRequest {
                full_name: "Ann".into(),
                email: "ann@x.com".into(),
                password: "pw1".into(),
                role: role.into(),
                status: Some("Approved".into()),
            };
            let user = User::try_from(req).unwrap();
            assert_eq!(user.status, None, "role {}", role);
        }
    }
}
