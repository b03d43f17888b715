use chrono::Utc;
use std::sync::Arc;

use super::models::User;
use super::password::PasswordScheme;
use crate::error::Result;
use crate::persistence::UserRepository;

pub struct UserService {
    users: Arc<dyn UserRepository>,
    password_scheme: PasswordScheme,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, password_scheme: PasswordScheme) -> Self {
        Self {
            users,
            password_scheme,
        }
    }

    /// Register a new user
    ///
    /// Providers start `Pending`, consumers start `Active`; other roles keep
    /// the status the caller supplied.
    pub async fn register_user(&self, mut candidate: User) -> Result<User> {
        if let Some(status) = candidate.role.initial_status() {
            candidate.status = Some(status);
        }
        candidate.created_at = Utc::now();
        candidate.password = self.password_scheme.seal(&candidate.password)?;

        let user = self.users.save(candidate).await?;
        tracing::info!(
            user_id = user.user_id,
            role = %user.role,
            status = ?user.status,
            "User registered"
        );
        Ok(user)
    }

    /// Match email and password. Unknown email and wrong password are not
    /// distinguished.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>> {
        if email.is_empty() || password.is_empty() {
            return Ok(None);
        }

        let user = self.users.find_by_email(email).await?;
        Ok(user.filter(|u| self.password_scheme.verify(password, &u.password)))
    }

    pub async fn list_all_users(&self) -> Result<Vec<User>> {
        self.users.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryRepository, Repository};
    use crate::user_auth::{Role, UserStatus};

    fn service_with(scheme: PasswordScheme) -> (UserService, Arc<MemoryRepository<User>>) {
        let repo = Arc::new(MemoryRepository::<User>::new());
        (UserService::new(repo.clone(), scheme), repo)
    }

    fn ann() -> User {
        User::new("Ann", "ann@x.com", "pw1", Role::DataConsumer)
    }

    #[tokio::test]
    async fn test_register_consumer_is_active_with_new_id() {
        let (service, _) = service_with(PasswordScheme::Plaintext);
        let user = service.register_user(ann()).await.unwrap();
        assert_eq!(user.status, Some(UserStatus::Active));
        assert!(user.user_id > 0);
        assert_eq!(user.full_name, "Ann");
    }

    #[tokio::test]
    async fn test_register_provider_is_pending() {
        let (service, _) = service_with(PasswordScheme::Plaintext);
        let mut candidate = User::new("Pat", "pat@x.com", "pw", Role::DataProvider);
        candidate.status = Some(UserStatus::Active);
        let user = service.register_user(candidate).await.unwrap();
        assert_eq!(user.status, Some(UserStatus::Pending));
    }

    #[tokio::test]
    async fn test_register_role_parsed_in_any_case() {
        let (service, _) = service_with(PasswordScheme::Plaintext);
        for (role, expected) in [
            ("dataprovider", UserStatus::Pending),
            ("DATAPROVIDER", UserStatus::Pending),
            ("dataConsumer", UserStatus::Active),
        ] {
            let candidate = User::new("X", "x@x.com", "pw", role.parse().unwrap());
            let user = service.register_user(candidate).await.unwrap();
            assert_eq!(user.status, Some(expected), "role {}", role);
        }
    }

    #[tokio::test]
    async fn test_register_admin_keeps_supplied_status() {
        let (service, _) = service_with(PasswordScheme::Plaintext);

        let bare = service
            .register_user(User::new("Root", "root@x.com", "pw", Role::Admin))
            .await
            .unwrap();
        assert_eq!(bare.status, None);

        let mut suspended = User::new("Mod", "mod@x.com", "pw", Role::Moderator);
        suspended.status = Some(UserStatus::Suspended);
        let saved = service.register_user(suspended).await.unwrap();
        assert_eq!(saved.status, Some(UserStatus::Suspended));
    }

    #[tokio::test]
    async fn test_authenticate_empty_inputs_fail_closed() {
        let (service, _) = service_with(PasswordScheme::Plaintext);
        service.register_user(ann()).await.unwrap();

        assert!(service.authenticate("", "pw1").await.unwrap().is_none());
        assert!(service.authenticate("ann@x.com", "").await.unwrap().is_none());
        assert!(service.authenticate("", "").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_authenticate_exact_match_only() {
        let (service, _) = service_with(PasswordScheme::Plaintext);
        let registered = service.register_user(ann()).await.unwrap();

        let found = service.authenticate("ann@x.com", "pw1").await.unwrap();
        assert_eq!(found.map(|u| u.user_id), Some(registered.user_id));

        assert!(service.authenticate("ann@x.com", "wrong").await.unwrap().is_none());
        assert!(service.authenticate("ann@x.com", "PW1").await.unwrap().is_none());
        assert!(service.authenticate("ANN@x.com", "pw1").await.unwrap().is_none());
        assert!(service.authenticate("bob@x.com", "pw1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_plaintext_scheme_stores_password_as_given() {
        let (service, repo) = service_with(PasswordScheme::Plaintext);
        let user = service.register_user(ann()).await.unwrap();
        let stored = repo.find_by_id(user.user_id).await.unwrap().unwrap();
        assert_eq!(stored.password, "pw1");
    }

    #[tokio::test]
    async fn test_argon2_scheme_hashes_and_authenticates() {
        let (service, repo) = service_with(PasswordScheme::Argon2);
        let user = service.register_user(ann()).await.unwrap();

        let stored = repo.find_by_id(user.user_id).await.unwrap().unwrap();
        assert_ne!(stored.password, "pw1");

        assert!(service.authenticate("ann@x.com", "pw1").await.unwrap().is_some());
        assert!(service.authenticate("ann@x.com", "wrong").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_users_unfiltered() {
        let (service, _) = service_with(PasswordScheme::Plaintext);
        assert!(service.list_all_users().await.unwrap().is_empty());

        service.register_user(ann()).await.unwrap();
        service
            .register_user(User::new("Pat", "pat@x.com", "pw", Role::DataProvider))
            .await
            .unwrap();

        let users = service.list_all_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "ann@x.com");
        assert_eq!(users[1].status, Some(UserStatus::Pending));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_accepted() {
        let (service, _) = service_with(PasswordScheme::Plaintext);
        let first = service.register_user(ann()).await.unwrap();
        let second = service.register_user(ann()).await.unwrap();
        assert_ne!(first.user_id, second.user_id);
    }
}
