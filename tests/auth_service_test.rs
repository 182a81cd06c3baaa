//! Authentication service unit tests.

use std::sync::Arc;

use uuid::Uuid;

use catalog_api::config::Config;
use catalog_api::domain::{Password, User, UserRole};
use catalog_api::errors::AppError;
use catalog_api::infra::{
    MockProductRepository, MockUserRepository, ProductRepository, Repositories, UserRepository,
};
use catalog_api::services::{AuthService, Authenticator};

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

fn test_config() -> Config {
    Config::for_tests(TEST_SECRET, 1)
}

fn stored_user(id: Uuid, username: &str, password: &str) -> User {
    User {
        id,
        username: username.to_string(),
        password_hash: Password::new(password).unwrap().into_string(),
        role: UserRole::User,
    }
}

/// Test facade handing out mocked repositories
struct TestRepositories {
    users: Arc<MockUserRepository>,
    products: Arc<MockProductRepository>,
}

impl TestRepositories {
    fn with_users(users: MockUserRepository) -> Self {
        Self {
            users: Arc::new(users),
            products: Arc::new(MockProductRepository::new()),
        }
    }
}

impl Repositories for TestRepositories {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }
}

fn auth_with(repo: MockUserRepository, config: Config) -> Authenticator<TestRepositories> {
    Authenticator::new(Arc::new(TestRepositories::with_users(repo)), config)
}

#[tokio::test]
async fn test_signup_stores_hash_not_plaintext() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username().returning(|_| Ok(None));
    repo.expect_create()
        .withf(|username, hash| {
            username == "alice"
                && hash != "hunter22"
                && Password::from_hash(hash.clone()).verify("hunter22")
        })
        .returning(|username, hash| Ok(User::new(Uuid::new_v4(), username, hash)));

    let auth = auth_with(repo, test_config());
    let user = auth
        .signup("alice".to_string(), "hunter22".to_string())
        .await
        .unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.role, UserRole::User);
}

#[tokio::test]
async fn test_signup_duplicate_username_conflicts() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(stored_user(Uuid::new_v4(), "alice", "hunter22"))));

    let auth = auth_with(repo, test_config());
    let result = auth
        .signup("alice".to_string(), "hunter22".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_login_unknown_username_is_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username().returning(|_| Ok(None));

    let auth = auth_with(repo, test_config());
    let result = auth.login("ghost".to_string(), "whatever".to_string()).await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::NotFound(entity) if entity == "User"
    ));
}

#[tokio::test]
async fn test_login_wrong_password_is_invalid_credentials() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(stored_user(Uuid::new_v4(), "alice", "hunter22"))));

    let auth = auth_with(repo, test_config());
    let result = auth.login("alice".to_string(), "wrong".to_string()).await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::InvalidCredentials
    ));
}

#[tokio::test]
async fn test_login_issues_verifiable_token() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(move |_| Ok(Some(stored_user(user_id, "alice", "hunter22"))));

    let auth = auth_with(repo, test_config());
    let session = auth
        .login("alice".to_string(), "hunter22".to_string())
        .await
        .unwrap();

    assert_eq!(session.user.id, user_id);

    let claims = auth.verify_token(&session.token).unwrap();
    assert_eq!(claims.sub, user_id);
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_current_user_round_trip() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(move |_| Ok(Some(stored_user(user_id, "alice", "hunter22"))));
    repo.expect_find_by_id()
        .returning(move |id| Ok(Some(stored_user(id, "alice", "hunter22"))));

    let auth = auth_with(repo, test_config());
    let session = auth
        .login("alice".to_string(), "hunter22".to_string())
        .await
        .unwrap();

    // The raw token and the Bearer-prefixed form both authenticate
    let me = auth.current_user(&session.token).await.unwrap();
    assert_eq!(me.username, "alice");

    let me = auth
        .current_user(&format!("Bearer {}", session.token))
        .await
        .unwrap();
    assert_eq!(me.id, user_id);
}

#[tokio::test]
async fn test_current_user_rejects_missing_token() {
    let repo = MockUserRepository::new();
    let auth = auth_with(repo, test_config());

    let result = auth.current_user("").await;
    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn test_current_user_rejects_tampered_token() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(move |_| Ok(Some(stored_user(user_id, "alice", "hunter22"))));

    let auth = auth_with(repo, test_config());
    let session = auth
        .login("alice".to_string(), "hunter22".to_string())
        .await
        .unwrap();

    let mut tampered = session.token;
    tampered.push('x');

    let result = auth.current_user(&tampered).await;
    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn test_current_user_rejects_expired_token() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(move |_| Ok(Some(stored_user(user_id, "alice", "hunter22"))));

    // Tokens from this config are already an hour past their expiry
    let auth = auth_with(repo, Config::for_tests(TEST_SECRET, -1));
    let session = auth
        .login("alice".to_string(), "hunter22".to_string())
        .await
        .unwrap();

    let result = auth.current_user(&session.token).await;
    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(move |_| Ok(Some(stored_user(user_id, "alice", "hunter22"))));

    let issuing = auth_with(repo, Config::for_tests("another-secret-entirely-32-chars!!!!", 1));
    let session = issuing
        .login("alice".to_string(), "hunter22".to_string())
        .await
        .unwrap();

    let verifying = auth_with(MockUserRepository::new(), test_config());
    let result = verifying.current_user(&session.token).await;
    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}
