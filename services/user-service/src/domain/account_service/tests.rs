//! Tests for the account use-cases against mocked ports.

use super::*;
use crate::domain::ports::{MockPasswordHasher, MockTokenCodec, MockUserRepository, TokenError};
use crate::domain::{ErrorCode, Password, PasswordHash};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

const HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA";

#[fixture]
fn profile() -> UserProfile {
    UserProfile {
        name: "Ada".to_owned(),
        surname: "Lovelace".to_owned(),
        display_name: "ada".to_owned(),
        email: "a@x.com".to_owned(),
        tel: "555-0100".to_owned(),
    }
}

fn stored_user(id: i32, profile: UserProfile) -> User {
    User::new(UserId::new(id), profile, PasswordHash::new(HASH))
}

fn service(
    users: MockUserRepository,
    hasher: MockPasswordHasher,
    tokens: MockTokenCodec,
) -> UserAccountService {
    UserAccountService::new(Arc::new(users), Arc::new(hasher), Arc::new(tokens))
}

fn credentials(password: &str) -> LoginCredentials {
    LoginCredentials::new("a@x.com", password)
}

#[rstest]
#[tokio::test]
async fn register_persists_hash_not_plaintext(profile: UserProfile) {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .withf(|password: &Password| password.expose() == "hunter2")
        .times(1)
        .returning(|_| Ok(PasswordHash::new(HASH)));
    let mut users = MockUserRepository::new();
    let expected_profile = profile.clone();
    users
        .expect_insert()
        .withf(move |user: &NewUser| {
            user.password.as_str() == HASH && user.profile == expected_profile
        })
        .times(1)
        .returning(|user| Ok(stored_user(1, user.profile.clone())));

    let registration = Registration {
        profile: profile.clone(),
        password: Password::new("hunter2").expect("non-empty"),
    };
    let user = service(users, hasher, MockTokenCodec::new())
        .register(registration)
        .await
        .expect("registration succeeds");

    assert_eq!(user.id(), UserId::new(1));
    assert_eq!(user.profile(), &profile);
    assert_eq!(user.password_hash().as_str(), HASH);
}

#[rstest]
#[case(UserPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(UserPersistenceError::query("duplicate key"), ErrorCode::InternalError)]
#[tokio::test]
async fn register_maps_store_failures(
    profile: UserProfile,
    #[case] failure: UserPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Ok(PasswordHash::new(HASH)));
    let mut users = MockUserRepository::new();
    users
        .expect_insert()
        .returning(move |_| Err(failure.clone()));

    let registration = Registration {
        profile,
        password: Password::new("hunter2").expect("non-empty"),
    };
    let err = service(users, hasher, MockTokenCodec::new())
        .register(registration)
        .await
        .expect_err("store failure surfaces");
    assert_eq!(err.code(), expected);
}

#[rstest]
#[tokio::test]
async fn login_issues_token_with_id_and_email(profile: UserProfile) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .withf(|email: &str| email == "a@x.com")
        .returning(move |_| Ok(Some(stored_user(7, profile.clone()))));
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().returning(|_, _| Ok(true));
    let mut tokens = MockTokenCodec::new();
    tokens
        .expect_issue()
        .withf(|claims: &TokenClaims| claims.id == 7 && claims.email == "a@x.com")
        .times(1)
        .returning(|_| Ok(AccessToken::new("signed")));

    let token = service(users, hasher, tokens)
        .login(&credentials("hunter2"))
        .await
        .expect("login succeeds");
    assert_eq!(token.as_str(), "signed");
}

#[rstest]
#[tokio::test]
async fn login_rejects_wrong_password_without_issuing(profile: UserProfile) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(move |_| Ok(Some(stored_user(7, profile.clone()))));
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().returning(|_, _| Ok(false));
    let mut tokens = MockTokenCodec::new();
    tokens.expect_issue().never();

    let err = service(users, hasher, tokens)
        .login(&credentials("wrong"))
        .await
        .expect_err("mismatch must fail");
    assert_eq!(err.code(), ErrorCode::InvalidCredentials);
}

#[rstest]
#[tokio::test]
async fn login_unknown_email_is_indistinguishable_from_wrong_password() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().never();
    let mut tokens = MockTokenCodec::new();
    tokens.expect_issue().never();

    let err = service(users, hasher, tokens)
        .login(&credentials("hunter2"))
        .await
        .expect_err("unknown email must fail");
    assert_eq!(err.code(), ErrorCode::InvalidCredentials);
    assert_eq!(err.message(), "invalid credentials");
}

#[rstest]
#[tokio::test]
async fn login_maps_token_failure_to_internal(profile: UserProfile) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(move |_| Ok(Some(stored_user(7, profile.clone()))));
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().returning(|_, _| Ok(true));
    let mut tokens = MockTokenCodec::new();
    tokens
        .expect_issue()
        .returning(|_| Err(TokenError::encoding("bad key")));

    let err = service(users, hasher, tokens)
        .login(&credentials("hunter2"))
        .await
        .expect_err("token failure surfaces");
    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn profile_of_unknown_id_is_not_found() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(UserId::new(99)))
        .returning(|_| Ok(None));

    let err = service(users, MockPasswordHasher::new(), MockTokenCodec::new())
        .profile(UserId::new(99))
        .await
        .expect_err("missing user");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "User not found");
}

#[rstest]
#[tokio::test]
async fn update_profile_returns_post_update_row(profile: UserProfile) {
    let mut users = MockUserRepository::new();
    users
        .expect_update_profile()
        .with(eq(UserId::new(3)), eq(profile.clone()))
        .times(1)
        .returning(|id, profile| Ok(Some(stored_user(id.value(), profile.clone()))));

    let user = service(users, MockPasswordHasher::new(), MockTokenCodec::new())
        .update_profile(UserId::new(3), profile.clone())
        .await
        .expect("update succeeds");
    assert_eq!(user.profile(), &profile);
    assert_eq!(user.password_hash().as_str(), HASH);
}

#[rstest]
#[tokio::test]
async fn update_profile_of_unknown_id_is_not_found(profile: UserProfile) {
    let mut users = MockUserRepository::new();
    users.expect_update_profile().returning(|_, _| Ok(None));

    let err = service(users, MockPasswordHasher::new(), MockTokenCodec::new())
        .update_profile(UserId::new(3), profile)
        .await
        .expect_err("missing user");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[case(true, None)]
#[case(false, Some(ErrorCode::NotFound))]
#[tokio::test]
async fn delete_reports_missing_rows(#[case] deleted: bool, #[case] expected: Option<ErrorCode>) {
    let mut users = MockUserRepository::new();
    users.expect_delete().returning(move |_| Ok(deleted));

    let result = service(users, MockPasswordHasher::new(), MockTokenCodec::new())
        .delete(UserId::new(1))
        .await;
    assert_eq!(result.err().map(|err| err.code()), expected);
}
