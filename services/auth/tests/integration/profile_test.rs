use uuid::Uuid;

use lostfound_auth::domain::types::ProfileUpdate;
use lostfound_auth::error::AuthServiceError;
use lostfound_auth::usecase::profile::{GetProfileUseCase, UpdateProfileUseCase};
use lostfound_auth_types::token::validate_session_token;
use lostfound_testing::auth::TEST_JWT_SECRET;

use crate::helpers::{MockUserRepo, sessions, test_user};

fn update_usecase(users: &MockUserRepo) -> UpdateProfileUseCase<MockUserRepo> {
    UpdateProfileUseCase {
        users: users.clone(),
        sessions: sessions(),
    }
}

#[tokio::test]
async fn should_get_own_profile() {
    let user = test_user("me@campus.edu");
    let uc = GetProfileUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
    };

    let profile = uc.execute(user.id).await.unwrap();

    assert_eq!(profile.email, "me@campus.edu");
    assert_eq!(profile.full_name, user.full_name);
}

#[tokio::test]
async fn should_return_not_found_for_deleted_user() {
    let uc = GetProfileUseCase {
        users: MockUserRepo::empty(),
    };

    let result = uc.execute(Uuid::new_v4()).await;

    assert!(matches!(result, Err(AuthServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_reject_empty_profile_update() {
    let user = test_user("me@campus.edu");
    let users = MockUserRepo::new(vec![user.clone()]);

    let result = update_usecase(&users)
        .execute(user.id, ProfileUpdate::default())
        .await;

    assert!(matches!(result, Err(AuthServiceError::MissingData)));
}

#[tokio::test]
async fn should_reject_blank_profile_field() {
    let user = test_user("me@campus.edu");
    let users = MockUserRepo::new(vec![user.clone()]);

    let result = update_usecase(&users)
        .execute(
            user.id,
            ProfileUpdate {
                full_name: Some("   ".to_owned()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AuthServiceError::InvalidField("full_name"))
    ));
    assert_eq!(users.get("me@campus.edu").unwrap().full_name, user.full_name);
}

#[tokio::test]
async fn should_update_profile_and_reissue_token() {
    let user = test_user("me@campus.edu");
    let users = MockUserRepo::new(vec![user.clone()]);

    let output = update_usecase(&users)
        .execute(
            user.id,
            ProfileUpdate {
                designation: Some(" faculty ".to_owned()),
                contact_number: Some("5550001234".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(output.user.designation, "faculty");
    assert_eq!(output.user.contact_number, "5550001234");
    assert_eq!(output.user.full_name, user.full_name, "untouched field kept");

    let identity = validate_session_token(&output.session.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(identity.designation, "faculty");
    assert_eq!(identity.contact_number, "5550001234");
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_user() {
    let users = MockUserRepo::empty();

    let result = update_usecase(&users)
        .execute(
            Uuid::new_v4(),
            ProfileUpdate {
                full_name: Some("Ghost".to_owned()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AuthServiceError::UserNotFound)));
}
