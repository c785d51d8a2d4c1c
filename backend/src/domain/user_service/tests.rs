//! Tests for the user service.

use super::*;
use crate::domain::ports::{MockUserRepository, UserPersistenceError};
use rstest::{fixture, rstest};

fn make_service(repo: MockUserRepository) -> UserService<MockUserRepository> {
    UserService::new(Arc::new(repo))
}

#[fixture]
fn stored_user() -> User {
    User::new(Some(UserId::new(10)), "test", "test", "mail")
}

#[rstest]
#[tokio::test]
async fn create_user_saves_and_returns_assigned_id() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .withf(|email| email == "mail")
        .times(1)
        .return_once(|_| Ok(None));
    repo.expect_save()
        .withf(|user| user.id().is_none() && user.email() == "mail")
        .times(1)
        .returning(|user| {
            Ok(User::new(
                Some(UserId::new(1)),
                user.first_name(),
                user.last_name(),
                user.email(),
            ))
        });

    let service = make_service(repo);
    let created = service
        .create_user(UserDto::new(0, "test", "test", "mail"))
        .await
        .expect("create succeeds");

    assert_eq!(created, UserDto::new(1, "test", "test", "mail"));
}

#[rstest]
#[tokio::test]
async fn create_user_ignores_caller_supplied_id() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().return_once(|_| Ok(None));
    repo.expect_save()
        .withf(|user| user.id().is_none())
        .times(1)
        .returning(|user| {
            Ok(User::new(
                Some(UserId::new(2)),
                user.first_name(),
                user.last_name(),
                user.email(),
            ))
        });

    let service = make_service(repo);
    let created = service
        .create_user(UserDto::new(99, "Ada", "Lovelace", "ada@example.com"))
        .await
        .expect("create succeeds");

    assert_eq!(created.id, 2);
}

#[rstest]
#[tokio::test]
async fn create_user_rejects_taken_email(stored_user: User) {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .withf(|email| email == "mail")
        .times(1)
        .return_once(move |_| Ok(Some(stored_user)));
    repo.expect_save().never();

    let service = make_service(repo);
    let error = service
        .create_user(UserDto::new(0, "test", "test", "mail"))
        .await
        .expect_err("duplicate email");

    assert_eq!(error, UserServiceError::email_already_exists());
}

#[rstest]
#[tokio::test]
async fn get_user_by_id_maps_stored_user(stored_user: User) {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .withf(|id| *id == UserId::new(10))
        .times(1)
        .return_once(move |_| Ok(Some(stored_user)));

    let service = make_service(repo);
    let dto = service
        .get_user_by_id(UserId::new(10))
        .await
        .expect("user exists");

    assert_eq!(dto, UserDto::new(10, "test", "test", "mail"));
}

#[rstest]
#[tokio::test]
async fn get_user_by_id_reports_missing_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let service = make_service(repo);
    let error = service
        .get_user_by_id(UserId::new(10))
        .await
        .expect_err("missing user");

    assert_eq!(
        error,
        UserServiceError::ResourceNotFound {
            resource: "User".to_owned(),
            field: "id".to_owned(),
            value: 10,
        }
    );
}

#[rstest]
#[tokio::test]
async fn get_all_users_maps_each_user_in_store_order() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_all().times(1).return_once(|| {
        Ok(vec![
            User::new(Some(UserId::new(1)), "test", "test", "mail"),
            User::new(Some(UserId::new(2)), "Ada", "Lovelace", "ada@example.com"),
        ])
    });

    let service = make_service(repo);
    let users = service.get_all_users().await.expect("list succeeds");

    assert_eq!(
        users,
        vec![
            UserDto::new(1, "test", "test", "mail"),
            UserDto::new(2, "Ada", "Lovelace", "ada@example.com"),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn update_user_overwrites_fields_and_keeps_id() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .withf(|id| *id == UserId::new(1))
        .times(1)
        .return_once(|_| Ok(Some(User::new(Some(UserId::new(1)), "test", "test", "mail"))));
    repo.expect_find_by_email().never();
    repo.expect_save()
        .withf(|user| *user == User::new(Some(UserId::new(1)), "new", "new", "new"))
        .times(1)
        .returning(|user| Ok(user.clone()));

    let service = make_service(repo);
    let updated = service
        .update_user(UserDto::new(1, "new", "new", "new"))
        .await
        .expect("update succeeds");

    assert_eq!(updated, UserDto::new(1, "new", "new", "new"));
}

#[rstest]
#[tokio::test]
async fn update_user_reports_missing_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .withf(|id| *id == UserId::new(10))
        .times(1)
        .return_once(|_| Ok(None));
    repo.expect_save().never();

    let service = make_service(repo);
    let error = service
        .update_user(UserDto::new(10, "", "", ""))
        .await
        .expect_err("missing user");

    assert_eq!(error, UserServiceError::user_not_found(UserId::new(10)));
}

#[rstest]
#[tokio::test]
async fn delete_user_removes_existing_user(stored_user: User) {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .withf(|id| *id == UserId::new(10))
        .times(1)
        .return_once(move |_| Ok(Some(stored_user)));
    repo.expect_delete_by_id()
        .withf(|id| *id == UserId::new(10))
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(repo);
    service
        .delete_user(UserId::new(10))
        .await
        .expect("delete succeeds");
}

#[rstest]
#[tokio::test]
async fn delete_user_reports_missing_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_delete_by_id().never();

    let service = make_service(repo);
    let error = service
        .delete_user(UserId::new(10))
        .await
        .expect_err("missing user");

    assert_eq!(error, UserServiceError::user_not_found(UserId::new(10)));
}

#[rstest]
#[tokio::test]
async fn persistence_failures_propagate_unchanged() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(|| Err(UserPersistenceError::connection("database unavailable")));

    let service = make_service(repo);
    let error = service.get_all_users().await.expect_err("repository fails");

    assert_eq!(
        error,
        UserServiceError::Persistence(UserPersistenceError::connection("database unavailable"))
    );
}
