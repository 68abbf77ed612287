//! Account deletion must take everything the account owns with it.

mod support;

use chrono::NaiveDate;
use pocketfarm_backend::domain::ports::{
    LibraryRepository, NotificationRepository, ScheduleRepository, UserRepository,
};
use pocketfarm_backend::domain::{Location, NewUser};
use pocketfarm_backend::outbound::persistence::{
    DieselLibraryRepository, DieselNotificationRepository, DieselScheduleRepository,
    DieselUserRepository,
};

#[actix_rt::test]
async fn deleting_an_account_removes_everything_it_owns() {
    let (_dir, pool) = support::seeded_pool().await;
    let users = DieselUserRepository::new(pool.clone());
    let library = DieselLibraryRepository::new(pool.clone());
    let schedules = DieselScheduleRepository::new(pool.clone());
    let inbox = DieselNotificationRepository::new(pool);

    let user = users
        .create(NewUser {
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            password_hash: "$argon2id$fixture".to_owned(),
            phone: Some("+91 98470 00000".to_owned()),
            location: Location::default(),
        })
        .await
        .expect("create user");

    let today = NaiveDate::from_ymd_opt(2026, 8, 27).expect("valid date");
    library.add(user.id, "Tomato").await.expect("add to library");
    schedules
        .create_for_crop(user.id, "Tomato", today)
        .await
        .expect("create schedule");
    inbox
        .insert(
            user.id,
            "Heavy rain alert! Consider protecting your plants.",
            today.and_hms_opt(6, 0, 0).expect("valid timestamp"),
        )
        .await
        .expect("insert notification");

    users.delete(user.id).await.expect("delete user");

    assert!(users
        .find_by_email("asha@example.com")
        .await
        .expect("lookup")
        .is_none());
    assert!(library.list(user.id).await.expect("library").is_empty());
    assert!(schedules
        .list_for_user(user.id)
        .await
        .expect("schedules")
        .is_empty());
    assert!(inbox.list(user.id).await.expect("inbox").is_empty());
    assert!(users
        .preferences(user.id)
        .await
        .expect("preferences lookup")
        .is_none());
}

#[actix_rt::test]
async fn deleting_one_account_leaves_others_untouched() {
    let (_dir, pool) = support::seeded_pool().await;
    let users = DieselUserRepository::new(pool.clone());
    let library = DieselLibraryRepository::new(pool);

    let keep = users
        .create(NewUser {
            name: "Ravi".to_owned(),
            email: "ravi@example.com".to_owned(),
            password_hash: "$argon2id$fixture".to_owned(),
            phone: None,
            location: Location::default(),
        })
        .await
        .expect("create kept user");
    let drop = users
        .create(NewUser {
            name: "Mira".to_owned(),
            email: "mira@example.com".to_owned(),
            password_hash: "$argon2id$fixture".to_owned(),
            phone: None,
            location: Location::default(),
        })
        .await
        .expect("create dropped user");

    library.add(keep.id, "Okra").await.expect("keep library");
    library.add(drop.id, "Okra").await.expect("drop library");

    users.delete(drop.id).await.expect("delete");

    let kept = library.list(keep.id).await.expect("list kept library");
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].name, "Okra");
}
