//! End-to-end watering flow over the real store: schedule creation, the
//! overdue sweep with same-day dedup, and watering confirmation.

mod support;

use std::sync::Arc;

use chrono::{Days, NaiveDate, NaiveDateTime};
use pocketfarm_backend::domain::ports::{
    FixturePushChannel, NotificationRepository, ScheduleCreateOutcome, ScheduleRepository,
    UserRepository,
};
use pocketfarm_backend::domain::sweep::TokioSleeper;
use pocketfarm_backend::domain::{
    Location, NewUser, Notifier, OverdueWateringSweep, User,
};
use pocketfarm_backend::outbound::persistence::{
    DieselNotificationRepository, DieselScheduleRepository, DieselUserRepository,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn at(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, 0, 0).expect("valid timestamp")
}

async fn register_user(users: &DieselUserRepository, email: &str) -> User {
    users
        .create(NewUser {
            name: "Asha".to_owned(),
            email: email.to_owned(),
            password_hash: "$argon2id$fixture".to_owned(),
            phone: None,
            location: Location::default(),
        })
        .await
        .expect("create user")
}

#[actix_rt::test]
async fn overdue_sweep_reminds_once_per_day_until_confirmed() {
    let (_dir, pool) = support::seeded_pool().await;
    let users = DieselUserRepository::new(pool.clone());
    let schedules = DieselScheduleRepository::new(pool.clone());
    let inbox = DieselNotificationRepository::new(pool);

    let user = register_user(&users, "asha@example.com").await;
    let today = day(2026, 8, 27);

    let outcome = schedules
        .create_for_crop(user.id, "Tomato", today)
        .await
        .expect("create schedule");
    assert!(matches!(outcome, ScheduleCreateOutcome::Created(_)));

    // A fresh schedule is due immediately.
    let overdue = schedules.list_overdue(today).await.expect("list overdue");
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].crop_name, "Tomato");

    let users = Arc::new(users);
    let schedules = Arc::new(schedules);
    let inbox = Arc::new(inbox);
    let notifier = Arc::new(Notifier::new(
        inbox.clone(),
        Arc::new(FixturePushChannel),
        Arc::new(TokioSleeper),
    ));
    let sweep = OverdueWateringSweep::new(
        schedules.clone(),
        users.clone(),
        inbox.clone(),
        notifier,
    );

    sweep.sweep_once(at(today, 7)).await.expect("first pass");
    let entries = inbox.list(user.id).await.expect("list inbox");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "Time to water your Tomato!");

    // A second pass the same day must not duplicate the reminder.
    sweep.sweep_once(at(today, 13)).await.expect("second pass");
    assert_eq!(inbox.list(user.id).await.expect("list inbox").len(), 1);

    // Confirming clears the overdue state and schedules the next date.
    let next = schedules
        .record_watering(user.id, "Tomato", today)
        .await
        .expect("record watering")
        .expect("schedule exists");
    assert!(next > today);
    assert!(schedules
        .list_overdue(today)
        .await
        .expect("list overdue")
        .is_empty());
}

#[actix_rt::test]
async fn reminders_recur_after_a_confirmation() {
    let (_dir, pool) = support::seeded_pool().await;
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let schedules = Arc::new(DieselScheduleRepository::new(pool.clone()));
    let inbox = Arc::new(DieselNotificationRepository::new(pool));

    let user = register_user(&users, "leela@example.com").await;
    let today = day(2026, 8, 27);
    schedules
        .create_for_crop(user.id, "Tomato", today)
        .await
        .expect("create schedule");

    let next = schedules
        .record_watering(user.id, "Tomato", today)
        .await
        .expect("record watering")
        .expect("schedule exists");

    // The confirmed schedule must come due again once the new date passes.
    let due_again = schedules
        .list_overdue(next.checked_add_days(Days::new(30)).expect("valid date"))
        .await
        .expect("list overdue");
    assert_eq!(due_again.len(), 1);
    assert_eq!(due_again[0].crop_name, "Tomato");

    let notifier = Arc::new(Notifier::new(
        inbox.clone(),
        Arc::new(FixturePushChannel),
        Arc::new(TokioSleeper),
    ));
    let sweep = OverdueWateringSweep::new(
        schedules.clone(),
        users.clone(),
        inbox.clone(),
        notifier,
    );

    sweep.sweep_once(at(next, 7)).await.expect("post-confirmation pass");
    let entries = inbox.list(user.id).await.expect("list inbox");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "Time to water your Tomato!");
}

#[actix_rt::test]
async fn reminders_resume_the_next_day() {
    let (_dir, pool) = support::seeded_pool().await;
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let schedules = Arc::new(DieselScheduleRepository::new(pool.clone()));
    let inbox = Arc::new(DieselNotificationRepository::new(pool));

    let user = register_user(&users, "ravi@example.com").await;
    let today = day(2026, 8, 27);
    schedules
        .create_for_crop(user.id, "Mint", today)
        .await
        .expect("create schedule");

    let notifier = Arc::new(Notifier::new(
        inbox.clone(),
        Arc::new(FixturePushChannel),
        Arc::new(TokioSleeper),
    ));
    let sweep = OverdueWateringSweep::new(
        schedules.clone(),
        users.clone(),
        inbox.clone(),
        notifier,
    );

    sweep.sweep_once(at(today, 7)).await.expect("day one");
    let tomorrow = today.checked_add_days(Days::new(1)).expect("valid date");
    sweep.sweep_once(at(tomorrow, 7)).await.expect("day two");

    // The schedule stayed unconfirmed, so each day gets its own reminder.
    assert_eq!(inbox.list(user.id).await.expect("list inbox").len(), 2);
}

#[actix_rt::test]
async fn opted_out_users_are_not_reminded() {
    let (_dir, pool) = support::seeded_pool().await;
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let schedules = Arc::new(DieselScheduleRepository::new(pool.clone()));
    let inbox = Arc::new(DieselNotificationRepository::new(pool));

    let user = register_user(&users, "mira@example.com").await;
    let mut prefs = users
        .preferences(user.id)
        .await
        .expect("fetch prefs")
        .expect("prefs exist");
    prefs.watering_reminders = false;
    users
        .update_preferences(user.id, prefs)
        .await
        .expect("update prefs");

    let today = day(2026, 8, 27);
    schedules
        .create_for_crop(user.id, "Basil", today)
        .await
        .expect("create schedule");

    let notifier = Arc::new(Notifier::new(
        inbox.clone(),
        Arc::new(FixturePushChannel),
        Arc::new(TokioSleeper),
    ));
    let sweep = OverdueWateringSweep::new(
        schedules.clone(),
        users.clone(),
        inbox.clone(),
        notifier,
    );

    sweep.sweep_once(at(today, 7)).await.expect("sweep");
    assert!(inbox.list(user.id).await.expect("list inbox").is_empty());
}
