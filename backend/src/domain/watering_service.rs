//! Background overdue-watering sweep.
//!
//! Every pass finds schedules due on or before today and files one reminder
//! per user/crop pair per day. Users who disabled watering reminders are
//! skipped; the same-day check deduplicates across repeated passes.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use tracing::{debug, warn};

use super::notifier::Notifier;
use super::ports::{NotificationRepository, PushFrame, UserRepository};
use super::ports::ScheduleRepository;
use super::sweep::{PeriodicTask, TickError};
use super::watering::OverdueSchedule;

/// Reminder body for an overdue crop.
pub fn reminder_message(crop_name: &str) -> String {
    format!("Time to water your {crop_name}!")
}

pub struct OverdueWateringSweep {
    schedules: Arc<dyn ScheduleRepository>,
    users: Arc<dyn UserRepository>,
    inbox: Arc<dyn NotificationRepository>,
    notifier: Arc<Notifier>,
}

impl OverdueWateringSweep {
    pub fn new(
        schedules: Arc<dyn ScheduleRepository>,
        users: Arc<dyn UserRepository>,
        inbox: Arc<dyn NotificationRepository>,
        notifier: Arc<Notifier>,
    ) -> Self {
        Self {
            schedules,
            users,
            inbox,
            notifier,
        }
    }

    /// Run one pass at the given instant.
    pub async fn sweep_once(&self, now: NaiveDateTime) -> Result<(), TickError> {
        let today = now.date();
        let overdue = self
            .schedules
            .list_overdue(today)
            .await
            .map_err(|err| TickError::new(err.to_string()))?;
        debug!(overdue = overdue.len(), "watering sweep pass");
        for schedule in overdue {
            self.remind(&schedule, now).await;
        }
        Ok(())
    }

    async fn remind(&self, schedule: &OverdueSchedule, now: NaiveDateTime) {
        let user_id = schedule.user_id;
        match self.users.preferences(user_id).await {
            Ok(Some(prefs)) if prefs.watering_reminders => {}
            Ok(_) => return,
            Err(err) => {
                warn!(user_id = %user_id, error = %err, "preference lookup failed");
                return;
            }
        }

        let message = reminder_message(&schedule.crop_name);
        match self.inbox.exists_on_day(user_id, &message, now.date()).await {
            Ok(true) => return,
            Ok(false) => {}
            Err(err) => {
                warn!(user_id = %user_id, error = %err, "dedup lookup failed");
                return;
            }
        }

        let frame = PushFrame::WateringReminder {
            crop_name: schedule.crop_name.clone(),
            message: message.clone(),
        };
        if let Err(err) = self.notifier.notify(user_id, &message, now, frame).await {
            warn!(user_id = %user_id, error = %err, "reminder delivery failed");
        }
    }
}

#[async_trait]
impl PeriodicTask for OverdueWateringSweep {
    fn name(&self) -> &'static str {
        "overdue_watering"
    }

    async fn tick(&self) -> Result<(), TickError> {
        self.sweep_once(Utc::now().naive_utc()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notifications::{Notification, NotificationPreferences};
    use crate::domain::ports::{
        MockNotificationRepository, MockPushChannel, MockScheduleRepository, MockUserRepository,
    };
    use crate::domain::sweep::MockSleeper;
    use crate::domain::user::UserId;
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 27)
            .and_then(|d| d.and_hms_opt(7, 30, 0))
            .expect("valid timestamp")
    }

    fn overdue(id: i32, crop: &str) -> OverdueSchedule {
        OverdueSchedule {
            user_id: UserId::new(id),
            crop_name: crop.to_owned(),
            next_watering: now().date(),
        }
    }

    fn sweep_with(
        schedules: MockScheduleRepository,
        users: MockUserRepository,
        inbox: MockNotificationRepository,
        notifier_inbox: MockNotificationRepository,
        notifier_push: MockPushChannel,
    ) -> OverdueWateringSweep {
        let notifier = Arc::new(Notifier::new(
            Arc::new(notifier_inbox),
            Arc::new(notifier_push),
            Arc::new(MockSleeper::new()),
        ));
        OverdueWateringSweep::new(
            Arc::new(schedules),
            Arc::new(users),
            Arc::new(inbox),
            notifier,
        )
    }

    #[actix_rt::test]
    async fn overdue_schedule_files_one_reminder() {
        let mut schedules = MockScheduleRepository::new();
        schedules
            .expect_list_overdue()
            .returning(|_| Ok(vec![overdue(1, "Tomato")]));
        let mut users = MockUserRepository::new();
        users
            .expect_preferences()
            .returning(|_| Ok(Some(NotificationPreferences::default())));
        let mut inbox = MockNotificationRepository::new();
        inbox.expect_exists_on_day().returning(|_, _, _| Ok(false));

        let mut notifier_inbox = MockNotificationRepository::new();
        notifier_inbox
            .expect_insert()
            .with(eq(UserId::new(1)), eq("Time to water your Tomato!"), eq(now()))
            .times(1)
            .returning(|user_id, message, timestamp| {
                Ok(Notification {
                    id: 1,
                    user_id,
                    message: message.to_owned(),
                    timestamp,
                    read_status: false,
                })
            });
        let mut notifier_push = MockPushChannel::new();
        notifier_push.expect_push().times(1).returning(|_, _| ());

        let sweep = sweep_with(schedules, users, inbox, notifier_inbox, notifier_push);
        sweep.sweep_once(now()).await.expect("sweep succeeds");
    }

    #[actix_rt::test]
    async fn same_day_duplicate_is_skipped() {
        let mut schedules = MockScheduleRepository::new();
        schedules
            .expect_list_overdue()
            .returning(|_| Ok(vec![overdue(1, "Tomato")]));
        let mut users = MockUserRepository::new();
        users
            .expect_preferences()
            .returning(|_| Ok(Some(NotificationPreferences::default())));
        let mut inbox = MockNotificationRepository::new();
        inbox.expect_exists_on_day().returning(|_, _, _| Ok(true));

        let sweep = sweep_with(
            schedules,
            users,
            inbox,
            MockNotificationRepository::new(),
            MockPushChannel::new(),
        );
        sweep.sweep_once(now()).await.expect("sweep succeeds");
    }

    #[actix_rt::test]
    async fn disabled_reminders_are_respected() {
        let mut schedules = MockScheduleRepository::new();
        schedules
            .expect_list_overdue()
            .returning(|_| Ok(vec![overdue(1, "Tomato")]));
        let mut users = MockUserRepository::new();
        users.expect_preferences().returning(|_| {
            Ok(Some(NotificationPreferences {
                watering_reminders: false,
                weather_alerts: true,
            }))
        });

        let sweep = sweep_with(
            schedules,
            users,
            MockNotificationRepository::new(),
            MockNotificationRepository::new(),
            MockPushChannel::new(),
        );
        sweep.sweep_once(now()).await.expect("sweep succeeds");
    }

    #[actix_rt::test]
    async fn two_crops_for_one_user_each_get_a_reminder() {
        let mut schedules = MockScheduleRepository::new();
        schedules
            .expect_list_overdue()
            .returning(|_| Ok(vec![overdue(1, "Tomato"), overdue(1, "Basil")]));
        let mut users = MockUserRepository::new();
        users
            .expect_preferences()
            .returning(|_| Ok(Some(NotificationPreferences::default())));
        let mut inbox = MockNotificationRepository::new();
        inbox.expect_exists_on_day().returning(|_, _, _| Ok(false));

        let mut notifier_inbox = MockNotificationRepository::new();
        notifier_inbox
            .expect_insert()
            .times(2)
            .returning(|user_id, message, timestamp| {
                Ok(Notification {
                    id: 1,
                    user_id,
                    message: message.to_owned(),
                    timestamp,
                    read_status: false,
                })
            });
        let mut notifier_push = MockPushChannel::new();
        notifier_push.expect_push().times(2).returning(|_, _| ());

        let sweep = sweep_with(schedules, users, inbox, notifier_inbox, notifier_push);
        sweep.sweep_once(now()).await.expect("sweep succeeds");
    }
}
