use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info};

use crate::application::app_error::AppResult;
use crate::application::dto::session::{GetSessionStatusDTO, SessionDTO, SessionValidationResult};
use crate::application::interface::clock::Clock;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::session::{SessionReader, SessionWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::session::Session;

/// Idle-session guard. Runs once per authenticated request: a session idle
/// beyond the configured threshold is deleted and the request short-circuits
/// as logged out; otherwise `last_touch` is refreshed and the request
/// proceeds.
///
/// A session without a `last_touch` (first request after login, or a value
/// the gateway could not parse) is treated as fresh, never as a reason to
/// log the user out. The expiry check itself has no grace window.
#[derive(Clone)]
pub struct ValidateSessionInteractor {
    db_session: Arc<dyn DBSession>,
    session_reader: Arc<dyn SessionReader>,
    session_writer: Arc<dyn SessionWriter>,
    clock: Arc<dyn Clock>,
}

impl ValidateSessionInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        session_reader: Arc<dyn SessionReader>,
        session_writer: Arc<dyn SessionWriter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            db_session,
            session_reader,
            session_writer,
            clock,
        }
    }

    pub async fn execute(&self, dto: SessionDTO) -> AppResult<GetSessionStatusDTO> {
        // A cookie value that is not even a session id is the same thing as
        // an unknown session: logged out, not a client error.
        let session_id: Id<Session> = match dto.id.try_into() {
            Ok(id) => id,
            Err(_) => {
                debug!("Session cookie does not hold a valid session id");
                return Ok(GetSessionStatusDTO {
                    status: SessionValidationResult::Invalid,
                });
            }
        };
        let session = match self.session_reader.find_by_id(&session_id).await? {
            Some(s) => s,
            None => {
                return Ok(GetSessionStatusDTO {
                    status: SessionValidationResult::Invalid,
                });
            }
        };
        let now = self.clock.now();
        let idle_threshold = Duration::minutes(dto.idle_timeout_minutes);

        if let Some(last_touch) = session.last_touch {
            if now - last_touch > idle_threshold {
                self.session_writer.delete(&session_id).await?;
                self.db_session.commit().await?;
                info!(
                    "Session {} for user {} expired after {}s idle",
                    session_id.value,
                    session.user_id.value,
                    (now - last_touch).num_seconds()
                );
                return Ok(GetSessionStatusDTO {
                    status: SessionValidationResult::Expired,
                });
            }
        }

        self.session_writer.touch(&session_id, now).await?;
        self.db_session.commit().await?;
        Ok(GetSessionStatusDTO {
            status: SessionValidationResult::Valid(session.user_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use mockall::mock;
    use rstest::{fixture, rstest};

    use crate::application::app_error::AppResult;
    use crate::application::dto::session::{SessionDTO, SessionValidationResult};
    use crate::application::interactors::session::ValidateSessionInteractor;
    use crate::application::interface::clock::Clock;
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::session::{SessionReader, SessionWriter};
    use crate::domain::entities::id::Id;
    use crate::domain::entities::session::Session;
    use crate::domain::entities::user::User;

    // Mocks
    mock! {
        pub DBSessionMock {}

        #[async_trait]
        impl DBSession for DBSessionMock {
            async fn commit(&self) -> AppResult<()>;
            async fn rollback(&self) -> AppResult<()>;
        }
    }

    mock! {
        pub SessionReaderMock {}

        #[async_trait]
        impl SessionReader for SessionReaderMock {
            async fn find_by_id(&self, session_id: &Id<Session>) -> AppResult<Option<Session>>;
        }
    }

    mock! {
        pub SessionWriterMock {}

        #[async_trait]
        impl SessionWriter for SessionWriterMock {
            async fn insert(&self, session: Session) -> AppResult<Id<Session>>;
            async fn touch(&self, session_id: &Id<Session>, now: DateTime<Utc>) -> AppResult<()>;
            async fn delete(&self, session_id: &Id<Session>) -> AppResult<()>;
            async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()>;
        }
    }

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    // Constants
    const USER_ID: &str = "019c47ec-183d-744e-b11d-cd409015bf13";
    const SESSION_ID: &str = "019c47ec-2160-7e53-bf7e-06db2a1bad85";
    const THRESHOLD_MINUTES: i64 = 30;

    // Fixtures
    #[fixture]
    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[fixture]
    fn session_dto() -> SessionDTO {
        SessionDTO {
            id: SESSION_ID.to_string(),
            idle_timeout_minutes: THRESHOLD_MINUTES,
        }
    }

    fn session_with_last_touch(last_touch: Option<DateTime<Utc>>) -> Session {
        Session {
            id: SESSION_ID.to_string().try_into().unwrap(),
            user_id: USER_ID.to_string().try_into().unwrap(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 11, 0, 0).unwrap(),
            last_touch,
        }
    }

    fn interactor(
        db_session: MockDBSessionMock,
        session_reader: MockSessionReaderMock,
        session_writer: MockSessionWriterMock,
        now: DateTime<Utc>,
    ) -> ValidateSessionInteractor {
        ValidateSessionInteractor::new(
            Arc::new(db_session),
            Arc::new(session_reader),
            Arc::new(session_writer),
            Arc::new(FixedClock(now)),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn test_unknown_session_is_invalid(session_dto: SessionDTO, t0: DateTime<Utc>) {
        let db_session = MockDBSessionMock::new();
        let mut session_reader = MockSessionReaderMock::new();
        let session_writer = MockSessionWriterMock::new();

        session_reader.expect_find_by_id().returning(|_| Ok(None));

        let result = interactor(db_session, session_reader, session_writer, t0)
            .execute(session_dto)
            .await
            .unwrap();
        assert!(matches!(result.status, SessionValidationResult::Invalid));
    }

    #[rstest]
    #[tokio::test]
    async fn test_first_request_sets_last_touch_and_survives(session_dto: SessionDTO, t0: DateTime<Utc>) {
        let mut db_session = MockDBSessionMock::new();
        let mut session_reader = MockSessionReaderMock::new();
        let mut session_writer = MockSessionWriterMock::new();

        let session = session_with_last_touch(None);
        let expected_user_id = session.user_id.clone();
        session_reader
            .expect_find_by_id()
            .returning(move |_| Ok(Some(session.clone())));
        session_writer
            .expect_touch()
            .withf(move |_, now| *now == t0)
            .returning(|_, _| Ok(()));
        session_writer.expect_delete().never();
        db_session.expect_commit().returning(|| Ok(()));

        let result = interactor(db_session, session_reader, session_writer, t0)
            .execute(session_dto)
            .await
            .unwrap();
        match result.status {
            SessionValidationResult::Valid(user_id) => assert_eq!(user_id.value, expected_user_id.value),
            _ => panic!("expected valid status"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_activity_within_threshold_refreshes_last_touch(session_dto: SessionDTO, t0: DateTime<Utc>) {
        let mut db_session = MockDBSessionMock::new();
        let mut session_reader = MockSessionReaderMock::new();
        let mut session_writer = MockSessionWriterMock::new();

        let now = t0 + Duration::minutes(10);
        let session = session_with_last_touch(Some(t0));
        session_reader
            .expect_find_by_id()
            .returning(move |_| Ok(Some(session.clone())));
        session_writer
            .expect_touch()
            .withf(move |_, touched| *touched == now)
            .returning(|_, _| Ok(()));
        db_session.expect_commit().returning(|| Ok(()));

        let result = interactor(db_session, session_reader, session_writer, now)
            .execute(session_dto)
            .await
            .unwrap();
        assert!(matches!(result.status, SessionValidationResult::Valid(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_idle_beyond_threshold_terminates_session(session_dto: SessionDTO, t0: DateTime<Utc>) {
        let mut db_session = MockDBSessionMock::new();
        let mut session_reader = MockSessionReaderMock::new();
        let mut session_writer = MockSessionWriterMock::new();

        // Last activity at T0+10min, request at T0+45min: 35min idle > 30min.
        let last_touch = t0 + Duration::minutes(10);
        let now = t0 + Duration::minutes(45);
        let session = session_with_last_touch(Some(last_touch));
        session_reader
            .expect_find_by_id()
            .returning(move |_| Ok(Some(session.clone())));
        session_writer.expect_delete().times(1).returning(|_| Ok(()));
        session_writer.expect_touch().never();
        db_session.expect_commit().returning(|| Ok(()));

        let result = interactor(db_session, session_reader, session_writer, now)
            .execute(session_dto)
            .await
            .unwrap();
        assert!(matches!(result.status, SessionValidationResult::Expired));
    }

    #[rstest]
    #[tokio::test]
    async fn test_idle_exactly_at_threshold_survives(session_dto: SessionDTO, t0: DateTime<Utc>) {
        let mut db_session = MockDBSessionMock::new();
        let mut session_reader = MockSessionReaderMock::new();
        let mut session_writer = MockSessionWriterMock::new();

        let now = t0 + Duration::minutes(THRESHOLD_MINUTES);
        let session = session_with_last_touch(Some(t0));
        session_reader
            .expect_find_by_id()
            .returning(move |_| Ok(Some(session.clone())));
        session_writer.expect_touch().returning(|_, _| Ok(()));
        session_writer.expect_delete().never();
        db_session.expect_commit().returning(|| Ok(()));

        let result = interactor(db_session, session_reader, session_writer, now)
            .execute(session_dto)
            .await
            .unwrap();
        assert!(matches!(result.status, SessionValidationResult::Valid(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_repeated_activity_never_terminates(t0: DateTime<Utc>) {
        // Two consecutive requests inside the threshold each refresh
        // last_touch; the second one must still be Valid.
        let mut now = t0;
        let mut last_touch = None;
        for _ in 0..2 {
            let mut db_session = MockDBSessionMock::new();
            let mut session_reader = MockSessionReaderMock::new();
            let mut session_writer = MockSessionWriterMock::new();

            let session = session_with_last_touch(last_touch);
            session_reader
                .expect_find_by_id()
                .returning(move |_| Ok(Some(session.clone())));
            session_writer.expect_touch().returning(|_, _| Ok(()));
            session_writer.expect_delete().never();
            db_session.expect_commit().returning(|| Ok(()));

            let dto = SessionDTO {
                id: SESSION_ID.to_string(),
                idle_timeout_minutes: THRESHOLD_MINUTES,
            };
            let result = interactor(db_session, session_reader, session_writer, now)
                .execute(dto)
                .await
                .unwrap();
            assert!(matches!(result.status, SessionValidationResult::Valid(_)));

            last_touch = Some(now);
            now += Duration::minutes(10);
        }
    }

    #[rstest]
    #[case("invalid-id")]
    #[case("")]
    #[case("019c47ec-2160-7e53-bf7e")]
    #[tokio::test]
    async fn test_malformed_session_id_is_invalid(#[case] cookie_value: &str, t0: DateTime<Utc>) {
        let db_session = MockDBSessionMock::new();
        let mut session_reader = MockSessionReaderMock::new();
        let mut session_writer = MockSessionWriterMock::new();

        // Never reaches the store, and never surfaces as an error.
        session_reader.expect_find_by_id().never();
        session_writer.expect_touch().never();
        session_writer.expect_delete().never();

        let dto = SessionDTO {
            id: cookie_value.to_string(),
            idle_timeout_minutes: THRESHOLD_MINUTES,
        };

        let result = interactor(db_session, session_reader, session_writer, t0)
            .execute(dto)
            .await
            .unwrap();
        assert!(matches!(result.status, SessionValidationResult::Invalid));
    }
}
