//! Submit goal form use case (client side)
//!
//! Drives one submission of the [`GoalForm`]:
//!
//! 1. **Validate** - on failure the inline errors stay on the form and no
//!    request is sent
//! 2. **Create** - send the validated draft to the goal API
//! 3. **Settle** - on success reset the form, mark the dependent queries
//!    stale and show a success toast; on failure show an error toast and
//!    leave the form untouched so the user can resubmit
//!
//! There is no automatic retry.

use crate::ports::goal_api::{GoalApi, GoalApiError};
use crate::ports::notifier::ToastNotifier;
use crate::ports::query_cache::QueryCache;
use inorbit_domain::{Goal, GoalForm, QueryKey, ValidationErrors};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Toast shown after a goal was created
pub const GOAL_CREATED_MESSAGE: &str = "Meta criada com sucesso!";
/// Toast shown when the create request failed
pub const GOAL_CREATE_FAILED_MESSAGE: &str = "Erro ao criar a meta, tente novamente!";

/// Result of a single submission attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; the form carries the inline errors
    Invalid(ValidationErrors),
    /// The goal was created and the form was reset
    Created(Goal),
    /// The request failed; the form kept its values
    Failed(GoalApiError),
}

impl SubmitOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }
}

/// Use case for submitting the goal form
pub struct SubmitGoalUseCase {
    api: Arc<dyn GoalApi>,
    cache: Arc<dyn QueryCache>,
    notifier: Arc<dyn ToastNotifier>,
}

impl SubmitGoalUseCase {
    pub fn new(
        api: Arc<dyn GoalApi>,
        cache: Arc<dyn QueryCache>,
        notifier: Arc<dyn ToastNotifier>,
    ) -> Self {
        Self {
            api,
            cache,
            notifier,
        }
    }

    /// Submit the form once.
    pub async fn submit(&self, form: &mut GoalForm) -> SubmitOutcome {
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(errors) => {
                debug!("Goal form invalid: {}", errors);
                return SubmitOutcome::Invalid(errors);
            }
        };

        match self.api.create_goal(&draft).await {
            Ok(goal) => {
                form.reset();
                for key in QueryKey::invalidated_by_goal_creation() {
                    self.cache.invalidate(key);
                }
                self.notifier.success(GOAL_CREATED_MESSAGE);
                info!("Goal {} created", goal.id);
                SubmitOutcome::Created(goal)
            }
            Err(e) => {
                warn!("Goal creation failed: {}", e);
                self.notifier.error(GOAL_CREATE_FAILED_MESSAGE);
                SubmitOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use inorbit_domain::{GoalDraft, GoalField, GoalId, WeeklyFrequency};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    struct MockApi {
        fail: bool,
        calls: AtomicUsize,
    }

    impl MockApi {
        fn ok() -> Self {
            Self {
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GoalApi for MockApi {
        async fn create_goal(&self, draft: &GoalDraft) -> Result<Goal, GoalApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(GoalApiError::Rejected {
                    status: 500,
                    message: "database down".into(),
                });
            }
            Ok(Goal::from_draft(
                GoalId::generate(),
                draft.clone(),
                chrono::Utc::now(),
            ))
        }
    }

    #[derive(Default)]
    struct RecordingCache {
        invalidated: Mutex<Vec<QueryKey>>,
    }

    impl QueryCache for RecordingCache {
        fn invalidate(&self, key: QueryKey) {
            self.invalidated.lock().unwrap().push(key);
        }
    }

    #[derive(Default)]
    struct RecordingToasts {
        success: Mutex<Vec<String>>,
        error: Mutex<Vec<String>>,
    }

    impl ToastNotifier for RecordingToasts {
        fn success(&self, message: &str) {
            self.success.lock().unwrap().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.error.lock().unwrap().push(message.to_string());
        }
    }

    struct Harness {
        api: Arc<MockApi>,
        cache: Arc<RecordingCache>,
        toasts: Arc<RecordingToasts>,
        use_case: SubmitGoalUseCase,
    }

    fn harness(api: MockApi) -> Harness {
        let api = Arc::new(api);
        let cache = Arc::new(RecordingCache::default());
        let toasts = Arc::new(RecordingToasts::default());
        let use_case = SubmitGoalUseCase::new(api.clone(), cache.clone(), toasts.clone());
        Harness {
            api,
            cache,
            toasts,
            use_case,
        }
    }

    fn filled_form() -> GoalForm {
        let mut form = GoalForm::new();
        form.set_title("Meditar");
        form.set_desired_weekly_frequency(3);
        form
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_empty_title_blocks_request() {
        let h = harness(MockApi::ok());
        let mut form = GoalForm::new();

        let outcome = h.use_case.submit(&mut form).await;

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert!(form.error(GoalField::Title).is_some());
        assert_eq!(h.api.calls(), 0);
        assert!(h.toasts.success.lock().unwrap().is_empty());
        assert!(h.toasts.error.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_frequency_blocks_request() {
        for value in [0, 8, -3] {
            let h = harness(MockApi::ok());
            let mut form = filled_form();
            form.set_desired_weekly_frequency(value);

            let outcome = h.use_case.submit(&mut form).await;

            assert!(matches!(outcome, SubmitOutcome::Invalid(_)), "{value}");
            assert!(form.error(GoalField::DesiredWeeklyFrequency).is_some());
            assert_eq!(h.api.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_success_resets_form_and_invalidates_queries() {
        let h = harness(MockApi::ok());
        let mut form = filled_form();

        let outcome = h.use_case.submit(&mut form).await;

        let SubmitOutcome::Created(goal) = outcome else {
            panic!("expected created outcome");
        };
        assert_eq!(goal.title.as_str(), "Meditar");
        assert_eq!(goal.desired_weekly_frequency.get(), 3);

        assert_eq!(form.title(), "");
        assert_eq!(
            form.desired_weekly_frequency().coerce(),
            f64::from(WeeklyFrequency::DEFAULT.get())
        );
        assert_eq!(
            *h.cache.invalidated.lock().unwrap(),
            vec![QueryKey::PendingGoals, QueryKey::Summary]
        );
        assert_eq!(
            *h.toasts.success.lock().unwrap(),
            vec![GOAL_CREATED_MESSAGE.to_string()]
        );
        assert!(h.toasts.error.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_keeps_form_and_cache() {
        let h = harness(MockApi::failing());
        let mut form = filled_form();

        let outcome = h.use_case.submit(&mut form).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(form, filled_form());
        assert!(h.cache.invalidated.lock().unwrap().is_empty());
        assert_eq!(
            *h.toasts.error.lock().unwrap(),
            vec![GOAL_CREATE_FAILED_MESSAGE.to_string()]
        );
        assert_eq!(h.api.calls(), 1);
    }

    #[tokio::test]
    async fn test_string_frequency_is_coerced_before_sending() {
        let h = harness(MockApi::ok());
        let mut form = filled_form();
        form.set_desired_weekly_frequency("5");

        let outcome = h.use_case.submit(&mut form).await;

        let SubmitOutcome::Created(goal) = outcome else {
            panic!("expected created outcome");
        };
        assert_eq!(goal.desired_weekly_frequency.get(), 5);
    }
}
