//! Movie Removal Workflow
//!
//! Removing a movie soft-deletes its dependents first: every rating, then
//! every genre association, then the movie itself. Steps run strictly one
//! after another, each request awaited before the next starts. There is no
//! transaction and no rollback, so a failed run can leave ratings deleted
//! while the movie and its genre links remain.

use async_trait::async_trait;

use crate::error::{ApiError, CascadeError};
use crate::models::{GenreLink, Rating};

/// Backend operations the workflow needs
#[async_trait(?Send)]
pub trait MovieRemovalApi {
    async fn ratings_for_movie(&self, movie_id: u32) -> Result<Vec<Rating>, ApiError>;
    async fn genre_links_for_movie(&self, movie_id: u32) -> Result<Vec<GenreLink>, ApiError>;
    async fn delete_rating(&self, rating_id: u32) -> Result<(), ApiError>;
    async fn delete_genre_link(&self, link_id: u32) -> Result<(), ApiError>;
    async fn delete_movie(&self, movie_id: u32) -> Result<(), ApiError>;
}

/// One soft-delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeleteStep {
    Rating(u32),
    GenreLink(u32),
    Movie(u32),
}

/// What to do when a step fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failed step; later steps are skipped
    #[default]
    AbortOnFirst,
    /// Attempt every step and report all failures
    CollectAll,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepFailure {
    pub step: DeleteStep,
    pub error: ApiError,
}

/// Outcome of a run, successful or not
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CascadeReport {
    pub movie_id: u32,
    pub planned: usize,
    pub completed: Vec<DeleteStep>,
    pub failures: Vec<StepFailure>,
    pub skipped: Vec<DeleteStep>,
}

impl CascadeReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty() && self.completed.len() == self.planned
    }
}

/// Ordered steps: ratings, then genre links, then the movie (N + M + 1)
pub fn plan_movie_removal(movie_id: u32, ratings: &[Rating], links: &[GenreLink]) -> Vec<DeleteStep> {
    ratings
        .iter()
        .map(|r| DeleteStep::Rating(r.id))
        .chain(links.iter().map(|l| DeleteStep::GenreLink(l.id)))
        .chain(std::iter::once(DeleteStep::Movie(movie_id)))
        .collect()
}

async fn run_step<A: MovieRemovalApi + ?Sized>(api: &A, step: DeleteStep) -> Result<(), ApiError> {
    match step {
        DeleteStep::Rating(id) => api.delete_rating(id).await,
        DeleteStep::GenreLink(id) => api.delete_genre_link(id).await,
        DeleteStep::Movie(id) => api.delete_movie(id).await,
    }
}

/// Execute a prepared plan in order
pub async fn execute_plan<A: MovieRemovalApi + ?Sized>(
    api: &A,
    movie_id: u32,
    plan: Vec<DeleteStep>,
    policy: FailurePolicy,
) -> CascadeReport {
    let mut report = CascadeReport { movie_id, planned: plan.len(), ..Default::default() };
    let mut steps = plan.into_iter();

    while let Some(step) = steps.next() {
        match run_step(api, step).await {
            Ok(()) => {
                log::debug!("movie {} removal: {:?} done", movie_id, step);
                report.completed.push(step);
            }
            Err(error) => {
                log::warn!("movie {} removal: {:?} failed: {}", movie_id, step, error);
                report.failures.push(StepFailure { step, error });
                if policy == FailurePolicy::AbortOnFirst {
                    report.skipped.extend(steps.by_ref());
                    break;
                }
            }
        }
    }
    report
}

/// Fetch the movie's dependents, then soft-delete everything in order
pub async fn remove_movie<A: MovieRemovalApi + ?Sized>(
    api: &A,
    movie_id: u32,
    policy: FailurePolicy,
) -> Result<CascadeReport, CascadeError> {
    let ratings = api
        .ratings_for_movie(movie_id)
        .await
        .map_err(|source| CascadeError::Fetch { movie_id, source })?;
    let links = api
        .genre_links_for_movie(movie_id)
        .await
        .map_err(|source| CascadeError::Fetch { movie_id, source })?;

    let plan = plan_movie_removal(movie_id, &ratings, &links);
    log::info!(
        "removing movie {}: {} ratings, {} genre links",
        movie_id,
        ratings.len(),
        links.len()
    );

    let report = execute_plan(api, movie_id, plan, policy).await;
    if report.failures.is_empty() {
        Ok(report)
    } else {
        Err(CascadeError::Partial { report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every call; fails the configured steps
    #[derive(Default)]
    struct FakeApi {
        ratings: Vec<u32>,
        links: Vec<u32>,
        failing: Vec<DeleteStep>,
        fail_fetch: bool,
        calls: RefCell<Vec<DeleteStep>>,
    }

    impl FakeApi {
        fn new(ratings: &[u32], links: &[u32]) -> Self {
            Self { ratings: ratings.to_vec(), links: links.to_vec(), ..Default::default() }
        }

        fn record(&self, step: DeleteStep) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(step);
            if self.failing.contains(&step) {
                Err(ApiError::Status { status: 500, message: None })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl MovieRemovalApi for FakeApi {
        async fn ratings_for_movie(&self, movie_id: u32) -> Result<Vec<Rating>, ApiError> {
            if self.fail_fetch {
                return Err(ApiError::Network("offline".into()));
            }
            Ok(self
                .ratings
                .iter()
                .map(|&id| Rating { id, movie_id, score: 3.0, ..Default::default() })
                .collect())
        }

        async fn genre_links_for_movie(&self, movie_id: u32) -> Result<Vec<GenreLink>, ApiError> {
            Ok(self
                .links
                .iter()
                .map(|&id| GenreLink { id, movie_id, genre_id: 1, status: Some(1) })
                .collect())
        }

        async fn delete_rating(&self, rating_id: u32) -> Result<(), ApiError> {
            self.record(DeleteStep::Rating(rating_id))
        }

        async fn delete_genre_link(&self, link_id: u32) -> Result<(), ApiError> {
            self.record(DeleteStep::GenreLink(link_id))
        }

        async fn delete_movie(&self, movie_id: u32) -> Result<(), ApiError> {
            self.record(DeleteStep::Movie(movie_id))
        }
    }

    #[test]
    fn test_plan_order() {
        let ratings = vec![Rating { id: 1, ..Default::default() }, Rating { id: 2, ..Default::default() }];
        let links = vec![GenreLink { id: 10, ..Default::default() }];
        assert_eq!(
            plan_movie_removal(7, &ratings, &links),
            vec![
                DeleteStep::Rating(1),
                DeleteStep::Rating(2),
                DeleteStep::GenreLink(10),
                DeleteStep::Movie(7),
            ]
        );
        assert_eq!(plan_movie_removal(7, &[], &[]), vec![DeleteStep::Movie(7)]);
    }

    #[tokio::test]
    async fn test_successful_run_issues_n_plus_m_plus_one_requests() {
        let api = FakeApi::new(&[1, 2, 3], &[10, 11]);
        let report = remove_movie(&api, 7, FailurePolicy::AbortOnFirst).await.unwrap();

        let expected = vec![
            DeleteStep::Rating(1),
            DeleteStep::Rating(2),
            DeleteStep::Rating(3),
            DeleteStep::GenreLink(10),
            DeleteStep::GenreLink(11),
            DeleteStep::Movie(7),
        ];
        assert_eq!(*api.calls.borrow(), expected);
        assert_eq!(report.planned, 6);
        assert_eq!(report.completed, expected);
        assert!(report.is_complete());
    }

    #[tokio::test]
    async fn test_failure_aborts_remaining_steps() {
        let mut api = FakeApi::new(&[1, 2], &[10]);
        api.failing = vec![DeleteStep::Rating(2)];

        let err = remove_movie(&api, 7, FailurePolicy::AbortOnFirst).await.unwrap_err();
        let CascadeError::Partial { report } = err else { panic!("expected partial failure") };

        // rating 1 stays deleted, nothing after rating 2 was attempted
        assert_eq!(*api.calls.borrow(), vec![DeleteStep::Rating(1), DeleteStep::Rating(2)]);
        assert_eq!(report.completed, vec![DeleteStep::Rating(1)]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].step, DeleteStep::Rating(2));
        assert_eq!(report.skipped, vec![DeleteStep::GenreLink(10), DeleteStep::Movie(7)]);
        assert!(!report.is_complete());
    }

    #[tokio::test]
    async fn test_genre_link_failure_skips_movie() {
        let mut api = FakeApi::new(&[1], &[10, 11]);
        api.failing = vec![DeleteStep::GenreLink(10)];

        let err = remove_movie(&api, 7, FailurePolicy::AbortOnFirst).await.unwrap_err();
        let CascadeError::Partial { report } = err else { panic!("expected partial failure") };

        assert_eq!(*api.calls.borrow(), vec![DeleteStep::Rating(1), DeleteStep::GenreLink(10)]);
        assert!(!api.calls.borrow().contains(&DeleteStep::Movie(7)));
        assert_eq!(report.completed, vec![DeleteStep::Rating(1)]);
        assert_eq!(report.failures[0].step, DeleteStep::GenreLink(10));
        assert_eq!(report.skipped, vec![DeleteStep::GenreLink(11), DeleteStep::Movie(7)]);
    }

    #[tokio::test]
    async fn test_movie_step_failure_keeps_dependents_deleted() {
        let mut api = FakeApi::new(&[1, 2], &[10]);
        api.failing = vec![DeleteStep::Movie(7)];

        let err = remove_movie(&api, 7, FailurePolicy::AbortOnFirst).await.unwrap_err();
        let CascadeError::Partial { report } = err else { panic!("expected partial failure") };

        let dependents = vec![DeleteStep::Rating(1), DeleteStep::Rating(2), DeleteStep::GenreLink(10)];
        assert_eq!(report.completed, dependents);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].step, DeleteStep::Movie(7));
        assert!(report.skipped.is_empty());
        assert_eq!(api.calls.borrow().len(), 4);
    }

    #[tokio::test]
    async fn test_collect_all_attempts_every_step() {
        let mut api = FakeApi::new(&[1, 2], &[10]);
        api.failing = vec![DeleteStep::Rating(1), DeleteStep::GenreLink(10)];

        let err = remove_movie(&api, 7, FailurePolicy::CollectAll).await.unwrap_err();
        let CascadeError::Partial { report } = err else { panic!("expected partial failure") };

        assert_eq!(api.calls.borrow().len(), 4);
        assert_eq!(report.completed, vec![DeleteStep::Rating(2), DeleteStep::Movie(7)]);
        assert_eq!(report.failures.len(), 2);
        assert!(report.skipped.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_deletes_nothing() {
        let mut api = FakeApi::new(&[1], &[10]);
        api.fail_fetch = true;

        let err = remove_movie(&api, 7, FailurePolicy::AbortOnFirst).await.unwrap_err();
        assert!(matches!(err, CascadeError::Fetch { movie_id: 7, .. }));
        assert!(api.calls.borrow().is_empty());
    }
}
