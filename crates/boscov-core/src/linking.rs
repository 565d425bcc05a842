//! Genre Association
//!
//! A newly created movie is linked to each checked genre, one request per
//! genre. The movie already exists at that point, so a failed link cannot be
//! rolled back; the remaining genres are still attempted and the caller gets
//! the list of genres left unlinked.

use std::future::Future;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinkReport {
    pub movie_id: u32,
    pub linked: Vec<u32>,
    pub failed: Vec<(u32, ApiError)>,
}

impl LinkReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_genres(&self) -> Vec<u32> {
        self.failed.iter().map(|(genre_id, _)| *genre_id).collect()
    }
}

/// Link `movie_id` to every genre in order, awaiting each request
pub async fn link_genres<F, Fut>(movie_id: u32, genre_ids: &[u32], mut link: F) -> LinkReport
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let mut report = LinkReport { movie_id, ..Default::default() };
    for &genre_id in genre_ids {
        match link(movie_id, genre_id).await {
            Ok(()) => report.linked.push(genre_id),
            Err(e) => {
                log::warn!("failed to link genre {} to movie {}: {}", genre_id, movie_id, e);
                report.failed.push((genre_id, e));
            }
        }
    }
    report
}

/// Names the genres that were left out, using their descriptions when known
pub fn partial_link_message(report: &LinkReport, describe: impl Fn(u32) -> Option<String>) -> Option<String> {
    if report.is_complete() {
        return None;
    }
    let names: Vec<String> = report
        .failed_genres()
        .into_iter()
        .map(|id| describe(id).unwrap_or_else(|| format!("#{}", id)))
        .collect();
    Some(format!(
        "Filme criado, mas não foi possível vincular os gêneros: {}",
        names.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[tokio::test]
    async fn test_all_genres_linked() {
        let calls = RefCell::new(Vec::new());
        let report = link_genres(7, &[1, 2, 3], |movie, genre| {
            calls.borrow_mut().push((movie, genre));
            async { Ok(()) }
        })
        .await;

        assert_eq!(*calls.borrow(), vec![(7, 1), (7, 2), (7, 3)]);
        assert_eq!(report.linked, vec![1, 2, 3]);
        assert!(report.is_complete());
        assert_eq!(partial_link_message(&report, |_| None), None);
    }

    #[tokio::test]
    async fn test_failed_link_is_reported() {
        let report = link_genres(7, &[1, 2, 3], |_, genre| async move {
            if genre == 2 {
                Err(ApiError::Status { status: 500, message: None })
            } else {
                Ok(())
            }
        })
        .await;

        assert_eq!(report.linked, vec![1, 3]);
        assert_eq!(report.failed_genres(), vec![2]);
        assert!(!report.is_complete());

        let named = partial_link_message(&report, |id| (id == 2).then(|| "Drama".to_string()));
        assert_eq!(named.as_deref(), Some("Filme criado, mas não foi possível vincular os gêneros: Drama"));
        let unnamed = partial_link_message(&report, |_| None);
        assert_eq!(unnamed.as_deref(), Some("Filme criado, mas não foi possível vincular os gêneros: #2"));
    }

    #[tokio::test]
    async fn test_no_genres_selected() {
        let report = link_genres(7, &[], |_, _| async { Ok(()) }).await;
        assert!(report.is_complete());
        assert!(report.linked.is_empty());
    }
}
