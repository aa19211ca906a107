// ABOUTME: Integration tests for status lookups and existence checks.
// ABOUTME: Exercises not-found, empty, valid, corrupt and unreachable-store cases.

mod support;

use depstat::deployment::{
    DeploymentStatus, StatusErrorKind, StatusRepository, is_not_found_error,
};
use depstat::store::{MemoryStore, StoreError};
use depstat::types::KeyPrefix;
use std::sync::Arc;
use support::UnreachableStore;

const PREFIX: &str = "it/deployments";

fn repository() -> StatusRepository<MemoryStore> {
    support::init_tracing();
    StatusRepository::new(MemoryStore::new(), KeyPrefix::new(PREFIX).unwrap())
}

fn status_key(id: &str) -> String {
    format!("{PREFIX}/{id}/status")
}

mod missing_record {
    use super::*;

    #[tokio::test]
    async fn get_status_reports_not_found() {
        let repo = repository();

        let err = repo.get_status("never-created").await.unwrap_err();
        assert_eq!(err.kind(), StatusErrorKind::NotFound);
        assert!(is_not_found_error(&err));
        assert_eq!(err.deployment_id(), Some("never-created"));
    }

    #[tokio::test]
    async fn exists_is_false() {
        let repo = repository();
        assert!(!repo.exists("never-created").await.unwrap());
    }

    #[tokio::test]
    async fn removed_record_is_not_found_again() {
        let repo = repository();
        repo.store().put(status_key("d1"), "DEPLOYED");
        assert!(repo.exists("d1").await.unwrap());

        repo.store().remove(&status_key("d1"));
        assert!(!repo.exists("d1").await.unwrap());
    }
}

mod empty_record {
    use super::*;

    #[tokio::test]
    async fn behaves_like_missing_record() {
        let repo = repository();
        repo.store().put(status_key("empty"), "");

        let err = repo.get_status("empty").await.unwrap_err();
        assert_eq!(err.kind(), StatusErrorKind::NotFound);
        assert_eq!(err.deployment_id(), Some("empty"));
        assert!(!repo.exists("empty").await.unwrap());
    }
}

mod valid_record {
    use super::*;

    #[tokio::test]
    async fn every_status_reads_back_in_any_case() {
        let repo = repository();

        for status in DeploymentStatus::iter() {
            let id = format!("dep-{}", status.as_str().to_lowercase());
            for text in [status.as_str().to_string(), status.as_str().to_lowercase()] {
                repo.store().put(status_key(&id), text);
                assert_eq!(repo.get_status(&id).await.unwrap(), status);
                assert!(repo.exists(&id).await.unwrap());
            }
        }
    }

    #[tokio::test]
    async fn status_updates_are_observed() {
        let repo = repository();
        repo.store().put(status_key("d1"), "DEPLOYMENT_IN_PROGRESS");
        assert_eq!(
            repo.get_status("d1").await.unwrap(),
            DeploymentStatus::DeploymentInProgress
        );

        repo.store().put(status_key("d1"), "DEPLOYMENT_FAILED");
        assert_eq!(
            repo.get_status("d1").await.unwrap(),
            DeploymentStatus::DeploymentFailed
        );
    }
}

mod corrupt_record {
    use super::*;

    #[tokio::test]
    async fn get_status_reports_invalid_status() {
        let repo = repository();
        repo.store().put(status_key("bad"), "HALF_DEPLOYED");

        let err = repo.get_status("bad").await.unwrap_err();
        assert_eq!(err.kind(), StatusErrorKind::InvalidStatus);
        assert!(!is_not_found_error(&err));
        assert_eq!(err.invalid_status(), Some("HALF_DEPLOYED"));
    }

    #[tokio::test]
    async fn exists_propagates_the_same_error() {
        let repo = repository();
        repo.store().put(status_key("bad"), "half_deployed");

        let err = repo.exists("bad").await.unwrap_err();
        assert_eq!(err.kind(), StatusErrorKind::InvalidStatus);
        assert_eq!(err.invalid_status(), Some("half_deployed"));
    }
}

mod unreachable_store {
    use super::*;

    fn repository() -> StatusRepository<UnreachableStore> {
        StatusRepository::new(
            UnreachableStore::new("connection refused"),
            KeyPrefix::default(),
        )
    }

    #[tokio::test]
    async fn get_status_passes_store_error_through() {
        let repo = repository();

        let err = repo.get_status("d1").await.unwrap_err();
        assert_eq!(err.kind(), StatusErrorKind::Store);
        assert!(matches!(
            err.store_error(),
            Some(StoreError::Unavailable(reason)) if reason == "connection refused"
        ));
        assert_eq!(repo.store().reads(), 1);
    }

    #[tokio::test]
    async fn exists_passes_store_error_through() {
        let repo = repository();

        let err = repo.exists("d1").await.unwrap_err();
        assert_eq!(err.kind(), StatusErrorKind::Store);
        assert!(!is_not_found_error(&err));
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(repo.store().reads(), 1);
    }
}

mod concurrency {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_lookups_share_one_repository() {
        let store = Arc::new(MemoryStore::new());
        for i in 0..16 {
            if i % 2 == 0 {
                store.put(status_key(&format!("d{i}")), "DEPLOYED");
            }
        }
        let repo = Arc::new(StatusRepository::new(
            store,
            KeyPrefix::new(PREFIX).unwrap(),
        ));

        let lookups = (0..16).map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move { (i, repo.exists(&format!("d{i}")).await) })
        });

        for joined in futures::future::join_all(lookups).await {
            let (i, exists) = joined.unwrap();
            assert_eq!(exists.unwrap(), i % 2 == 0, "deployment d{i}");
        }
    }
}
