//! In-memory model repository.

use crate::content::{ContentKind, ModelContent};
use crate::repository::{check_content, ModelRepository, RepositoryError, RepositoryResult};
use mapspec_core::ModelId;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};

/// One recorded fetch request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRecord {
    /// Requested model
    pub id: ModelId,
    /// Requested kind
    pub kind: ContentKind,
    /// Requested platform key
    pub platform_key: Option<String>,
    /// Whether content was returned
    pub hit: bool,
}

/// Map-backed repository
///
/// Content is stored per model ID and optional platform key. Every fetch is
/// recorded so callers can inspect the request sequence.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    /// Content by (model, platform key)
    models: HashMap<(ModelId, Option<String>), ModelContent>,
    /// Models whose fetch fails with a backend error
    failing: HashSet<ModelId>,
    /// Fetch log
    log: Mutex<Vec<FetchRecord>>,
}

impl InMemoryRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store platform-agnostic content
    pub fn insert(&mut self, content: impl Into<ModelContent>) {
        let content = content.into();
        self.models.insert((content.id().clone(), None), content);
    }

    /// Store content for one platform
    pub fn insert_for_platform(&mut self, platform_key: &str, content: impl Into<ModelContent>) {
        let content = content.into();
        self.models
            .insert((content.id().clone(), Some(platform_key.to_string())), content);
    }

    /// Store platform-agnostic content (builder form)
    #[must_use]
    pub fn with(mut self, content: impl Into<ModelContent>) -> Self {
        self.insert(content);
        self
    }

    /// Store content for one platform (builder form)
    #[must_use]
    pub fn with_platform(mut self, platform_key: &str, content: impl Into<ModelContent>) -> Self {
        self.insert_for_platform(platform_key, content);
        self
    }

    /// Make every fetch of a model fail
    #[must_use]
    pub fn with_failure(mut self, id: ModelId) -> Self {
        self.failing.insert(id);
        self
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if repository is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Fetches performed so far, oldest first
    #[must_use]
    pub fn fetch_log(&self) -> Vec<FetchRecord> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, id: &ModelId, kind: ContentKind, platform_key: Option<&str>, hit: bool) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(FetchRecord {
                id: id.clone(),
                kind,
                platform_key: platform_key.map(str::to_string),
                hit,
            });
    }
}

impl ModelRepository for InMemoryRepository {
    fn fetch(
        &self,
        id: &ModelId,
        kind: ContentKind,
        platform_key: Option<&str>,
    ) -> RepositoryResult<Option<ModelContent>> {
        if self.failing.contains(id) {
            self.record(id, kind, platform_key, false);
            return Err(RepositoryError::Backend(format!("fetch of {} failed", id)));
        }

        let key = (id.clone(), platform_key.map(str::to_string));
        let content = self.models.get(&key).cloned();
        self.record(id, kind, platform_key, content.is_some());

        match content {
            Some(content) => {
                check_content(id, kind, &content)?;
                Ok(Some(content))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapspec_core::{FunctionblockModel, Infomodel};

    fn id(s: &str) -> ModelId {
        ModelId::from_pretty_format(s).unwrap()
    }

    #[test]
    fn test_platform_specific_and_agnostic() {
        let switch = id("com.acme:Switch:1.0.0");
        let mut specific = FunctionblockModel::new(switch.clone());
        specific.display_name = Some("lwm2m switch".to_string());

        let repo = InMemoryRepository::new()
            .with(FunctionblockModel::new(switch.clone()))
            .with_platform("lwm2m", specific);
        assert_eq!(repo.len(), 2);

        let generic = repo
            .fetch(&switch, ContentKind::Functionblock, None)
            .unwrap();
        let Some(ModelContent::Functionblock(generic)) = generic else {
            panic!("expected generic function block content");
        };
        assert!(generic.display_name.is_none());

        let lwm2m = repo
            .fetch(&switch, ContentKind::Functionblock, Some("lwm2m"))
            .unwrap();
        let Some(ModelContent::Functionblock(lwm2m)) = lwm2m else {
            panic!("expected lwm2m function block content");
        };
        assert_eq!(lwm2m.display_name.as_deref(), Some("lwm2m switch"));

        assert!(repo
            .fetch(&switch, ContentKind::Functionblock, Some("aws"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_fetch_log() {
        let lamp = id("com.acme:Lamp:1.0.0");
        let repo = InMemoryRepository::new().with(Infomodel::new(lamp.clone()));

        repo.fetch(&lamp, ContentKind::Infomodel, Some("aws")).unwrap();
        repo.fetch(&lamp, ContentKind::Infomodel, None).unwrap();

        let log = repo.fetch_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].platform_key.as_deref(), Some("aws"));
        assert!(!log[0].hit);
        assert!(log[1].platform_key.is_none());
        assert!(log[1].hit);
    }

    #[test]
    fn test_wrong_kind_is_error() {
        let lamp = id("com.acme:Lamp:1.0.0");
        let repo = InMemoryRepository::new().with(Infomodel::new(lamp.clone()));

        let err = repo
            .fetch(&lamp, ContentKind::Functionblock, None)
            .unwrap_err();
        assert!(matches!(err, RepositoryError::UnexpectedContent { .. }));
    }

    #[test]
    fn test_failure_injection() {
        let lamp = id("com.acme:Lamp:1.0.0");
        let repo = InMemoryRepository::new().with_failure(lamp.clone());

        let err = repo.fetch(&lamp, ContentKind::Infomodel, None).unwrap_err();
        assert!(matches!(err, RepositoryError::Backend(_)));
    }
}
