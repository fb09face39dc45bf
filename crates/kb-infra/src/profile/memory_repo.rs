use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use kb_core::ports::{ProfileRepositoryPort, ServiceError};
use kb_core::{ProfileDocument, ProfilePatch};

/// Profile store held in memory, for tests and demos.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    documents: RwLock<HashMap<String, ProfileDocument>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the given documents.
    pub fn with_documents(documents: impl IntoIterator<Item = ProfileDocument>) -> Self {
        Self {
            documents: RwLock::new(
                documents
                    .into_iter()
                    .map(|doc| (doc.uid.clone(), doc))
                    .collect(),
            ),
        }
    }

    pub async fn insert(&self, doc: ProfileDocument) {
        self.documents.write().await.insert(doc.uid.clone(), doc);
    }
}

#[async_trait]
impl ProfileRepositoryPort for InMemoryProfileRepository {
    async fn fetch_profile(&self, uid: &str) -> Result<Option<ProfileDocument>, ServiceError> {
        Ok(self.documents.read().await.get(uid).cloned())
    }

    async fn update_fields(&self, uid: &str, patch: &ProfilePatch) -> Result<(), ServiceError> {
        if patch.is_empty() {
            return Ok(());
        }
        let mut documents = self.documents.write().await;
        let doc = documents
            .entry(uid.to_string())
            .or_insert_with(|| ProfileDocument::new(uid));
        patch.apply_to(doc);
        Ok(())
    }
}
