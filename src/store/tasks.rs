use crate::store::document::JsonDocument;
use crate::types::{AppError, Result, Task, UpdateTaskRequest};
use std::path::PathBuf;
use uuid::Uuid;

/// Ownership-scoped task collection.
///
/// Every operation takes the identity resolved by the auth middleware and
/// filters by `(id, owner)`, so a task is visible and mutable only by its
/// owner. Mutations run as one serialized load-mutate-persist cycle on the
/// underlying document.
pub struct TaskStore {
    doc: JsonDocument<Task>,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: JsonDocument::new(path),
        }
    }

    /// All tasks belonging to `owner`, in insertion order.
    pub async fn list(&self, owner: &str) -> Result<Vec<Task>> {
        let tasks = self.doc.read().await?;
        Ok(tasks.into_iter().filter(|t| t.owner == owner).collect())
    }

    /// The task with matching `(id, owner)`, or `NotFound`.
    pub async fn get(&self, owner: &str, id: &str) -> Result<Task> {
        let tasks = self.doc.read().await?;
        tasks
            .into_iter()
            .find(|t| t.id == id && t.owner == owner)
            .ok_or_else(|| AppError::NotFound(format!("Task '{}' not found", id)))
    }

    /// Creates a task from the caller-supplied payload.
    ///
    /// `id` is freshly generated and `owner` comes from the resolved
    /// identity; both keys are discarded from the payload rather than
    /// merged, so the caller can never pick them.
    pub async fn create(
        &self,
        owner: &str,
        mut payload: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Task> {
        payload.remove("id");
        payload.remove("owner");
        let title = take_string_field(&mut payload, "title")?;
        let description = take_string_field(&mut payload, "description")?;

        let task = Task {
            id: Uuid::new_v4().to_string(),
            owner: owner.to_string(),
            title,
            description,
            extra: payload,
        };

        self.doc
            .update({
                let task = task.clone();
                move |tasks| {
                    tasks.push(task);
                    Ok(())
                }
            })
            .await?;

        Ok(task)
    }

    /// Replaces the allow-listed mutable fields of an owned task.
    ///
    /// `id`, `owner`, and any extra fields are left untouched.
    pub async fn update(&self, owner: &str, id: &str, payload: UpdateTaskRequest) -> Result<Task> {
        self.doc
            .update(|tasks| {
                let task = tasks
                    .iter_mut()
                    .find(|t| t.id == id && t.owner == owner)
                    .ok_or_else(|| AppError::NotFound(format!("Task '{}' not found", id)))?;

                if let Some(title) = payload.title {
                    task.title = title;
                }
                if let Some(description) = payload.description {
                    task.description = description;
                }

                Ok(task.clone())
            })
            .await
    }

    /// Removes any task matching `(id, owner)`.
    ///
    /// Idempotent: deleting an absent id persists the unchanged collection
    /// and still succeeds.
    pub async fn delete(&self, owner: &str, id: &str) -> Result<()> {
        self.doc
            .update(|tasks| {
                tasks.retain(|t| !(t.id == id && t.owner == owner));
                Ok(())
            })
            .await
    }
}

fn take_string_field(
    payload: &mut serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> Result<String> {
    match payload.remove(key) {
        None => Ok(String::new()),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(_) => Err(AppError::InvalidInput(format!(
            "Field '{}' must be a string",
            key
        ))),
    }
}
