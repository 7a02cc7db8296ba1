//! Selection ledger service: a student's cart of classes awaiting payment.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{class::ClassRepository, payment::PaymentRepository, selection::SelectionRepository},
    error::AppError,
    model::{
        class::Class,
        selection::{SelectedClass, Selection},
    },
    service::class::class_not_found,
};

const ALREADY_SELECTED: &str = "You have already added this class.";
const ALREADY_ENROLLED: &str = "You are already enrolled in this class.";

pub struct SelectionService<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SelectionService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a class to a student's selection
    ///
    /// # Returns
    /// - `Ok(Selection)`: The new entry
    /// - `Err(AppError::NotFound)`: Class does not exist
    /// - `Err(AppError::Conflict)`: Student already paid for or already selected the class
    pub async fn add(&self, user_email: &str, class_id: i32) -> Result<Selection, AppError> {
        if ClassRepository::new(self.db)
            .find_by_id(class_id)
            .await?
            .is_none()
        {
            return Err(class_not_found(class_id));
        }

        if PaymentRepository::new(self.db)
            .exists(user_email, class_id)
            .await?
        {
            return Err(AppError::Conflict(ALREADY_ENROLLED.to_string()));
        }

        let repo = SelectionRepository::new(self.db);

        if repo.find(user_email, class_id).await?.is_some() {
            return Err(AppError::Conflict(ALREADY_SELECTED.to_string()));
        }

        let entry = repo
            .create(user_email, class_id)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, ALREADY_SELECTED))?;

        Ok(Selection::from_entity(entry))
    }

    /// Gets a student's raw selection entries
    pub async fn get_by_user(&self, user_email: &str) -> Result<Vec<Selection>, AppError> {
        let repo = SelectionRepository::new(self.db);

        Ok(repo
            .get_by_user(user_email)
            .await?
            .into_iter()
            .map(Selection::from_entity)
            .collect())
    }

    /// Gets a student's selections joined with their classes
    ///
    /// Entries whose class has been deleted are skipped.
    pub async fn get_selected_classes(
        &self,
        user_email: &str,
    ) -> Result<Vec<SelectedClass>, AppError> {
        let selections = self.get_by_user(user_email).await?;
        let class_ids: Vec<i32> = selections.iter().map(|s| s.class_id).collect();

        let classes = ClassRepository::new(self.db)
            .get_by_ids(&class_ids)
            .await?
            .into_iter()
            .map(Class::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let mut selected = Vec::with_capacity(selections.len());
        for selection in selections {
            match classes.iter().find(|c| c.id == selection.class_id) {
                Some(class) => selected.push(SelectedClass {
                    class: class.clone(),
                    selection,
                }),
                None => tracing::warn!(
                    "Selection {} of {} references missing class {}",
                    selection.id,
                    selection.user_email,
                    selection.class_id
                ),
            }
        }

        Ok(selected)
    }

    /// Removes a class from a student's selection
    ///
    /// Removing an entry that does not exist is not an error.
    ///
    /// # Returns
    /// - `Ok(true)`: An entry was removed
    /// - `Ok(false)`: Nothing to remove
    pub async fn remove(&self, user_email: &str, class_id: i32) -> Result<bool, AppError> {
        let repo = SelectionRepository::new(self.db);

        Ok(repo.delete(user_email, class_id).await?)
    }
}
