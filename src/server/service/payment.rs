//! Payment ledger service: payment intents, enrollment and payment history.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{class::ClassRepository, payment::PaymentRepository},
    error::AppError,
    gateway::PaymentGateway,
    model::{
        class::Class,
        payment::{to_minor_units, PaymentIntent, PaymentRecord, RecordPaymentParam, PAYMENT_CURRENCY},
    },
    service::{class::ClassService, selection::SelectionService},
};

const ALREADY_ENROLLED: &str = "You are already enrolled in this class.";

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn PaymentGateway,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn PaymentGateway) -> Self {
        Self { db, gateway }
    }

    /// Creates a card payment intent for `price` dollars
    ///
    /// # Returns
    /// - `Ok(PaymentIntent)`: Intent with the client secret
    /// - `Err(AppError::BadRequest)`: Price is not a positive number
    /// - `Err(AppError::PaymentErr)`: The gateway refused or failed
    pub async fn create_payment_intent(&self, price: f64) -> Result<PaymentIntent, AppError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(AppError::BadRequest(
                "Price must be a positive number".to_string(),
            ));
        }

        let amount = to_minor_units(price);
        let intent = self
            .gateway
            .create_payment_intent(amount, PAYMENT_CURRENCY)
            .await?;

        tracing::debug!("Created payment intent {} for {} cents", intent.id, amount);

        Ok(intent)
    }

    /// Records a confirmed payment and enrolls the student
    ///
    /// Runs in one transaction. The seat is taken first so the write lock is held before
    /// anything is read; a second payment for the same (user, class) pair rolls it back.
    /// The matching selection is then dropped and the payment record appended.
    ///
    /// # Returns
    /// - `Ok(PaymentRecord)`: The persisted record
    /// - `Err(AppError::BadRequest)`: Missing email or invalid price
    /// - `Err(AppError::NotFound)`: Class does not exist
    /// - `Err(AppError::SeatsExhausted)`: No seats left
    /// - `Err(AppError::Conflict)`: The student already paid for this class
    pub async fn record_payment(
        &self,
        param: RecordPaymentParam,
    ) -> Result<PaymentRecord, AppError> {
        if param.user_email.trim().is_empty() {
            return Err(AppError::BadRequest("User email is required".to_string()));
        }
        if !param.price.is_finite() || param.price < 0.0 {
            return Err(AppError::BadRequest(
                "Price must be a non-negative number".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let reserved = ClassService::new(&txn)
            .decrement_seat_on_enroll(param.class_id)
            .await;

        let payment_repo = PaymentRepository::new(&txn);

        // A missing class wins over a duplicate payment, which wins over a full class.
        if !matches!(reserved, Err(AppError::NotFound(_)))
            && payment_repo
                .exists(&param.user_email, param.class_id)
                .await?
        {
            return Err(AppError::Conflict(ALREADY_ENROLLED.to_string()));
        }
        reserved?;

        SelectionService::new(&txn)
            .remove(&param.user_email, param.class_id)
            .await?;

        let record = payment_repo
            .create(param)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, ALREADY_ENROLLED))?;

        txn.commit().await?;

        tracing::info!(
            "Enrolled {} in class {} (payment {})",
            record.user_email,
            record.class_id,
            record.id
        );

        Ok(PaymentRecord::from_entity(record))
    }

    /// Gets the classes a student has paid for
    ///
    /// Payments whose class has since been deleted are skipped.
    pub async fn get_enrolled_classes(&self, user_email: &str) -> Result<Vec<Class>, AppError> {
        let class_ids = PaymentRepository::new(self.db)
            .get_class_ids_by_user(user_email)
            .await?;

        let classes = ClassRepository::new(self.db).get_by_ids(&class_ids).await?;

        if classes.len() < class_ids.len() {
            tracing::warn!(
                "{} has {} payment(s) referencing deleted classes",
                user_email,
                class_ids.len() - classes.len()
            );
        }

        classes.into_iter().map(Class::from_entity).collect()
    }

    /// Gets a student's payment records, newest first
    pub async fn get_payment_history(
        &self,
        user_email: &str,
    ) -> Result<Vec<PaymentRecord>, AppError> {
        let records = PaymentRepository::new(self.db)
            .get_by_user(user_email)
            .await?;

        Ok(records.into_iter().map(PaymentRecord::from_entity).collect())
    }
}
