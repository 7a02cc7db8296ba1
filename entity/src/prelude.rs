pub use super::class::Entity as Class;
pub use super::payment_history::Entity as PaymentHistory;
pub use super::selected_class::Entity as SelectedClass;
pub use super::user::Entity as User;
