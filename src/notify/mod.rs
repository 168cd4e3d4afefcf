/// Toast notifications
///
/// - `notification.rs` - the `Notification` record and its severity
/// - `manager.rs` - the `Notifier` sink trait and the `Toasts` queue behind the UI

pub mod manager;
pub mod notification;

pub use manager::{Notifier, Toasts};
pub use notification::{Notification, NotificationId, Severity};
