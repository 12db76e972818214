// ============================================================================
// STORES - Rc<RefCell> state containers injected into the services
// ============================================================================

pub mod collection_store;
pub mod reactivity;
pub mod session_store;

pub use collection_store::{CollectionStore, TimesheetStore, UserStore};
pub use reactivity::{ReactiveState, SubscriptionId};
pub use session_store::{AuthState, SessionStore};
