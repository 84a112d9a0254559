//! The service's operations, one typed handler per file.

pub mod create_person;
pub mod home;
pub mod lookup_person;
pub mod query_person;
pub mod update_person;

pub use create_person::CreatePersonController;
pub use home::HomeController;
pub use lookup_person::LookupPersonController;
pub use query_person::QueryPersonController;
pub use update_person::UpdatePersonController;

use crate::dispatcher::Dispatcher;

/// Register every handler with the dispatcher under the name the route
/// table refers to it by.
///
/// # Safety
///
/// Spawns handler coroutines; the caller must ensure the may runtime is
/// initialized (same requirements as `Dispatcher::register_typed`).
pub unsafe fn register_all(dispatcher: &mut Dispatcher) {
    unsafe {
        dispatcher.register_typed("home", HomeController);
        dispatcher.register_typed("create_person", CreatePersonController);
        dispatcher.register_typed("query_person", QueryPersonController);
        dispatcher.register_typed("lookup_person", LookupPersonController);
        dispatcher.register_typed("update_person", UpdatePersonController);
    }
}
