pub mod clock;
pub mod task;
pub mod task_list;

#[allow(unused_imports)]
pub use clock::{Clock, FixedClock, SystemClock};
pub use task::Task;
#[allow(unused_imports)]
pub use task_list::{Listing, ListingEntry, TaskList};
