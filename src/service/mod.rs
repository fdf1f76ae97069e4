//! Services: domain rules and paging on top of the store.

mod authors;
mod books;
mod paging;
mod publishers;
mod validation;
pub use authors::AuthorsService;
pub use books::BooksService;
pub use paging::{PaginatedList, PUBLISHER_PAGE_SIZE};
pub use publishers::{PublishersService, SORT_NAME_DESC};
pub use validation::validate_publisher_name;
