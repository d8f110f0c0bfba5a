mod list;

pub use list::{execute_list, list_account, write_listing, BANNER_SEPARATOR};
