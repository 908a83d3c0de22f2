pub mod books;
pub mod employees;
pub mod init;
pub mod misc;
pub mod reports;
pub mod sales;
pub mod shell;

pub use books::handle_book;
pub use employees::handle_employee;
pub use init::handle_init;
pub use misc::handle_completions;
pub use reports::handle_report;
pub use sales::handle_sale;
pub use shell::handle_shell;
