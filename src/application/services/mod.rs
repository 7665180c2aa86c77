//! Application services - Business logic orchestration

pub mod address_book;
pub mod command_service;
pub mod session_service;

pub use address_book::AddressBook;
pub use command_service::CommandService;
pub use session_service::SessionService;
