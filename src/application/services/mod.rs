//! Business logic services for the application layer.

pub mod code_allocator;
pub mod resolve_service;
pub mod shorten_service;

pub use code_allocator::CodeAllocator;
pub use resolve_service::ResolveService;
pub use shorten_service::ShortenService;
