pub mod file;
pub mod memory;

// Re-export commonly used types
pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;
