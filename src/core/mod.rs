pub mod clock;
pub mod countdown;
pub mod log;
pub mod reminder;
pub mod renderer;
pub mod runtime;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod tabs;
