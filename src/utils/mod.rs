pub mod clock;
pub mod deferred;
