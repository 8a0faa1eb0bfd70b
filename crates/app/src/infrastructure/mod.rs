//! External dependency implementations: port traits plus the concrete
//! HTTP clients, clock/random, and the scripted dev wallet.

pub mod clock;
pub mod dev_wallet;
pub mod imagegen;
pub mod narrative;
pub mod pinning;
pub mod ports;
pub mod reward;
