//! Mojomint application library.
//!
//! Client-side mint orchestration: a questionnaire builds a short
//! narrative, metadata plus generated art is packaged and published to
//! content-addressed storage, and an on-chain mint transaction is
//! submitted on the required network.
//!
//! ## Structure
//!
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `use_cases/` - Workflow orchestration across ports
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
