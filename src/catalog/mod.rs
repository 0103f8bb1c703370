//! Static catalogs
//!
//! Fixed data tables bundled with the app: scripted demo flows, marketplace
//! assets, electricity providers, and the chat entry points shown in the
//! sidebar.

pub mod chats;
pub mod flows;
pub mod market;
pub mod providers;
