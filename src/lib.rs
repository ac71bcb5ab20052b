//! CV builder core: an in-memory résumé record edited through pure
//! section operations, rendered into one of several visual templates
//! and turned into a templated cover letter. The web module exposes the
//! same operations as a session-scoped JSON API.

pub mod cover_letter;
pub mod editor;
pub mod environment;
pub mod render;
pub mod session;
pub mod types;
pub mod utils;
pub mod validators;
pub mod web;

pub use environment::EnvironmentConfig;
pub use render::{render_html, TemplateId};
pub use session::SessionStore;
pub use types::CvData;
pub use web::start_web_server;
