//! API endpoint modules.

mod job;
mod node;
mod record;
mod redirect;
mod zone;
mod zone_file;

pub use job::JobApi;
pub use node::NodeApi;
pub use record::RecordApi;
pub use redirect::RedirectApi;
pub use zone::ZoneApi;
pub use zone_file::ZoneFileApi;
