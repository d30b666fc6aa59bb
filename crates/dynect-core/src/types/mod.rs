mod envelope;
mod path;
mod record;
mod redirect;
mod shape;
mod zone;

pub use envelope::*;
pub use path::*;
pub use record::*;
pub use redirect::*;
pub use shape::*;
pub use zone::*;
