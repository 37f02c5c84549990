#[cfg(feature = "download")]
mod http;
mod load;
mod selection;
mod source;

#[cfg(feature = "download")]
pub use http::HttpSource;
pub use load::{load_county, load_index, LoadError};
pub use selection::{CountySelection, SelectionTicket};
pub use source::{DataSink, DataSource, DiskSource, MemSource};
