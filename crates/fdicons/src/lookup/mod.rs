//! Icon lookup: criteria, results and the resolution algorithm.

mod criteria;
mod icon;
mod resolver;

pub use criteria::{Criteria, DEFAULT_EXTENSIONS};
pub use icon::{AttachPoint, Icon, TextRect};

pub(crate) use resolver::resolve;
