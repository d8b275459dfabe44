mod alert;
mod confidence_bar;
mod util;

pub use self::alert::*;
pub use self::confidence_bar::*;
pub use self::util::*;
