pub mod console;
pub mod logging;
pub mod pipe;
pub mod record;
pub mod simplify;
pub mod value;
