pub mod formatter;
pub mod ledger;
pub mod record;
pub mod shared;

pub use formatter::*;
pub use ledger::ConversionHistory;
pub use record::ConversionRecord;
pub use shared::SharedHistory;
