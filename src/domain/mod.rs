mod clock;
mod currency;
mod ledger;
mod money;
mod record;

pub use clock::*;
pub use currency::*;
pub use ledger::*;
pub use money::*;
pub use record::*;
