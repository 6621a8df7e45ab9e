/*
[INPUT]:  Coin and satoshi components supplied by callers
[OUTPUT]: Amount pair with sign validation and documented total
[POS]:    Data layer - payout and invoice amounts
[UPDATE]: When amount representation or subunit scale changes
*/

use serde::{Deserialize, Serialize};

/// Subunits per whole coin, applied to every currency alike.
///
/// LTC and DOGE happen to share BTC's scale today; a currency with a different
/// subunit would make [`Amount::total_satoshis`] wrong for it.
pub const SATOSHIS_PER_COIN: i64 = 100_000_000;

/// Amount split the way the API expects it: whole coins plus satoshis.
///
/// Both components travel to the server unmodified; the combined total is
/// informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Amount {
    pub amount_in_coins: i64,
    pub amount_in_satoshis: i64,
}

impl Amount {
    pub const fn new(amount_in_coins: i64, amount_in_satoshis: i64) -> Self {
        Self {
            amount_in_coins,
            amount_in_satoshis,
        }
    }

    /// Total in satoshis: `coins * 100_000_000 + satoshis`
    pub fn total_satoshis(&self) -> i128 {
        i128::from(self.amount_in_coins) * i128::from(SATOSHIS_PER_COIN)
            + i128::from(self.amount_in_satoshis)
    }
}
