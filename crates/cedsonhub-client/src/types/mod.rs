/*
[INPUT]:  CedsonHub wire vocabulary (currencies, amounts, invoice states)
[OUTPUT]: Typed Rust values and the uniform Outcome envelope
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod amount;
pub mod currency;
pub mod invoice;
pub mod outcome;

pub use amount::*;
pub use currency::*;
pub use invoice::*;
pub use outcome::*;
