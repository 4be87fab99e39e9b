//! Conversion logic: decoding, lookup tables, and the three projection passes.

mod decode;
mod export;
mod field;
mod general_info;
mod lookup;
mod normalize;
mod pairing;
mod player_list;
mod round_pairings;

pub use decode::{decode_color, decode_result};
pub use export::pairing_sheet_csv;
pub use field::{parse_date, parse_decimal, parse_uint, Parsed};
pub use normalize::{convert, Conversion, Normalizer, NormalizerConfig, DEFAULT_BYE_LABEL};
