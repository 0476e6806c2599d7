mod fragment_codec;
mod time_codec;

pub use fragment_codec::{
    encode_fragment, parse_fragment, ChangedFields, FragmentParams, DAY_KEY, MODES_KEY, PAY_KEY,
    PEOPLE_KEY, TIME_KEY, WALK_KEY,
};
pub use time_codec::{decode_time, encode_time};
