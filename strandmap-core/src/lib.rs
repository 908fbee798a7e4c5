pub mod map_list;
pub mod range;
pub mod range_list;

pub use self::{
    map_list::{MapList, Shift},
    range::{Direction, Range},
};
