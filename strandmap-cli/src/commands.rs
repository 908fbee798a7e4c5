mod locate;
mod overlaps;
mod shift;
mod traverse;

pub use self::{locate::locate, overlaps::overlaps, shift::shift, traverse::traverse};
