/// Named marker colors, mapped to RGBA values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
    Cyan,
    Yellow,
    Orange,
    Purple,
    White,
    Black,
}
