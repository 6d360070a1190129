/// Named marker sizes, mapped to uniform scale vectors on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Small,
    Medium,
    Large,
    XLarge,
}
