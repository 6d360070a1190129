/// Shape kinds RViz can render. The discriminants are the
/// `visualization_msgs/Marker` type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum MarkerType {
    Arrow = 0,
    Cube = 1,
    Sphere = 2,
    Cylinder = 3,
    LineStrip = 4,
    LineList = 5,
    CubeList = 6,
    SphereList = 7,
    Points = 8,
    TextViewFacing = 9,
    MeshResource = 10,
    TriangleList = 11,
}

impl From<MarkerType> for i32 {
    fn from(value: MarkerType) -> Self {
        value as Self
    }
}
