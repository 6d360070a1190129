//! Conversions from [`rviz_tools_core`] entities to their wire
//! representations. All of them are pure value mappings; the color and scale
//! tables live here.

use rviz_tools_core::{Color, Point, Pose, Scale, Vector3};

use crate::msg::{geometry_msgs, std_msgs};

impl From<Point> for geometry_msgs::Point {
    fn from(value: Point) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}

impl From<Vector3> for geometry_msgs::Vector3 {
    fn from(value: Vector3) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}

impl From<Pose> for geometry_msgs::Pose {
    fn from(value: Pose) -> Self {
        let orientation = geometry_msgs::Quaternion {
            x: value.orientation.i,
            y: value.orientation.j,
            z: value.orientation.k,
            w: value.orientation.w,
        };
        Self {
            position: value.position.into(),
            orientation,
        }
    }
}

impl From<Color> for std_msgs::ColorRGBA {
    fn from(value: Color) -> Self {
        let (r, g, b) = match value {
            Color::Red => (1.0, 0.0, 0.0),
            Color::Green => (0.0, 1.0, 0.0),
            Color::Blue => (0.0, 0.0, 1.0),
            Color::Cyan => (0.0, 1.0, 1.0),
            Color::Yellow => (1.0, 1.0, 0.0),
            Color::Orange => (1.0, 0.5, 0.0),
            Color::Purple => (0.5, 0.0, 0.5),
            Color::White => (1.0, 1.0, 1.0),
            Color::Black => (0.0, 0.0, 0.0),
        };
        Self { r, g, b, a: 1.0 }
    }
}

impl From<Scale> for geometry_msgs::Vector3 {
    fn from(value: Scale) -> Self {
        let side = match value {
            Scale::Small => 0.1,
            Scale::Medium => 0.5,
            Scale::Large => 1.0,
            Scale::XLarge => 2.0,
        };
        Self {
            x: side,
            y: side,
            z: side,
        }
    }
}

#[cfg(test)]
mod test {
    use nalgebra as na;
    use rviz_tools_core::{Color, MarkerType, Point, Pose, Scale, Vector3};

    use crate::msg::{geometry_msgs, std_msgs};

    #[test]
    fn color_table() {
        let cases = [
            (Color::Red, (1.0, 0.0, 0.0)),
            (Color::Green, (0.0, 1.0, 0.0)),
            (Color::Blue, (0.0, 0.0, 1.0)),
            (Color::Cyan, (0.0, 1.0, 1.0)),
            (Color::Yellow, (1.0, 1.0, 0.0)),
            (Color::Orange, (1.0, 0.5, 0.0)),
            (Color::Purple, (0.5, 0.0, 0.5)),
            (Color::White, (1.0, 1.0, 1.0)),
            (Color::Black, (0.0, 0.0, 0.0)),
        ];
        for (color, (r, g, b)) in cases {
            let rgba = std_msgs::ColorRGBA::from(color);
            assert_eq!((rgba.r, rgba.g, rgba.b), (r, g, b), "{color:?}");
            assert_eq!(rgba.a, 1.0, "{color:?} must be opaque");
        }
    }

    #[test]
    fn scale_table() {
        let cases = [
            (Scale::Small, 0.1),
            (Scale::Medium, 0.5),
            (Scale::Large, 1.0),
            (Scale::XLarge, 2.0),
        ];
        for (scale, side) in cases {
            let vector = geometry_msgs::Vector3::from(scale);
            assert_eq!((vector.x, vector.y, vector.z), (side, side, side), "{scale:?}");
        }
    }

    #[test]
    fn marker_type_codes() {
        let cases = [
            (MarkerType::Arrow, 0),
            (MarkerType::Cube, 1),
            (MarkerType::Sphere, 2),
            (MarkerType::Cylinder, 3),
            (MarkerType::LineStrip, 4),
            (MarkerType::LineList, 5),
            (MarkerType::CubeList, 6),
            (MarkerType::SphereList, 7),
            (MarkerType::Points, 8),
            (MarkerType::TextViewFacing, 9),
            (MarkerType::MeshResource, 10),
            (MarkerType::TriangleList, 11),
        ];
        for (marker_type, code) in cases {
            assert_eq!(i32::from(marker_type), code, "{marker_type:?}");
        }
    }

    #[test]
    fn point_and_vector_pass_through() {
        let point = geometry_msgs::Point::from(Point {
            x: 1.0,
            y: -2.0,
            z: 0.5,
        });
        assert_eq!((point.x, point.y, point.z), (1.0, -2.0, 0.5));

        let vector = geometry_msgs::Vector3::from(Vector3 {
            x: 0.1,
            y: 0.2,
            z: 0.3,
        });
        assert_eq!((vector.x, vector.y, vector.z), (0.1, 0.2, 0.3));
    }

    #[test]
    fn pose_defaults_to_identity_orientation() {
        let pose = geometry_msgs::Pose::from(Pose::new(Point {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }));
        assert_eq!(pose.position.z, 1.0);
        assert_eq!(pose.orientation, geometry_msgs::Quaternion::default());
        assert_eq!(pose.orientation.w, 1.0);
    }

    #[test]
    fn pose_keeps_given_orientation() {
        let half_turn = na::Quaternion::new(0.0, 0.0, 0.0, 1.0);
        let pose = geometry_msgs::Pose::from(Pose::with_orientation(
            Point {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            half_turn,
        ));
        assert_eq!(pose.orientation.z, 1.0);
        assert_eq!(pose.orientation.w, 0.0);
    }
}
