#![allow(unreachable_pub, missing_docs)]

#[cfg(feature = "ros2")]
pub trait MessageType: Sized {
    fn message_type_name() -> ros2_client::MessageTypeName;
}
#[cfg(feature = "ros2")]
macro_rules! message_type {
    ($($package_name:ident / $type_name:ident),* $(,)?) => {$(
        impl crate::msg::MessageType for crate::msg::$package_name::$type_name {
            fn message_type_name() -> ros2_client::MessageTypeName {
                ros2_client::MessageTypeName::new(stringify!($package_name), stringify!($type_name))
            }
        }
    )*};
}
#[cfg(feature = "ros2")]
message_type!(visualization_msgs / Marker, visualization_msgs / MarkerArray,);

/// [builtin_interfaces](https://github.com/ros2/rcl_interfaces/tree/HEAD/builtin_interfaces)
pub mod builtin_interfaces {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Time {
        pub sec: i32,
        pub nanosec: u32,
    }
    impl Time {
        pub const ZERO: Self = Self { sec: 0, nanosec: 0 };
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Duration {
        pub sec: i32,
        pub nanosec: u32,
    }
    impl Duration {
        /// The wire sentinel RViz reads as "never expire".
        pub const UNLIMITED: Self = Self { sec: 0, nanosec: 0 };
    }
}

/// [std_msgs](https://github.com/ros2/common_interfaces/tree/HEAD/std_msgs)
pub mod std_msgs {
    use serde::{Deserialize, Serialize};

    use crate::msg::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Header {
        pub stamp: builtin_interfaces::Time,
        pub frame_id: String,
    }
    impl Default for Header {
        fn default() -> Self {
            Self {
                stamp: builtin_interfaces::Time::ZERO,
                frame_id: Default::default(),
            }
        }
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ColorRGBA {
        pub r: f32,
        pub g: f32,
        pub b: f32,
        pub a: f32,
    }
}

/// [geometry_msgs](https://github.com/ros2/common_interfaces/tree/HEAD/geometry_msgs)
pub mod geometry_msgs {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Point {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Vector3 {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Quaternion {
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub w: f64,
    }
    // geometry_msgs/Quaternion defaults to the identity rotation, not all-zero
    impl Default for Quaternion {
        fn default() -> Self {
            Self {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                w: 1.0,
            }
        }
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Pose {
        pub position: Point,
        pub orientation: Quaternion,
    }
}

/// [visualization_msgs](https://github.com/ros2/common_interfaces/tree/HEAD/visualization_msgs)
pub mod visualization_msgs {
    use serde::{Deserialize, Serialize};

    use crate::msg::*;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Marker {
        pub header: std_msgs::Header,
        pub ns: String,
        pub id: i32,
        pub type_: i32,
        pub action: i32,
        pub pose: geometry_msgs::Pose,
        pub scale: geometry_msgs::Vector3,
        pub color: std_msgs::ColorRGBA,
        pub lifetime: builtin_interfaces::Duration,
        pub frame_locked: bool,
        pub points: Vec<geometry_msgs::Point>,
        pub colors: Vec<std_msgs::ColorRGBA>,
        pub text: String,
        pub mesh_resource: String,
        pub mesh_use_embedded_materials: bool,
    }

    impl Marker {
        /// ADD and MODIFY are the same action in ROS2.
        pub const ADD: i32 = 0;
        pub const DELETE: i32 = 2;
        pub const DELETEALL: i32 = 3;
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct MarkerArray {
        pub markers: Vec<Marker>,
    }
}
