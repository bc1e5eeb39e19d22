pub mod image;
pub mod switch_icon;
pub mod widget;

pub use image::{ContentFit, ImageSource};
pub use switch_icon::{DashGeometry, InstanceState, SavedState, SwitchIcon, SwitchIconStyle};
pub use widget::{Color, Event, EventResponse, MouseButton, Padding, Point, Rect, Size, Widget};
