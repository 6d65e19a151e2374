pub mod marker_layout;
