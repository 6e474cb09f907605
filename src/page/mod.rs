//! The page itself: layout, navigation, scroll reveal, the animated project
//! counter, and the controller that ties them together.

pub mod controller;
pub mod counter;
pub mod layout;
pub mod nav;
pub mod reveal;
