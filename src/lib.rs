#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Engine for a turn-based triangulation game.
//!
//! Players take turns connecting randomly scattered points with straight,
//! non-crossing edges. An edge that closes an empty triangle scores that
//! triangle for the drawing player, who then moves again. The game ends
//! once no further edge can be drawn.
//!
//! ```rust
//! # use trigame::game::{GameConfig, Session};
//! # use trigame::data::{Point, PointId};
//! let points = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([100.0, 0.0]),
//!   Point::new([0.0, 100.0]),
//! ];
//! let mut session = Session::from_points(GameConfig::default(), 2, points);
//! session.select_point(PointId(0)).unwrap();
//! session.select_point(PointId(1)).unwrap();
//! assert_eq!(session.active_player().usize(), 1);
//! ```
pub mod algorithms;
pub mod data;
mod error;
pub mod game;
mod intersection;
mod orientation;

pub use error::{Error, Result};
pub use intersection::Intersects;
pub use orientation::{signed_area, Orientation};
