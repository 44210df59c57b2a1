use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use thiserror::Error;

use crate::views::{AdminDashboard, Cart, Home, Login, NavBar, NotFound, Orders, Register, Review};

/// The route table. One variant per navigable path, fixed at build time;
/// the catch-all stays last so every other entry is tried first.
#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dishes/:dish_id/reviews")]
        Review { dish_id: DishId },
        #[route("/cart")]
        Cart {},
        #[route("/orders")]
        Orders {},
        #[route("/admin")]
        AdminDashboard {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Path parameter of the reviews route. The value is an opaque string taken
/// verbatim from the path segment; the only constraint is that the segment
/// is non-empty, so `/dishes//reviews` falls through to the catch-all.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DishId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dish id segment must not be empty")]
pub struct EmptyDishId;

impl FromStr for DishId {
    type Err = EmptyDishId;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        if segment.is_empty() {
            return Err(EmptyDishId);
        }
        Ok(Self(segment.to_owned()))
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dish_id_keeps_the_segment_verbatim() {
        assert_eq!("42".parse::<DishId>().unwrap(), DishId("42".to_string()));
        assert_eq!("abc".parse::<DishId>().unwrap(), DishId("abc".to_string()));
    }

    #[test]
    fn dish_id_rejects_an_empty_segment() {
        assert_eq!("".parse::<DishId>(), Err(EmptyDishId));
    }
}
